// Construction, forward pass and introspection of a `Network`.

use nn_engine::{
    ActivationFunction, LayerRole, LossType, Network, NetworkConfig, NetworkError,
};
use rand::{rngs::StdRng, SeedableRng};

fn seeded(config: NetworkConfig, seed: u64) -> Network {
    Network::with_rng(config, &mut StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn test_parameter_count_matches_formula() {
    for arch in [vec![2, 1], vec![2, 4, 1], vec![4, 8, 8, 2], vec![3, 7, 5, 9, 1]] {
        let expected: usize = arch.windows(2).map(|p| p[0] * p[1] + p[1]).sum();
        let network = Network::new(NetworkConfig::new(arch.clone())).unwrap();
        assert_eq!(network.parameter_count(), expected, "architecture {arch:?}");
        assert_eq!(network.network_info().parameter_count, expected);
    }
}

#[test]
fn test_parameter_shapes_follow_architecture() {
    let network = seeded(NetworkConfig::new(vec![3, 5, 2]), 1);
    let params = network.parameters();
    assert_eq!(params.len(), 2);
    assert!(params[0].weights.has_shape(3, 5));
    assert_eq!(params[0].biases.len(), 5);
    assert!(params[1].weights.has_shape(5, 2));
    assert_eq!(params[1].biases.len(), 2);
}

#[test]
fn test_glorot_bounds_and_zero_biases() {
    let network = seeded(NetworkConfig::new(vec![6, 10, 4]), 2);
    for dense in network.parameters() {
        let scale = (2.0 / (dense.input_size() + dense.size()) as f64).sqrt();
        assert!(dense.weights.data.iter().flatten().all(|w| w.abs() <= scale));
        assert!(dense.biases.iter().all(|b| *b == 0.0));
    }
}

#[test]
fn test_same_seed_same_initialization() {
    let a = seeded(NetworkConfig::new(vec![2, 4, 1]), 42);
    let b = seeded(NetworkConfig::new(vec![2, 4, 1]), 42);
    assert_eq!(a.parameters(), b.parameters());
}

#[test]
fn test_layer_roles() {
    let network = Network::new(NetworkConfig::new(vec![2, 3, 3, 1])).unwrap();
    let roles: Vec<_> = network.layers().iter().map(|l| l.role).collect();
    assert_eq!(
        roles,
        vec![LayerRole::Input, LayerRole::Hidden, LayerRole::Hidden, LayerRole::Output]
    );
    assert_eq!(network.input_size(), 2);
    assert_eq!(network.output_size(), 1);
}

#[test]
fn test_invalid_configurations_are_rejected() {
    let bad = [
        NetworkConfig::new(vec![3]),
        NetworkConfig::new(vec![]),
        NetworkConfig::new(vec![2, 0, 1]),
        NetworkConfig::new(vec![2, 1]).with_learning_rate(0.0),
        NetworkConfig::new(vec![2, 1]).with_learning_rate(-0.5),
        NetworkConfig::new(vec![2, 1]).with_learning_rate(f64::NAN),
        NetworkConfig::new(vec![2, 1]).with_epochs(0),
        NetworkConfig::new(vec![2, 1]).with_batch_size(0),
    ];
    for config in bad {
        let result = Network::new(config.clone());
        assert!(
            matches!(result, Err(NetworkError::Configuration(_))),
            "expected configuration error for {config:?}"
        );
    }
}

#[test]
fn test_forward_trace_shape() {
    let network = seeded(NetworkConfig::new(vec![3, 5, 4, 2]), 3);
    let input = [0.1, -0.2, 0.3];
    let trace = network.forward(&input).unwrap();
    let sizes: Vec<_> = trace.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![3, 5, 4, 2]);
    assert_eq!(trace[0], input.to_vec());
}

#[test]
fn test_forward_is_deterministic() {
    let config = NetworkConfig::new(vec![4, 6, 3]).with_activation(ActivationFunction::Tanh);
    let network = seeded(config, 4);
    let input = [0.5, -1.0, 0.25, 2.0];
    let first = network.forward(&input).unwrap();
    for _ in 0..5 {
        assert_eq!(network.forward(&input).unwrap(), first);
    }
}

#[test]
fn test_forward_rejects_wrong_input_size() {
    let network = Network::new(NetworkConfig::new(vec![3, 2])).unwrap();
    match network.forward(&[1.0, 2.0]) {
        Err(NetworkError::DimensionMismatch { expected, actual, .. }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("expected dimension mismatch, got {other:?}"),
    }
}

fn in_range(activation: ActivationFunction, a: f64) -> bool {
    match activation {
        ActivationFunction::Sigmoid => a > 0.0 && a < 1.0,
        ActivationFunction::Tanh => a > -1.0 && a < 1.0,
        ActivationFunction::ReLU => a >= 0.0,
        ActivationFunction::Identity => a.is_finite(),
    }
}

#[test]
fn test_activation_ranges() {
    let input = [3.0, -4.0];
    for activation in [
        ActivationFunction::Sigmoid,
        ActivationFunction::Tanh,
        ActivationFunction::ReLU,
        ActivationFunction::Identity,
    ] {
        let network = seeded(NetworkConfig::new(vec![2, 8, 3]).with_activation(activation), 5);
        let trace = network.forward(&input).unwrap();
        for layer in &trace[1..] {
            assert!(
                layer.iter().all(|&a| in_range(activation, a)),
                "{activation:?} produced {layer:?}"
            );
        }
    }
}

#[test]
fn test_predict_before_train_fails() {
    let network = Network::new(NetworkConfig::new(vec![2, 1])).unwrap();
    assert!(!network.is_trained());
    assert!(matches!(network.predict(&[0.0, 1.0]), Err(NetworkError::NotTrained)));
}

#[test]
fn test_network_info() {
    let config = NetworkConfig::new(vec![2, 4, 1])
        .with_activation(ActivationFunction::Sigmoid)
        .with_loss(LossType::Mae)
        .with_learning_rate(0.05);
    let info = Network::new(config).unwrap().network_info();
    assert_eq!(info.architecture, vec![2, 4, 1]);
    assert_eq!(info.layer_count, 3);
    assert_eq!(info.parameter_count, 17);
    assert_eq!(info.activation, ActivationFunction::Sigmoid);
    assert_eq!(info.loss, LossType::Mae);
    assert_eq!(info.learning_rate, 0.05);
    assert!(!info.is_trained);

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["layerCount"], 3);
    assert_eq!(json["activation"], "sigmoid");
    assert_eq!(json["loss"], "mae");
    assert_eq!(json["isTrained"], false);
}
