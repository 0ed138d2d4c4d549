use nn_engine::{ActivationFunction, LossType, Network, NetworkConfig};

fn main() -> nn_engine::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = NetworkConfig::new(vec![2, 16, 1])
        .with_activation(ActivationFunction::Sigmoid)
        .with_loss(LossType::Mse)
        .with_learning_rate(1.0)
        .with_epochs(8000)
        .with_batch_size(4);
    let mut network = Network::new(config)?;

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let expected_outputs = vec![
        vec![0.0],
        vec![1.0],
        vec![1.0],
        vec![0.0],
    ];

    network.train(&inputs, &expected_outputs)?;

    for record in network.training_history().iter().step_by(1000) {
        println!("Epoch {}: loss = {:.6}", record.epoch, record.loss);
    }

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.predict(input)?[0]);
    }

    let info = network.network_info();
    println!("{} layers, {} parameters", info.layer_count, info.parameter_count);
    Ok(())
}
