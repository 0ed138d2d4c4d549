use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::layers::dense::Dense;
use crate::loss::loss_type::LossType;
use crate::network::architecture::{build_layers, parameter_count, Layer};
use crate::network::config::NetworkConfig;
use crate::network::snapshot::ModelSnapshot;
use crate::train::loop_fn::train_loop;
use crate::train::record::TrainingRecord;

/// A fully connected feedforward network with one global activation function.
///
/// Parameters are allocated once at construction and then updated in place
/// by every training step. All mutation goes through `&mut self`; wrap the
/// network in a `Mutex` to share it between threads.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) config: NetworkConfig,
    pub(crate) layers: Vec<Layer>,
    pub(crate) params: Vec<Dense>,
    pub(crate) history: Vec<TrainingRecord>,
    pub(crate) is_trained: bool,
}

/// Summary returned by `Network::network_info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    pub architecture: Vec<usize>,
    pub layer_count: usize,
    pub parameter_count: usize,
    pub activation: ActivationFunction,
    pub loss: LossType,
    pub learning_rate: f64,
    pub is_trained: bool,
}

impl Network {
    /// Builds a network with Glorot-initialized weights drawn from the thread RNG.
    pub fn new(config: NetworkConfig) -> Result<Network> {
        Network::with_rng(config, &mut rand::thread_rng())
    }

    /// Same as `new`, with an explicit RNG for reproducible initialization.
    pub fn with_rng<R: Rng>(config: NetworkConfig, rng: &mut R) -> Result<Network> {
        config.validate()?;
        let layers = build_layers(&config.architecture)?;
        let params = config.architecture.windows(2)
            .map(|pair| Dense::new(pair[0], pair[1], rng))
            .collect();

        info!(
            architecture = ?config.architecture,
            activation = config.activation.name(),
            loss = config.loss.name(),
            parameters = parameter_count(&config.architecture),
            "network initialized"
        );

        Ok(Network {
            config,
            layers,
            params,
            history: Vec::new(),
            is_trained: false,
        })
    }

    /// Rebuilds a network from a snapshot. Epochs and batch size are not part
    /// of a snapshot and take their default values.
    pub fn from_snapshot(snapshot: ModelSnapshot) -> Result<Network> {
        let params = snapshot.to_dense_layers()?;
        let layers = build_layers(&snapshot.architecture)?;
        let config = NetworkConfig {
            architecture: snapshot.architecture,
            activation: snapshot.activation,
            loss: snapshot.loss,
            learning_rate: snapshot.learning_rate,
            ..NetworkConfig::default()
        };
        Ok(Network {
            config,
            layers,
            params,
            history: snapshot.training_history,
            is_trained: snapshot.is_trained,
        })
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Parameters of each layer boundary, input side first.
    pub fn parameters(&self) -> &[Dense] {
        &self.params
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].size
    }

    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].size
    }

    pub fn is_trained(&self) -> bool {
        self.is_trained
    }

    /// Forward pass. Returns the activation trace: one vector per layer,
    /// starting with a copy of `input` and ending with the network output.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<Vec<f64>>> {
        if input.len() != self.input_size() {
            return Err(NetworkError::mismatch("input vector", self.input_size(), input.len()));
        }

        let mut trace = Vec::with_capacity(self.layers.len());
        trace.push(input.to_vec());
        for dense in &self.params {
            let next = dense.feed_from(&trace[trace.len() - 1], self.config.activation);
            trace.push(next);
        }
        Ok(trace)
    }

    /// Runs `config.epochs` epochs of per-example SGD over the data and marks
    /// the network as trained. See `train::loop_fn::train_loop`.
    pub fn train(&mut self, training_data: &[Vec<f64>], labels: &[Vec<f64>]) -> Result<()> {
        train_loop(self, training_data, labels)
    }

    /// Output-layer activations for `input`.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        if !self.is_trained {
            return Err(NetworkError::NotTrained);
        }
        let mut trace = self.forward(input)?;
        Ok(trace.pop().unwrap_or_default())
    }

    pub fn training_history(&self) -> &[TrainingRecord] {
        &self.history
    }

    pub fn parameter_count(&self) -> usize {
        self.params.iter().map(Dense::parameter_count).sum()
    }

    pub fn network_info(&self) -> NetworkInfo {
        NetworkInfo {
            architecture: self.config.architecture.clone(),
            layer_count: self.layers.len(),
            parameter_count: self.parameter_count(),
            activation: self.config.activation,
            loss: self.config.loss,
            learning_rate: self.config.learning_rate,
            is_trained: self.is_trained,
        }
    }

    pub fn save_model(&self) -> ModelSnapshot {
        ModelSnapshot {
            architecture: self.config.architecture.clone(),
            weights: self.params.iter().map(|d| d.weights.data.clone()).collect(),
            biases: self.params.iter().map(|d| d.biases.clone()).collect(),
            activation: self.config.activation,
            loss: self.config.loss,
            learning_rate: self.config.learning_rate,
            is_trained: self.is_trained,
            training_history: self.history.clone(),
        }
    }

    /// Replaces architecture, parameters, hyperparameters and history with the
    /// snapshot's. Epochs and batch size are kept. The snapshot is validated
    /// first; on error the network is left unchanged.
    pub fn load_model(&mut self, snapshot: ModelSnapshot) -> Result<()> {
        let params = snapshot.to_dense_layers()?;
        let layers = build_layers(&snapshot.architecture)?;

        if !snapshot.is_trained && !snapshot.training_history.is_empty() {
            warn!(
                records = snapshot.training_history.len(),
                "loaded snapshot is marked untrained but carries training history"
            );
        }

        self.config.architecture = snapshot.architecture;
        self.config.activation = snapshot.activation;
        self.config.loss = snapshot.loss;
        self.config.learning_rate = snapshot.learning_rate;
        self.layers = layers;
        self.params = params;
        self.history = snapshot.training_history;
        self.is_trained = snapshot.is_trained;

        info!(architecture = ?self.config.architecture, is_trained = self.is_trained, "model loaded");
        Ok(())
    }
}
