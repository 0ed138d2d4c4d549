use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::loss::loss_type::LossType;
use crate::network::architecture::build_layers;

/// Construction-time hyperparameters of a `Network`.
///
/// Keys are camelCase on disk (`learningRate`, `batchSize`). Any key missing
/// from a JSON file takes the value from `NetworkConfig::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkConfig {
    /// Ordered layer sizes, input first.
    pub architecture: Vec<usize>,
    pub activation: ActivationFunction,
    pub loss: LossType,
    pub learning_rate: f64,
    pub epochs: usize,
    /// Examples per mini-batch. Weights are still updated after every example.
    pub batch_size: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            architecture: vec![4, 8, 8, 2],
            activation: ActivationFunction::ReLU,
            loss: LossType::Mse,
            learning_rate: 0.01,
            epochs: 100,
            batch_size: 32,
        }
    }
}

impl NetworkConfig {
    pub fn new(architecture: Vec<usize>) -> Self {
        NetworkConfig { architecture, ..Default::default() }
    }

    pub fn with_activation(mut self, activation: ActivationFunction) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_loss(mut self, loss: LossType) -> Self {
        self.loss = loss;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Checks the architecture and the scalar hyperparameters. The upper bound
    /// on `batch_size` depends on the dataset and is checked by `train`.
    pub fn validate(&self) -> Result<()> {
        build_layers(&self.architecture)?;
        validate_learning_rate(self.learning_rate)?;
        if self.epochs == 0 {
            return Err(NetworkError::Configuration("epochs must be at least 1".into()));
        }
        if self.batch_size == 0 {
            return Err(NetworkError::Configuration("batch size must be at least 1".into()));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads a config from a JSON file and validates it.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn validate_learning_rate(learning_rate: f64) -> Result<()> {
    if learning_rate.is_finite() && learning_rate > 0.0 {
        Ok(())
    } else {
        Err(NetworkError::Configuration(format!(
            "learning rate must be a positive number, got {learning_rate}"
        )))
    }
}
