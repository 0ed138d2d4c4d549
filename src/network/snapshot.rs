use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::layers::dense::Dense;
use crate::loss::loss_type::LossType;
use crate::math::matrix::Matrix;
use crate::network::architecture::build_layers;
use crate::network::config::validate_learning_rate;
use crate::train::record::TrainingRecord;

/// Full exportable state of a `Network`.
///
/// Weights are stored as plain nested arrays (`weights[i][row][col]`, one
/// `layer[i].size × layer[i+1].size` matrix per boundary) so the JSON stays
/// readable by tools that know nothing about this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSnapshot {
    pub architecture: Vec<usize>,
    pub weights: Vec<Vec<Vec<f64>>>,
    pub biases: Vec<Vec<f64>>,
    pub activation: ActivationFunction,
    pub loss: LossType,
    pub learning_rate: f64,
    pub is_trained: bool,
    #[serde(default)]
    pub training_history: Vec<TrainingRecord>,
}

impl ModelSnapshot {
    /// Checks the snapshot against its own architecture and rebuilds the
    /// parameter store from it. Nothing is mutated on failure.
    pub fn to_dense_layers(&self) -> Result<Vec<Dense>> {
        build_layers(&self.architecture)?;
        validate_learning_rate(self.learning_rate)?;

        let boundaries = self.architecture.len() - 1;
        if self.weights.len() != boundaries {
            return Err(NetworkError::mismatch("snapshot weight matrices", boundaries, self.weights.len()));
        }
        if self.biases.len() != boundaries {
            return Err(NetworkError::mismatch("snapshot bias vectors", boundaries, self.biases.len()));
        }

        self.architecture.windows(2)
            .zip(self.weights.iter().zip(self.biases.iter()))
            .map(|(pair, (w, b))| {
                let (rows, cols) = (pair[0], pair[1]);
                if w.len() != rows {
                    return Err(NetworkError::mismatch("snapshot weight rows", rows, w.len()));
                }
                if let Some(row) = w.iter().find(|row| row.len() != cols) {
                    return Err(NetworkError::mismatch("snapshot weight columns", cols, row.len()));
                }
                if b.len() != cols {
                    return Err(NetworkError::mismatch("snapshot bias length", cols, b.len()));
                }
                Ok(Dense {
                    weights: Matrix::from_data(w.clone()),
                    biases: b.clone(),
                })
            })
            .collect()
    }

    /// Serializes the snapshot to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a snapshot from a JSON file previously written by `save_json`.
    /// Shapes are not checked here; `Network::load_model` does that.
    pub fn load_json(path: &str) -> Result<ModelSnapshot> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
