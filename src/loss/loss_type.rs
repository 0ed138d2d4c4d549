use serde::{Serialize, Deserialize};

use crate::loss::{mae::MaeLoss, mse::MseLoss};

/// Selects which loss function the training loop reports.
///
/// - `Mse`: mean-squared error (default).
/// - `Mae`: mean absolute error.
///
/// Both variants feed the same residual `predicted - expected` into backprop;
/// only the scalar loss recorded in the training history differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LossType {
    #[default]
    Mse,
    Mae,
}

impl LossType {
    /// Scalar loss for one sample.
    pub fn loss(&self, predicted: &[f64], expected: &[f64]) -> f64 {
        match self {
            LossType::Mse => MseLoss::loss(predicted, expected),
            LossType::Mae => MaeLoss::loss(predicted, expected),
        }
    }

    /// Per-output error vector for one sample.
    pub fn output_error(&self, predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        match self {
            LossType::Mse => MseLoss::derivative(predicted, expected),
            LossType::Mae => MaeLoss::derivative(predicted, expected),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LossType::Mse => "mse",
            LossType::Mae => "mae",
        }
    }
}
