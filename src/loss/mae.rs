use crate::loss::mse::MseLoss;

pub struct MaeLoss;

impl MaeLoss {
    /// Scalar MAE: mean(|predicted - expected|)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (p - y).abs())
            .sum::<f64>() / n
    }

    /// Output error handed to backprop: the linear residual predicted - expected,
    /// identical to MSE. Not the MAE subgradient sign(p - y).
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        MseLoss::derivative(predicted, expected)
    }
}
