use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Element-wise nonlinearity shared by every hidden and output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationFunction {
    #[serde(alias = "linear")]
    Identity,
    #[default]
    ReLU,
    Sigmoid,
    Tanh,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Identity => x,
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// Backprop slope evaluated at a stored activation `a`.
    ///
    /// Sigmoid and tanh run `a` through the function once more and
    /// differentiate there: `s = σ(a)`, slope `s(1 - s)`; `t = tanh(a)`,
    /// slope `1 - t²`. ReLU and identity use `a` directly.
    pub fn derivative(&self, a: f64) -> f64 {
        match self {
            ActivationFunction::Identity => 1.0,
            ActivationFunction::ReLU => if a > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Sigmoid => {
                let s = self.function(a);
                s * (1.0 - s)
            }
            ActivationFunction::Tanh => {
                let t = self.function(a);
                1.0 - t * t
            }
        }
    }

    pub fn apply(&self, z: &[f64]) -> Vec<f64> {
        z.iter().map(|&x| self.function(x)).collect()
    }

    pub fn derivatives(&self, activations: &[f64]) -> Vec<f64> {
        activations.iter().map(|&a| self.derivative(a)).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Identity => "identity",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::Tanh => "tanh",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sigmoid_slope_reapplies_sigmoid() {
        let f = ActivationFunction::Sigmoid;
        assert_abs_diff_eq!(f.derivative(0.0), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(f.derivative(0.5), 0.2350037122015945, epsilon = 1e-12);
        assert_abs_diff_eq!(f.derivative(1.0), 0.19661193324148185, epsilon = 1e-12);
    }

    #[test]
    fn tanh_slope_reapplies_tanh() {
        let f = ActivationFunction::Tanh;
        assert_abs_diff_eq!(f.derivative(0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(f.derivative(0.5), 1.0 - 0.5f64.tanh().powi(2), epsilon = 1e-15);
        assert!(f.derivative(0.9) > 1.0 - 0.9 * 0.9);
    }

    #[test]
    fn relu_and_identity_use_activation_directly() {
        assert_eq!(ActivationFunction::ReLU.derivatives(&[2.0, 0.0, -1.0]), vec![1.0, 0.0, 0.0]);
        assert_eq!(ActivationFunction::Identity.derivatives(&[-3.0, 7.0]), vec![1.0, 1.0]);
    }
}
