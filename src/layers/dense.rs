use rand::Rng;

use crate::{activation::activation::ActivationFunction, math::matrix::{hadamard, Matrix}};

/// Parameters of one layer boundary: the weights and biases that map the
/// activations of layer `i` (size `input_size`) onto layer `i + 1` (size `size`).
#[derive(Debug, Clone, PartialEq)]
pub struct Dense {
    /// Shape `(input_size, size)`.
    pub weights: Matrix,
    /// Length `size`.
    pub biases: Vec<f64>,
}

impl Dense {
    /// Glorot-uniform weights, zero biases.
    pub fn new<R: Rng>(input_size: usize, size: usize, rng: &mut R) -> Dense {
        Dense {
            weights: Matrix::glorot_uniform(input_size, size, rng),
            biases: vec![0.0; size],
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    pub fn size(&self) -> usize {
        self.biases.len()
    }

    pub fn parameter_count(&self) -> usize {
        self.weights.len() + self.biases.len()
    }

    /// a = f(x · W + b)
    pub fn feed_from(&self, input: &[f64], activator: ActivationFunction) -> Vec<f64> {
        let mut z = self.weights.vec_mul(input);
        for (zi, b) in z.iter_mut().zip(self.biases.iter()) {
            *zi += b;
        }
        activator.apply(&z)
    }

    /// `W -= lr · outer(inputs, delta)`, `b -= lr · delta`.
    pub fn apply_gradients(&mut self, inputs: &[f64], delta: &[f64], lr: f64) {
        self.weights.sub_outer(inputs, delta, lr);
        for (b, d) in self.biases.iter_mut().zip(delta.iter()) {
            *b -= lr * d;
        }
    }

    /// Error for the layer feeding this one: (W · delta) ⊙ f'(inputs).
    pub fn propagate_error(
        &self,
        delta: &[f64],
        inputs: &[f64],
        activator: ActivationFunction,
    ) -> Vec<f64> {
        hadamard(&self.weights.mul_vec(delta), &activator.derivatives(inputs))
    }
}
