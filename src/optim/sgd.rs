use crate::{activation::activation::ActivationFunction, layers::dense::Dense, math::matrix::hadamard};

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// One backward pass for a single example, updating `layers` in place.
    ///
    /// `trace` is the activation trace from the forward pass (`trace[0]` is the
    /// raw input, `trace[i + 1]` the output of `layers[i]`). Each boundary is
    /// updated before the error is pushed through its (already updated)
    /// weights to the layer below.
    pub fn backward(
        &self,
        layers: &mut [Dense],
        trace: &[Vec<f64>],
        output_error: Vec<f64>,
        activator: ActivationFunction,
    ) {
        debug_assert_eq!(trace.len(), layers.len() + 1);
        let mut error = output_error;

        for i in (0..layers.len()).rev() {
            let delta = hadamard(&error, &activator.derivatives(&trace[i + 1]));
            layers[i].apply_gradients(&trace[i], &delta, self.learning_rate);

            if i > 0 {
                error = layers[i].propagate_error(&delta, &trace[i], activator);
            }
        }
    }
}
