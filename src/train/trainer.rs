use crate::{
    error::{NetworkError, Result},
    network::network::Network,
    optim::sgd::Sgd,
};

/// Forward, loss, and backward for a single example. The network's
/// parameters are updated before this returns. Returns the example's loss.
pub fn train_example(
    network: &mut Network,
    input: &[f64],
    expected: &[f64],
    optimizer: &Sgd,
) -> Result<f64> {
    if expected.len() != network.output_size() {
        return Err(NetworkError::mismatch("label vector", network.output_size(), expected.len()));
    }

    // Forward pass
    let trace = network.forward(input)?;
    let output = &trace[trace.len() - 1];

    let loss_type = network.config.loss;
    let loss = loss_type.loss(output, expected);

    // Backward pass, starting from ∂L/∂a at the output
    let error = loss_type.output_error(output, expected);
    optimizer.backward(&mut network.params, &trace, error, network.config.activation);

    Ok(loss)
}
