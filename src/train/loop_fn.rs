use std::time::Instant;

use tracing::{debug, info};

use crate::error::{NetworkError, Result};
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::record::TrainingRecord;
use crate::train::trainer::train_example;

/// Epochs between progress log lines.
const LOG_EVERY: usize = 10;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs.
///
/// The data is walked in order (no shuffling) in consecutive mini-batches of
/// `config.batch_size`. Within a batch every example is forwarded, scored and
/// back-propagated on its own, and the weights move after each one; the batch
/// only groups examples for loss reporting. One `TrainingRecord` holding the
/// mean of the batch losses is appended per epoch.
///
/// # Errors
/// - `DimensionMismatch` if `train_inputs` and `train_labels` differ in length,
///   or when an example's input/label size does not fit the network. In the
///   latter case updates made by earlier examples are kept.
/// - `Configuration` if the dataset is empty or smaller than one batch.
///
/// `is_trained` is only set once every epoch has completed.
pub fn train_loop(
    network: &mut Network,
    train_inputs: &[Vec<f64>],
    train_labels: &[Vec<f64>],
) -> Result<()> {
    if train_inputs.len() != train_labels.len() {
        return Err(NetworkError::mismatch(
            "training labels",
            train_inputs.len(),
            train_labels.len(),
        ));
    }
    if train_inputs.is_empty() {
        return Err(NetworkError::Configuration("training data must not be empty".into()));
    }

    let batch_size = network.config.batch_size;
    if batch_size > train_inputs.len() {
        return Err(NetworkError::Configuration(format!(
            "batch size {batch_size} exceeds dataset size {}",
            train_inputs.len()
        )));
    }

    let epochs = network.config.epochs;
    let optimizer = Sgd::new(network.config.learning_rate);
    let t_start = Instant::now();

    info!(
        samples = train_inputs.len(),
        epochs,
        batch_size,
        learning_rate = optimizer.learning_rate,
        "training started"
    );

    let mut last_loss = 0.0;
    for epoch in 0..epochs {
        let loss = run_one_epoch(network, train_inputs, train_labels, &optimizer, batch_size)?;
        network.history.push(TrainingRecord { epoch, loss });
        last_loss = loss;

        if epoch % LOG_EVERY == 0 {
            debug!(epoch, loss, "epoch complete");
        }
    }

    network.is_trained = true;
    info!(
        final_loss = last_loss,
        elapsed_ms = t_start.elapsed().as_millis() as u64,
        "training completed"
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Runs one full pass over the training data.
/// Returns the mean of the per-batch mean losses.
fn run_one_epoch(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    optimizer: &Sgd,
    batch_size: usize,
) -> Result<f64> {
    let mut total_loss = 0.0;
    let mut batches = 0;

    for (batch_inputs, batch_labels) in inputs.chunks(batch_size).zip(labels.chunks(batch_size)) {
        let mut batch_loss = 0.0;
        for (input, expected) in batch_inputs.iter().zip(batch_labels.iter()) {
            batch_loss += train_example(network, input, expected, optimizer)?;
        }
        total_loss += batch_loss / batch_inputs.len() as f64;
        batches += 1;
    }

    Ok(total_loss / batches as f64)
}
