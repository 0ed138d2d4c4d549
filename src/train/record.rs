use serde::{Serialize, Deserialize};

/// Mean training loss of one completed epoch.
///
/// `epoch` is 0-based and restarts at 0 on every `train` call; records from
/// successive calls are appended to the same history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub epoch: usize,
    pub loss: f64,
}
