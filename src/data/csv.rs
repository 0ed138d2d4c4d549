//! CSV dataset loading.
//!
//! Supported format:
//! - UTF-8, comma-separated
//! - Optional header row (auto-detected: first row is a header if it contains
//!   any non-numeric, non-empty cell)
//! - Double-quoted fields with embedded commas are handled correctly
//!
//! Label modes:
//! - `ClassIndex`: the last column is an integer class index (0-based),
//!   one-hot encoded into a vector of length `n_classes`.
//! - `LastColumns`: the last `n` columns are floats forming the label.

use crate::error::{NetworkError, Result};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// Last column is an integer class index; one-hot encode to `n_classes`.
    ClassIndex { n_classes: usize },
    /// Last `n` columns are the label vector.
    LastColumns { n: usize },
}

/// Feature rows and label rows of equal length.
pub type Dataset = (Vec<Vec<f64>>, Vec<Vec<f64>>);

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads and parses a CSV file. See `parse_csv`.
pub fn load_csv(path: &str, label_mode: LabelMode) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)?;
    parse_csv(&text, label_mode)
}

/// Parses CSV text into `(inputs, labels)`.
///
/// Every row must have the same number of features. Blank lines are skipped.
pub fn parse_csv(text: &str, label_mode: LabelMode) -> Result<Dataset> {
    let mut lines = text.lines().peekable();

    if let Some(first) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    let mut inputs: Vec<Vec<f64>> = Vec::new();
    let mut labels: Vec<Vec<f64>> = Vec::new();

    for (row_idx, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row_num = row_idx + 1;
        let cells = parse_csv_row(line);

        let label_cols = match label_mode {
            LabelMode::ClassIndex { .. } => 1,
            LabelMode::LastColumns { n } => n,
        };
        if cells.len() <= label_cols {
            return Err(NetworkError::Dataset(format!(
                "row {row_num}: expected at least {} columns, got {}",
                label_cols + 1,
                cells.len()
            )));
        }
        let split = cells.len() - label_cols;
        let feats = parse_floats(&cells[..split], row_num)?;

        let label = match label_mode {
            LabelMode::ClassIndex { n_classes } => {
                let cell = cells[split].trim();
                let class_idx: usize = cell.parse().map_err(|_| {
                    NetworkError::Dataset(format!(
                        "row {row_num}: class index '{cell}' is not a non-negative integer"
                    ))
                })?;
                if class_idx >= n_classes {
                    return Err(NetworkError::Dataset(format!(
                        "row {row_num}: class index {class_idx} >= n_classes {n_classes}"
                    )));
                }
                let mut one_hot = vec![0.0f64; n_classes];
                one_hot[class_idx] = 1.0;
                one_hot
            }
            LabelMode::LastColumns { .. } => parse_floats(&cells[split..], row_num)?,
        };

        inputs.push(feats);
        labels.push(label);
    }

    if inputs.is_empty() {
        return Err(NetworkError::Dataset("CSV contains no data rows".into()));
    }

    let n_feats = inputs[0].len();
    if let Some((i, row)) = inputs.iter().enumerate().find(|(_, row)| row.len() != n_feats) {
        return Err(NetworkError::Dataset(format!(
            "row {}: feature count {} does not match first row's {}",
            i + 1, row.len(), n_feats
        )));
    }

    Ok((inputs, labels))
}

/// Parses a comma-separated list of numbers such as `0.5, 1, -2`.
pub fn parse_vector(text: &str) -> Result<Vec<f64>> {
    parse_floats(&parse_csv_row(text.trim()), 1)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Returns `true` if the row looks like a header (any cell non-numeric).
fn is_header(line: &str) -> bool {
    parse_csv_row(line).iter().any(|c| {
        let t = c.trim();
        !t.is_empty() && t.parse::<f64>().is_err()
    })
}

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_floats(cells: &[String], row_num: usize) -> Result<Vec<f64>> {
    cells.iter()
        .map(|c| {
            c.trim().parse::<f64>().map_err(|_| {
                NetworkError::Dataset(format!("row {row_num}: '{c}' is not a valid number"))
            })
        })
        .collect()
}
