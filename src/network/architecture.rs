use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

/// Position of a layer within the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerRole {
    Input,
    Hidden,
    Output,
}

/// Describes one layer of neurons. Layers carry no parameters of their own;
/// weights live on the boundaries between them (see `layers::dense::Dense`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub size: usize,
    pub role: LayerRole,
}

/// Builds layer descriptors from an ordered list of sizes.
///
/// The first layer is the input, the last is the output, everything in between
/// is hidden. Fails with `NetworkError::Configuration` for fewer than two
/// layers or a zero-sized layer.
pub fn build_layers(sizes: &[usize]) -> Result<Vec<Layer>> {
    if sizes.len() < 2 {
        return Err(NetworkError::Configuration(format!(
            "architecture needs at least 2 layers, got {}",
            sizes.len()
        )));
    }
    if let Some(idx) = sizes.iter().position(|&s| s == 0) {
        return Err(NetworkError::Configuration(format!(
            "layer {idx} has size 0; every layer needs at least one neuron"
        )));
    }

    let last = sizes.len() - 1;
    Ok(sizes.iter()
        .enumerate()
        .map(|(i, &size)| {
            let role = match i {
                0 => LayerRole::Input,
                i if i == last => LayerRole::Output,
                _ => LayerRole::Hidden,
            };
            Layer { size, role }
        })
        .collect())
}

/// Σ (sizes[i] · sizes[i+1] + sizes[i+1]) over adjacent pairs.
pub fn parameter_count(sizes: &[usize]) -> usize {
    sizes.windows(2)
        .map(|pair| pair[0] * pair[1] + pair[1])
        .sum()
}
