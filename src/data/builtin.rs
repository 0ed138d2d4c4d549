use crate::data::csv::Dataset;

/// The four XOR cases with a single 0/1 target each.
pub fn xor() -> Dataset {
    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let labels = vec![
        vec![0.0],
        vec![1.0],
        vec![1.0],
        vec![0.0],
    ];
    (inputs, labels)
}

/// Generates `n` samples of 2D "two blobs" data with one-hot labels of length 2.
/// Class 0 is centered at (0.3, 0.3), class 1 at (0.7, 0.7).
pub fn blobs(n: usize) -> Dataset {
    let mut inputs = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    let centers = [(0.3f64, 0.3f64), (0.7f64, 0.7f64)];
    for i in 0..n {
        let class = i % 2;
        let (cx, cy) = centers[class];
        // Deterministic spread from the sample index.
        let angle = i as f64 * 2.399;
        let r = 0.12 * (i as f64 * 0.31).sin().abs();
        let x = (cx + r * angle.cos()).clamp(0.0, 1.0);
        let y = (cy + r * angle.sin()).clamp(0.0, 1.0);
        inputs.push(vec![x, y]);
        let mut oh = vec![0.0, 0.0];
        oh[class] = 1.0;
        labels.push(oh);
    }
    (inputs, labels)
}
