use rand::Rng;
use serde::{Serialize, Deserialize};

/// Dense row-major matrix. A weight matrix between layers `i` and `i + 1`
/// has `rows == layer[i].size` and `cols == layer[i + 1].size`, so a row
/// vector of activations multiplies it from the left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Xavier (Glorot) uniform initialization: samples from
    /// U(-s, s) with s = sqrt(2 / (fan_in + fan_out)).
    ///
    /// Shape: (rows, cols). `rows` is the fan-in, `cols` the fan-out.
    pub fn glorot_uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let scale = (2.0 / (rows + cols) as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for row in res.data.iter_mut() {
            for w in row.iter_mut() {
                *w = rng.gen_range(-scale..=scale);
            }
        }
        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data
        }
    }

    /// True when the declared shape is `(rows, cols)` and every stored row
    /// actually holds `cols` values.
    pub fn has_shape(&self, rows: usize, cols: usize) -> bool {
        self.rows == rows
            && self.cols == cols
            && self.data.len() == rows
            && self.data.iter().all(|row| row.len() == cols)
    }

    /// Row-vector product `v · M`. `v.len()` must equal `rows`.
    pub fn vec_mul(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.rows);
        let mut out = vec![0.0; self.cols];
        for (x, row) in v.iter().zip(self.data.iter()) {
            for (acc, w) in out.iter_mut().zip(row.iter()) {
                *acc += x * w;
            }
        }
        out
    }

    /// Column-vector product `M · v`. `v.len()` must equal `cols`.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.cols);
        self.data.iter()
            .map(|row| row.iter().zip(v.iter()).map(|(w, x)| w * x).sum())
            .collect()
    }

    /// In-place `M -= scale * outer(left, right)`.
    pub fn sub_outer(&mut self, left: &[f64], right: &[f64], scale: f64) {
        for (row, l) in self.data.iter_mut().zip(left.iter()) {
            for (w, r) in row.iter_mut().zip(right.iter()) {
                *w -= scale * l * r;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

/// Element-wise (Hadamard) product of two same-length vectors.
pub fn hadamard(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).collect()
}
