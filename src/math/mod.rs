pub mod matrix;

pub use matrix::{hadamard, Matrix};
