pub mod builtin;
pub mod csv;

pub use csv::{load_csv, parse_csv, parse_vector, Dataset, LabelMode};
