pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Dense;
pub use network::{Layer, LayerRole, ModelSnapshot, Network, NetworkConfig, NetworkInfo};
pub use loss::loss_type::LossType;
pub use optim::sgd::Sgd;
pub use train::record::TrainingRecord;
