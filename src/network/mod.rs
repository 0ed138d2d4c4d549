pub mod architecture;
pub mod config;
pub mod network;
pub mod snapshot;

pub use architecture::{Layer, LayerRole};
pub use config::NetworkConfig;
pub use network::{Network, NetworkInfo};
pub use snapshot::ModelSnapshot;
