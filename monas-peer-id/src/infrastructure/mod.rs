pub mod codec;
pub mod config;

pub use config::{ConfigError, PeerIdConfig};
