//! Configuration: TOML file in the platform config dir, defaults when
//! absent, validated after load.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, ExportConfig};
