pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, parse_config_toml};
pub use error::{Error, Result};
pub use types::*;
