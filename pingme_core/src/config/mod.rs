//! Layered service configuration

pub mod settings;

pub use settings::{AppConfig, LogFormat, LoggingConfig, ServerConfig, DEFAULT_CONFIG_FILE};
