// src/config/mod.rs
pub mod loader;
pub mod settings;

pub use loader::{ConfigError, ConfigLoader, ConfigMap, DEFAULT_ENV_FILE};
pub use settings::{AppConfig, Integration};
