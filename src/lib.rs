//! Job search automation: board and scraper clients, listing deduplication,
//! environment-file configuration and a structured workflow logger.

pub mod cli;
pub mod config;
pub mod dedup;
pub mod export;
pub mod integrations;
pub mod logger;
pub mod types;

pub use config::{AppConfig, ConfigError, ConfigLoader, ConfigMap};
pub use dedup::JobDeduplicator;
pub use logger::Logger;
pub use types::{CandidateProfile, JobRecord};

/// `app_log!(info, "...", args)` forwards to the matching `tracing` macro
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}
