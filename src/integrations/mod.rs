// src/integrations/mod.rs
//! Clients for the external services the workflow talks to.
//!
//! Each client owns an immutable config struct and exposes async operations
//! that return `anyhow::Result`. Request bodies are not sent yet; the calls
//! resolve their endpoint and hand back the empty result shapes.

use anyhow::{Context, Result};
use reqwest::Url;

pub mod adzuna;
pub mod apify;
pub mod gmail;
pub mod google_sheets;
pub mod openrouter;

pub use adzuna::AdzunaClient;
pub use apify::ApifyClient;
pub use gmail::GmailClient;
pub use google_sheets::SheetsClient;
pub use openrouter::OpenRouterClient;

/// Join `path` onto `base_url`, keeping every segment of the base
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url> {
    let raw = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&raw).with_context(|| format!("Invalid endpoint URL: {}", raw))
}

/// Reject identifiers that would leave an empty path segment
pub(crate) fn require_id<'a>(kind: &str, id: &'a str) -> Result<&'a str> {
    let id = id.trim();
    if id.is_empty() {
        anyhow::bail!("{} must not be empty", kind);
    }
    Ok(id)
}
