// src/config/settings.rs
//! Typed application settings built from a parsed environment file

use clap::ValueEnum;
use tracing::info;

use super::loader::{ConfigError, ConfigLoader, ConfigMap};
use crate::integrations::{
    adzuna::AdzunaConfig, apify::ApifyConfig, gmail::GmailConfig, google_sheets::SheetsConfig,
    openrouter::OpenRouterConfig,
};

pub const ADZUNA_APP_ID: &str = "ADZUNA_APP_ID";
pub const ADZUNA_API_KEY: &str = "ADZUNA_API_KEY";
pub const ADZUNA_BASE_URL: &str = "ADZUNA_BASE_URL";
pub const APIFY_API_KEY: &str = "APIFY_API_KEY";
pub const APIFY_BASE_URL: &str = "APIFY_BASE_URL";
pub const GMAIL_CREDENTIALS: &str = "GMAIL_CREDENTIALS";
pub const GOOGLE_SHEETS_CREDENTIALS: &str = "GOOGLE_SHEETS_CREDENTIALS";
pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
pub const OPENROUTER_BASE_URL: &str = "OPENROUTER_BASE_URL";
pub const DEBUG: &str = "DEBUG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Integration {
    Adzuna,
    Apify,
    Gmail,
    GoogleSheets,
    OpenRouter,
}

impl Integration {
    pub fn required_keys(self) -> &'static [&'static str] {
        match self {
            Integration::Adzuna => &[ADZUNA_APP_ID, ADZUNA_API_KEY],
            Integration::Apify => &[APIFY_API_KEY],
            Integration::Gmail => &[GMAIL_CREDENTIALS],
            Integration::GoogleSheets => &[GOOGLE_SHEETS_CREDENTIALS],
            Integration::OpenRouter => &[OPENROUTER_API_KEY],
        }
    }

    /// `keys` followed by the keys of each integration, first occurrence kept
    pub fn merge_required_keys<'a, I>(keys: I, integrations: &[Integration]) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let integration_keys = integrations
            .iter()
            .flat_map(|integration| integration.required_keys().iter().copied());

        let mut merged: Vec<&'a str> = Vec::new();
        for key in keys.into_iter().chain(integration_keys) {
            if !merged.contains(&key) {
                merged.push(key);
            }
        }
        merged
    }
}

/// Immutable settings handed to the clients at construction time
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub adzuna: AdzunaConfig,
    pub apify: ApifyConfig,
    pub gmail: GmailConfig,
    pub sheets: SheetsConfig,
    pub openrouter: OpenRouterConfig,
    pub debug: bool,
    raw: ConfigMap,
}

impl AppConfig {
    /// Missing keys become empty strings here; call [`AppConfig::require`]
    /// before using an integration.
    pub fn from_map(config: &ConfigMap) -> Self {
        let get = |key: &str| config.get(key).cloned().unwrap_or_default();
        let base_url = |key: &str, default: &str| {
            config
                .get(key)
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            adzuna: AdzunaConfig {
                app_id: get(ADZUNA_APP_ID),
                api_key: get(ADZUNA_API_KEY),
                base_url: base_url(ADZUNA_BASE_URL, AdzunaConfig::DEFAULT_BASE_URL),
            },
            apify: ApifyConfig {
                api_key: get(APIFY_API_KEY),
                base_url: base_url(APIFY_BASE_URL, ApifyConfig::DEFAULT_BASE_URL),
            },
            gmail: GmailConfig {
                credentials: get(GMAIL_CREDENTIALS),
            },
            sheets: SheetsConfig {
                credentials: get(GOOGLE_SHEETS_CREDENTIALS),
            },
            openrouter: OpenRouterConfig {
                api_key: get(OPENROUTER_API_KEY),
                base_url: base_url(OPENROUTER_BASE_URL, OpenRouterConfig::DEFAULT_BASE_URL),
            },
            debug: config.get(DEBUG).map(String::as_str) == Some("true"),
            raw: config.clone(),
        }
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading configuration from {}", path.display());
        let map = ConfigLoader::load_env(path)?;
        Ok(Self::from_map(&map))
    }

    /// Validate the keys of every listed integration in one pass
    pub fn require(&self, integrations: &[Integration]) -> Result<(), ConfigError> {
        let keys = Integration::merge_required_keys(std::iter::empty(), integrations);
        ConfigLoader::validate(&self.raw, &keys)
    }

    pub fn raw(&self) -> &ConfigMap {
        &self.raw
    }
}
