// src/integrations/openrouter.rs
//! AI completions through OpenRouter: match analysis, resumes, cover letters

use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::endpoint;
use crate::app_log;
use crate::types::{CandidateProfile, JobRecord};

const COMPLETIONS_ENDPOINT: &str = "chat/completions";

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
}

impl OpenRouterConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://openrouter.ai/api/v1";

    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Per-model sampling settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    pub match_score: f64,
    pub reasoning: String,
    pub recommendations: Vec<String>,
}

pub struct OpenRouterClient {
    config: OpenRouterConfig,
    models: BTreeMap<String, ModelConfig>,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Self {
        Self {
            config,
            models: BTreeMap::new(),
        }
    }

    /// Register an extra model; the client is rebuilt, never mutated in place
    pub fn with_model(mut self, model_id: &str, model: ModelConfig) -> Self {
        self.models.insert(model_id.to_string(), model);
        self
    }

    pub fn model(&self, model_id: &str) -> Option<&ModelConfig> {
        self.models.get(model_id)
    }

    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn analyze_match(
        &self,
        job: &JobRecord,
        profile: &CandidateProfile,
    ) -> Result<MatchAnalysis> {
        let url = endpoint(&self.config.base_url, COMPLETIONS_ENDPOINT)?;
        app_log!(
            info,
            "Match analysis for '{}' at '{}' with {} skill(s): {}",
            job.title(),
            job.company(),
            profile.skills.len(),
            url.path()
        );

        Ok(MatchAnalysis::default())
    }

    pub async fn generate_resume(
        &self,
        profile: &CandidateProfile,
        job: &JobRecord,
    ) -> Result<String> {
        self.generate("resume", profile, job).await
    }

    pub async fn generate_cover_letter(
        &self,
        profile: &CandidateProfile,
        job: &JobRecord,
    ) -> Result<String> {
        self.generate("cover letter", profile, job).await
    }

    async fn generate(&self, kind: &str, profile: &CandidateProfile, job: &JobRecord) -> Result<String> {
        let url = endpoint(&self.config.base_url, COMPLETIONS_ENDPOINT)?;
        app_log!(
            info,
            "Generating {} for {} targeting '{}': {}",
            kind,
            profile.name.as_deref().unwrap_or("candidate"),
            job.title(),
            url.path()
        );

        Ok(String::new())
    }
}
