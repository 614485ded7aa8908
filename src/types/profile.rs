// src/types/profile.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Candidate profile handed to the AI service. Only `name` and `skills` are
/// typed; anything else in the source document is carried along.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CandidateProfile {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }
}
