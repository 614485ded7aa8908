// src/types/job.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Separator between title and company in the dedup key
pub const DEDUP_KEY_SEPARATOR: &str = "::";

/// One job listing as returned by a job board or a scraper run.
///
/// Only `title` and `company` are looked at; every other attribute
/// (description, ids, urls, ...) is kept in `extra` and written back out
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(
        default,
        deserialize_with = "text_attribute",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_attribute",
        skip_serializing_if = "Option::is_none"
    )]
    pub company: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobRecord {
    pub fn new(title: &str, company: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            company: Some(company.to_string()),
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or_default()
    }

    /// Lowercased `title::company`. Missing attributes count as empty text.
    pub fn dedup_key(&self) -> String {
        format!("{}{}{}", self.title(), DEDUP_KEY_SEPARATOR, self.company()).to_lowercase()
    }

    /// Pass-through attribute rendered as text, if present
    pub fn field_text(&self, key: &str) -> Option<String> {
        self.extra.get(key).and_then(value_text)
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Scrapers do not agree on types; numbers and booleans are kept as text
fn text_attribute<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_key_is_lowercase() {
        let job = JobRecord::new("Senior Engineer", "ACME Corp");
        assert_eq!(job.dedup_key(), "senior engineer::acme corp");
    }

    #[test]
    fn test_dedup_key_missing_fields() {
        let job: JobRecord = serde_json::from_str(r#"{"url": "https://x"}"#).unwrap();
        assert_eq!(job.dedup_key(), "::");

        let job: JobRecord = serde_json::from_str(r#"{"title": "Dev"}"#).unwrap();
        assert_eq!(job.dedup_key(), "dev::");
    }

    #[test]
    fn test_non_string_title_and_company_become_text() {
        let raw = r#"[{"title": 404, "company": true}, {"title": null, "company": "Acme"}]"#;
        let jobs: Vec<JobRecord> = serde_json::from_str(raw).unwrap();

        assert_eq!(jobs[0].title(), "404");
        assert_eq!(jobs[0].company(), "true");
        assert_eq!(jobs[0].dedup_key(), "404::true");
        assert_eq!(jobs[1].title, None);
        assert_eq!(jobs[1].dedup_key(), "::acme");
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let raw = r#"{"title":"Dev","company":"Acme","id":42,"url":"https://jobs/42"}"#;
        let job: JobRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(job.field_text("id").as_deref(), Some("42"));
        assert_eq!(job.field_text("url").as_deref(), Some("https://jobs/42"));
        assert_eq!(job.field_text("missing"), None);

        let back: Value = serde_json::to_value(&job).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(raw).unwrap());
    }
}
