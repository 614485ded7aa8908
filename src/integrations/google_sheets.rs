// src/integrations/google_sheets.rs
//! Job tracking spreadsheet storage

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::require_id;
use crate::app_log;
use crate::types::JobRecord;

#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub credentials: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendResult {
    pub status: WriteStatus,
    pub rows_added: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub status: WriteStatus,
    pub rows_updated: usize,
}

pub struct SheetsClient {
    config: SheetsConfig,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SheetsConfig {
        &self.config
    }

    pub async fn append_data(&self, sheet_id: &str, rows: &[JobRecord]) -> Result<AppendResult> {
        let sheet_id = require_id("Sheet id", sheet_id)?;
        app_log!(info, "Appending {} row(s) to sheet {}", rows.len(), sheet_id);

        Ok(AppendResult {
            status: WriteStatus::Success,
            rows_added: rows.len(),
        })
    }

    pub async fn read_data(&self, sheet_id: &str, range: &str) -> Result<Vec<JobRecord>> {
        let sheet_id = require_id("Sheet id", sheet_id)?;
        app_log!(info, "Reading range {} from sheet {}", range, sheet_id);

        Ok(Vec::new())
    }

    pub async fn update_data(
        &self,
        sheet_id: &str,
        range: &str,
        rows: &[JobRecord],
    ) -> Result<UpdateResult> {
        let sheet_id = require_id("Sheet id", sheet_id)?;
        app_log!(
            info,
            "Updating range {} of sheet {} with {} row(s)",
            range,
            sheet_id,
            rows.len()
        );

        Ok(UpdateResult {
            status: WriteStatus::Success,
            rows_updated: rows.len(),
        })
    }
}
