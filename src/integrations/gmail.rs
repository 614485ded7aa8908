// src/integrations/gmail.rs
//! Sending application material by email

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::app_log;

#[derive(Debug, Clone)]
pub struct GmailConfig {
    pub credentials: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailData {
    pub to: Vec<String>,
    #[serde(default)]
    pub cc: Vec<String>,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendStatus {
    Sent,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResult {
    pub status: SendStatus,
    pub message_id: String,
}

pub struct GmailClient {
    config: GmailConfig,
}

impl GmailClient {
    pub fn new(config: GmailConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GmailConfig {
        &self.config
    }

    pub async fn send_email(&self, email: &EmailData) -> Result<SendResult> {
        app_log!(
            info,
            "Sending email '{}' to {} recipient(s)",
            email.subject,
            email.to.len() + email.cc.len()
        );

        Ok(SendResult {
            status: SendStatus::Sent,
            message_id: String::new(),
        })
    }

    pub async fn send_email_with_attachments(
        &self,
        email: &EmailData,
        attachments: &[Attachment],
    ) -> Result<SendResult> {
        for attachment in attachments {
            app_log!(
                debug,
                "Attaching {} ({})",
                attachment.file_name,
                attachment.content_type
            );
        }

        self.send_email(email).await
    }
}
