use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::data::models::Language;
use crate::utils::not_blank;

/// Review lifecycle of a word request. Only `Pending` is ever produced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
}

/// A visitor's suggestion for a missing word, as appended to the request log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRequest {
    pub word: String,
    pub language: Language,
    pub requested_at: DateTime<Utc>,
    pub status: RequestStatus,
}

impl WordRequest {
    pub fn pending(word: &str, language: Language) -> Self {
        Self {
            word: word.trim().to_string(),
            language,
            requested_at: Utc::now(),
            status: RequestStatus::Pending,
        }
    }
}

/// Payload of the request modal.
#[derive(Debug, Deserialize, Validate)]
pub struct WordRequestForm {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Please enter a word"))]
    pub word: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Standard API response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWordResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_id: Option<String>,
}
