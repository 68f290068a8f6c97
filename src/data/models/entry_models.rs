use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::data::models::RequestError;
use crate::utils::not_blank;

/// Source language the visitor searches in. Thai is always the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Chinese => "chinese",
        }
    }

    /// Lenient parse for query parameters: anything unknown means the default.
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Language::English),
            "chinese" => Ok(Language::Chinese),
            other => Err(RequestError::Validation(format!(
                "Unsupported language: {other}"
            ))),
        }
    }
}

/// One translation record, read-only once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chinese: Option<String>,
    pub thai: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romanized: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl DictionaryEntry {
    /// The displayed term for `language`, `None` when absent or empty.
    pub fn term(&self, language: Language) -> Option<&str> {
        let field = match language {
            Language::English => &self.english,
            Language::Chinese => &self.chinese,
        };
        non_empty(field)
    }

    /// Pronunciation aid shown next to the Thai text. The Chinese view
    /// prefers pinyin and falls back to the romanization.
    pub fn pronunciation(&self, language: Language) -> Option<&str> {
        match language {
            Language::English => non_empty(&self.romanized),
            Language::Chinese => non_empty(&self.pinyin).or_else(|| non_empty(&self.romanized)),
        }
    }

    pub fn audio(&self) -> Option<&str> {
        non_empty(&self.audio_url)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Admin payload for a new dictionary document. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewDictionaryEntry {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "english is required"))]
    pub english: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "chinese is required"))]
    pub chinese: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "thai is required"))]
    pub thai: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romanized: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "audioUrl must be a URL"))]
    pub audio_url: Option<String>,
}

impl NewDictionaryEntry {
    /// Drops optional fields left blank by the admin form.
    pub fn normalized(mut self) -> Self {
        for field in [&mut self.romanized, &mut self.pinyin, &mut self.audio_url] {
            if field.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *field = None;
            }
        }
        self
    }
}
