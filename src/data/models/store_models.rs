use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::data::models::DictionaryEntry;

/// Where the working set of a page load came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct LoadedWords {
    pub source: WordSource,
    pub entries: Vec<DictionaryEntry>,
}

/// A dictionary document as the store returns it. Every field may be null.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteEntry {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub english: Option<String>,
    pub chinese: Option<String>,
    pub thai: Option<String>,
    pub romanized: Option<String>,
    pub pinyin: Option<String>,
    pub audio_url: Option<String>,
}

impl RemoteEntry {
    fn into_entry(self) -> Option<DictionaryEntry> {
        let id = self.id.filter(|id| !id.trim().is_empty())?;
        let thai = self.thai.filter(|t| !t.trim().is_empty())?;
        Some(DictionaryEntry {
            id,
            english: self.english,
            chinese: self.chinese,
            thai,
            romanized: self.romanized,
            pinyin: self.pinyin,
            audio_url: self.audio_url,
        })
    }
}

/// Keeps usable records in store order: an id and a Thai translation are
/// required, and later duplicates of an id are dropped.
pub fn validate_remote_entries(records: Vec<RemoteEntry>) -> Vec<DictionaryEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(records.len());

    for record in records {
        let label = record.id.clone().unwrap_or_else(|| "<no id>".into());
        match record.into_entry() {
            Some(entry) if seen.insert(entry.id.clone()) => entries.push(entry),
            Some(entry) => log::warn!("Dropping duplicate dictionary entry {}", entry.id),
            None => log::warn!("Dropping incomplete dictionary entry {}", label),
        }
    }

    entries
}

#[derive(Debug, Deserialize)]
pub struct QueryResponse<T> {
    pub result: T,
}

#[derive(Debug, Deserialize)]
pub struct MutateResponse {
    #[serde(default)]
    pub results: Vec<MutationResult>,
}

#[derive(Debug, Deserialize)]
pub struct MutationResult {
    pub id: String,
}

/// Body of a create mutation: the document type plus the payload fields.
#[derive(Debug, Serialize)]
pub struct NewDocument<'a, T: Serialize> {
    #[serde(rename = "_type")]
    pub doc_type: &'a str,
    #[serde(flatten)]
    pub fields: &'a T,
}
