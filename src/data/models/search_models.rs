use serde::{Deserialize, Serialize};
use crate::data::models::{DictionaryEntry, Language, WordSource};

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub lang: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
    pub lang: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub language: Language,
    pub results: Vec<DictionaryEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordsResponse {
    pub source: WordSource,
    pub words: Vec<DictionaryEntry>,
}
