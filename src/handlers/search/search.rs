use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::Serialize;
use std::sync::Arc;
use tera::Context;

use crate::{
    AppState,
    data::models::*,
    features::search::{DEFAULT_SUGGESTION_LIMIT, SearchEngine},
    features::words::{fetch_words, load_words},
    utils::render_template,
};

/// One table row as the page shows it.
#[derive(Debug, Serialize)]
struct EntryRow<'a> {
    id: &'a str,
    term: &'a str,
    thai: &'a str,
    pronunciation: &'a str,
    audio_url: Option<&'a str>,
}

impl<'a> EntryRow<'a> {
    fn new(entry: &'a DictionaryEntry, language: Language) -> Self {
        Self {
            id: &entry.id,
            term: entry.term(language).unwrap_or_default(),
            thai: &entry.thai,
            pronunciation: entry.pronunciation(language).unwrap_or_default(),
            audio_url: entry.audio(),
        }
    }
}

// Handler for HTML page
pub async fn dictionary_page(
    Extension(templates): Extension<Arc<tera::Tera>>,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let language = Language::from_param(params.lang.as_deref());
    let words = load_words(state.store.as_ref()).await;
    let filtered = SearchEngine::filter(&words.entries, &params.q, language);
    let rows: Vec<_> = filtered.iter().map(|e| EntryRow::new(e, language)).collect();

    // Script-safe copy of the working set for live filtering in the page.
    let words_json = serde_json::to_string(&words.entries)
        .map(|json| json.replace('<', "\\u003c"))
        .unwrap_or_else(|_| "[]".to_string());

    let mut context = Context::new();
    context.insert("query", &params.q);
    context.insert("language", language.as_str());
    context.insert("rows", &rows);
    context.insert("searching", &!params.q.trim().is_empty());
    context.insert("using_fallback", &(words.source == WordSource::Fallback));
    context.insert("words_json", &words_json);
    render_template(&templates, "index.html", context)
}

pub async fn words_api(State(state): State<AppState>) -> Json<WordsResponse> {
    let words = load_words(state.store.as_ref()).await;
    Json(WordsResponse {
        source: words.source,
        words: words.entries,
    })
}

pub async fn search_api(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResult> {
    let language = Language::from_param(params.lang.as_deref());
    let entries = fetch_words(state.store.as_ref()).await;
    let results = SearchEngine::filter(&entries, &params.q, language);

    Json(SearchResult {
        query: params.q,
        language,
        results,
    })
}

pub async fn suggest_api(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Json<SearchResult> {
    let language = Language::from_param(params.lang.as_deref());
    let limit = params.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    let entries = fetch_words(state.store.as_ref()).await;
    let results = SearchEngine::suggest(&entries, &params.q, language, limit);

    Json(SearchResult {
        query: params.q,
        language,
        results,
    })
}
