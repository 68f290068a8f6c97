use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{
    AppState,
    data::models::WordSource,
    data::repositories::RequestLogBackend,
    features::words::load_words,
};

const SAMPLE_SIZE: usize = 3;

/// Reports whether the content store is serving real data, without the token.
pub async fn check_store(State(state): State<AppState>) -> Json<Value> {
    let words = load_words(state.store.as_ref()).await;

    let message = match (state.store.is_some(), words.source) {
        (false, _) => "Content store is not configured, using fallback data",
        (true, WordSource::Fallback) => {
            "Content store reachable but using fallback data (no content found or query failed)"
        }
        (true, WordSource::Remote) => "Content store connection successful with real data",
    };

    let pending_requests = match &state.request_log {
        RequestLogBackend::Memory(log) => Some(log.len().await),
        RequestLogBackend::Remote(_) => None,
    };

    let sample: Vec<_> = words.entries.iter().take(SAMPLE_SIZE).collect();
    let config = state.store_config.redacted();

    Json(json!({
        "message": message,
        "source": words.source,
        "config": config,
        "requestLog": state.request_log.kind(),
        "pendingRequests": pending_requests,
        "words": sample,
    }))
}
