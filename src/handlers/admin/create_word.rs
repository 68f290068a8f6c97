use axum::{
    extract::State,
    response::IntoResponse,
    Extension, Json,
};
use std::sync::Arc;
use tera::Context;

use crate::{
    AppState,
    data::models::{CreateWordError, CreateWordResponse, NewDictionaryEntry},
    data::repositories::ContentStore,
    features::words::create_word,
    utils::render_template,
};

pub async fn admin_page(
    Extension(templates): Extension<Arc<tera::Tera>>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let mut context = Context::new();
    context.insert("store_config", &state.store_config.redacted());
    context.insert("can_write", &state.store.as_ref().is_some_and(|s| s.can_write()));
    render_template(&templates, "admin.html", context)
}

pub async fn create_word_api(
    State(state): State<AppState>,
    Json(payload): Json<NewDictionaryEntry>,
) -> Result<Json<CreateWordResponse>, CreateWordError> {
    let id = create_word(state.store.as_ref(), payload).await?;
    Ok(Json(CreateWordResponse {
        success: true,
        message: "Word created successfully".into(),
        word_id: Some(id),
    }))
}
