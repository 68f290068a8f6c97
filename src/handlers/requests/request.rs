use axum::{extract::State, Json};

use crate::{
    AppState,
    data::models::{ApiResponse, RequestError, WordRequestForm},
    features::requests::submit_request,
};

pub async fn request_word(
    State(state): State<AppState>,
    Json(form): Json<WordRequestForm>,
) -> Result<Json<ApiResponse>, RequestError> {
    submit_request(&state.request_log, &form).await?;
    Ok(Json(ApiResponse::ok("Word request submitted successfully!")))
}
