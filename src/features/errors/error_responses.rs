use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use crate::data::models::{ApiResponse, CreateWordError, CreateWordResponse, RequestError};

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match self {
            RequestError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(ApiResponse::failed(self.to_string()))).into_response()
    }
}

impl IntoResponse for CreateWordError {
    fn into_response(self) -> Response {
        let status = match &self {
            CreateWordError::Validation(_) => StatusCode::BAD_REQUEST,
            CreateWordError::MissingToken => StatusCode::UNAUTHORIZED,
            CreateWordError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            CreateWordError::Store(e) => {
                log::error!("Error creating word: {}", e);
                StatusCode::BAD_GATEWAY
            }
        };

        let body = CreateWordResponse {
            success: false,
            message: self.to_string(),
            word_id: None,
        };

        (status, Json(body)).into_response()
    }
}
