use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    MethodNotAllowed,
    Unauthorized,
    MissingFields,
    SendFailed(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MethodNotAllowed => write!(f, "Method not allowed"),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::MissingFields => write!(f, "Missing required fields"),
            AppError::SendFailed(cause) => write!(f, "Send failed: {cause}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AppError::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            AppError::SendFailed(cause) => {
                tracing::error!("Send failed: {cause}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Send failed")
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
