use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::notify::message;
use crate::state::SharedState;
use crate::submission::{parser, Submission};

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());

    let data = parser::parse_body(content_type, &body);
    let submission = Submission::from_value(&data);

    // Deliberately a plain comparison, not constant-time.
    if submission.site_secret.as_deref() != Some(state.config.site_secret.as_str()) {
        return Err(AppError::Unauthorized);
    }

    if !submission.has_required_fields() {
        return Err(AppError::MissingFields);
    }

    let text = message::render(&submission);

    state
        .notifier
        .send(&text)
        .await
        .map_err(|e| AppError::SendFailed(e.message))?;

    tracing::info!(
        name = submission.name.as_deref().unwrap_or(""),
        "Submission relayed"
    );

    Ok(Json(json!({ "ok": true })))
}

/// Fallback for every non-POST method on the submit route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
