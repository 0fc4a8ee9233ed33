use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::validation::PipeError;

impl IntoResponse for PipeError {
    fn into_response(self) -> axum::response::Response {
        match self {
            PipeError::BadRequest(body) => (StatusCode::BAD_REQUEST, Json(body)).into_response(),
            PipeError::Unexpected(err) => {
                tracing::error!(error = %err, "request failed outside validation");
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                )
            }
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
