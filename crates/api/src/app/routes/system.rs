use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode};
use serde_json::json;

use keel_schemas::user_schema;

use crate::app::services::AppServices;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn hello(Extension(services): Extension<Arc<AppServices>>) -> String {
    log_sample_user();
    services.hello().to_string()
}

/// Diagnostic: parse a fixed sample user and log the outcome.
fn log_sample_user() {
    match user_schema().parse(json!({ "id": "1", "email": " " })) {
        Ok(user) => tracing::info!(%user, "parsed sample user"),
        Err(e) => tracing::error!(error = %e, "sample user rejected"),
    }
}
