//! Axum extractor that runs a request body through its [`ValidationPipe`].

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::app::errors;
use crate::validation::{PipeError, ValidationPipe};

/// A body type with a pipe attached.
pub trait Validated: DeserializeOwned + Send + 'static {
    fn pipe() -> &'static ValidationPipe;
}

/// Extracts `T` from a JSON body after it passed `T::pipe()`.
///
/// An empty body reaches the pipe as an absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valid<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: Validated,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let raw = if body.is_empty() {
            None
        } else {
            let value: Value = serde_json::from_slice(&body).map_err(|e| {
                errors::json_error(StatusCode::BAD_REQUEST, "invalid_json", e.to_string())
            })?;
            Some(value)
        };

        let value = T::pipe()
            .transform(raw)
            .await
            .map_err(IntoResponse::into_response)?;

        serde_json::from_value(value)
            .map(Valid)
            .map_err(|e| PipeError::Unexpected(Box::new(e)).into_response())
    }
}
