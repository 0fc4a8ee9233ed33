//! Request validation.
//!
//! A [`ValidationPipe`] runs a [`Parser`] over an untrusted value. Rejected
//! input becomes a [`BadRequest`] carrying one flat `{path, message}` pair per
//! issue; every other failure is handed back exactly as the parser raised it.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use keel_schemas::{BoxError, Issue, ParseError, Parser, PathItem, Schema};

/// Top-level message of every validation rejection.
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Which parser entry point a pipe calls. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Sync,
    Async,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipeOptions {
    /// Use `parse_async` instead of `parse`.
    pub asynchronous: bool,
}

/// One issue, flattened for API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedError {
    /// Dot-joined keys from the root to the failing value; empty for the root.
    pub path: String,
    pub message: String,
}

/// Body of a 400 response for rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadRequest {
    pub message: String,
    pub errors: Vec<NormalizedError>,
}

impl BadRequest {
    pub fn from_issues(issues: &[Issue]) -> Self {
        Self {
            message: VALIDATION_FAILED.to_string(),
            errors: normalize(issues),
        }
    }
}

#[derive(Debug, Error)]
pub enum PipeError {
    #[error("{}", .0.message)]
    BadRequest(BadRequest),

    /// Not a validation failure; the parser's error, untouched.
    #[error(transparent)]
    Unexpected(BoxError),
}

impl PipeError {
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::BadRequest(_))
    }
}

impl From<ParseError> for PipeError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Invalid(invalid) => Self::BadRequest(BadRequest::from_issues(invalid.issues())),
            ParseError::Unexpected(err) => Self::Unexpected(err),
        }
    }
}

/// Validates values against a parser. Holds no per-call state, so one pipe
/// can serve every request.
#[derive(Debug, Clone)]
pub struct ValidationPipe<P = Schema> {
    parser: P,
    mode: ParseMode,
}

impl<P: Parser> ValidationPipe<P> {
    pub fn new(parser: P) -> Self {
        Self::with_options(parser, PipeOptions::default())
    }

    pub fn with_options(parser: P, options: PipeOptions) -> Self {
        let mode = if options.asynchronous { ParseMode::Async } else { ParseMode::Sync };
        Self { parser, mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Check `value` (`None` for an absent value) and return the parser's output.
    pub async fn transform(&self, value: Option<Value>) -> Result<Value, PipeError> {
        let parsed = match self.mode {
            ParseMode::Sync => self.parser.parse(value),
            ParseMode::Async => self.parser.parse_async(value).await,
        };
        parsed.map_err(PipeError::from)
    }
}

/// One [`NormalizedError`] per issue, in the same order.
pub fn normalize(issues: &[Issue]) -> Vec<NormalizedError> {
    issues
        .iter()
        .map(|issue| NormalizedError {
            path: flatten_path(issue.path.as_deref()),
            message: issue.message.clone(),
        })
        .collect()
}

/// Join path keys with `.`, skipping steps without a (non-empty) key.
pub fn flatten_path(path: Option<&[PathItem]>) -> String {
    path.unwrap_or_default()
        .iter()
        .map(|item| item.key.as_ref().map(ToString::to_string).unwrap_or_default())
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
