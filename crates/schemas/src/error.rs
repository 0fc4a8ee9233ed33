//! Parse failures.
//!
//! A parse either fails validation (the input is wrong) or fails unexpectedly
//! (a user-supplied check errored, or the schema cannot run in the requested
//! mode). The two are kept apart so callers can map them differently.

use core::fmt;

use thiserror::Error;

use crate::issue::Issue;

/// Error type user-supplied checks may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The input was rejected; carries every issue in the order it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.issues.first() {
            Some(issue) => f.write_str(&issue.message),
            None => f.write_str("validation failed"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of a failed parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input does not match the schema.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Something other than the input went wrong. The original error is kept as is.
    #[error(transparent)]
    Unexpected(BoxError),
}

impl ParseError {
    pub fn unexpected(err: impl Into<BoxError>) -> Self {
        Self::Unexpected(err.into())
    }

    /// `true` when the input was rejected, `false` for any other failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Failures caused by the schema itself rather than by the input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFault {
    #[error("schema contains asynchronous checks; use parse_async")]
    AsyncRequired,
}
