//! Pipeline actions: refinements that check a typed value and transforms that
//! rewrite it.

use core::fmt;
use std::sync::{Arc, LazyLock};

use futures::future::BoxFuture;
use regex::Regex;
use serde_json::Value;

use crate::error::{BoxError, SchemaFault};
use crate::issue::{Issue, IssueKind, describe};
use crate::schema::Mode;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[\w+-]+(?:\.[\w+-]+)*@[\da-z]+(?:[.-][\da-z]+)*\.[a-z]{2,}$")
        .expect("email pattern compiles")
});

/// Synchronous predicate over a value. An `Err` aborts the whole parse.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> Result<bool, BoxError> + Send + Sync>);

impl Predicate {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub(crate) fn test(&self, value: &Value) -> Result<bool, BoxError> {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// Asynchronous predicate over a value. Only usable with `parse_async`.
#[derive(Clone)]
pub struct AsyncPredicate(
    Arc<dyn Fn(&Value) -> BoxFuture<'static, Result<bool, BoxError>> + Send + Sync>,
);

impl AsyncPredicate {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> BoxFuture<'static, Result<bool, BoxError>> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub(crate) async fn test(&self, value: &Value, mode: Mode) -> Result<bool, BoxError> {
        match mode {
            Mode::Sync => Err(Box::new(SchemaFault::AsyncRequired)),
            Mode::Async => (self.0)(value).await,
        }
    }
}

impl fmt::Debug for AsyncPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AsyncPredicate(..)")
    }
}

/// Value-to-value rewrite applied after validation.
#[derive(Clone)]
pub struct Mapper(Arc<dyn Fn(Value) -> Value + Send + Sync>);

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mapper(..)")
    }
}

/// A step in a [`Schema::pipe`](crate::Schema::pipe).
#[derive(Debug, Clone)]
pub enum Action {
    Email,
    MinLength(usize),
    MaxLength(usize),
    MinValue(f64),
    MaxValue(f64),
    Integer,
    /// RFC 3339 date-time string.
    Timestamp,
    Check {
        predicate: Predicate,
        message: Option<String>,
    },
    CheckAsync {
        predicate: AsyncPredicate,
        message: Option<String>,
    },
    Trim,
    ToLowerCase,
    Transform(Mapper),
}

impl Action {
    pub fn email() -> Self {
        Self::Email
    }

    pub fn min_length(min: usize) -> Self {
        Self::MinLength(min)
    }

    pub fn max_length(max: usize) -> Self {
        Self::MaxLength(max)
    }

    pub fn min_value(min: f64) -> Self {
        Self::MinValue(min)
    }

    pub fn max_value(max: f64) -> Self {
        Self::MaxValue(max)
    }

    pub fn integer() -> Self {
        Self::Integer
    }

    pub fn timestamp() -> Self {
        Self::Timestamp
    }

    pub fn check<F>(f: F, message: Option<&str>) -> Self
    where
        F: Fn(&Value) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        Self::Check {
            predicate: Predicate::new(f),
            message: message.map(str::to_string),
        }
    }

    pub fn check_async<F>(f: F, message: Option<&str>) -> Self
    where
        F: Fn(&Value) -> BoxFuture<'static, Result<bool, BoxError>> + Send + Sync + 'static,
    {
        Self::CheckAsync {
            predicate: AsyncPredicate::new(f),
            message: message.map(str::to_string),
        }
    }

    pub fn trim() -> Self {
        Self::Trim
    }

    pub fn to_lower_case() -> Self {
        Self::ToLowerCase
    }

    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::Transform(Mapper(Arc::new(f)))
    }

    pub fn is_transformation(&self) -> bool {
        matches!(self, Self::Trim | Self::ToLowerCase | Self::Transform(_))
    }

    /// Run a refinement. Returns the issue it raised, if any.
    pub(crate) async fn validate(&self, value: &Value, mode: Mode) -> Result<Option<Issue>, BoxError> {
        let issue = match self {
            Self::Email => {
                let ok = value.as_str().is_some_and(|s| EMAIL.is_match(s));
                (!ok).then(|| refinement("email", "email", None, value))
            }
            Self::MinLength(min) => match length(value) {
                Some(len) if len >= *min => None,
                len => Some(bound("min_length", "length", format!(">={min}"), len, value)),
            },
            Self::MaxLength(max) => match length(value) {
                Some(len) if len <= *max => None,
                len => Some(bound("max_length", "length", format!("<={max}"), len, value)),
            },
            Self::MinValue(min) => match value.as_f64() {
                Some(n) if n >= *min => None,
                _ => Some(refinement("min_value", "value", Some(format!(">={min}")), value)),
            },
            Self::MaxValue(max) => match value.as_f64() {
                Some(n) if n <= *max => None,
                _ => Some(refinement("max_value", "value", Some(format!("<={max}")), value)),
            },
            Self::Integer => {
                let ok = value.is_i64() || value.is_u64() || value.as_f64().is_some_and(|n| n.fract() == 0.0);
                (!ok).then(|| refinement("integer", "integer", None, value))
            }
            Self::Timestamp => {
                let ok = value
                    .as_str()
                    .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok());
                (!ok).then(|| refinement("timestamp", "timestamp", None, value))
            }
            Self::Check { predicate, message } => {
                if predicate.test(value)? {
                    None
                } else {
                    Some(with_custom(refinement("check", "input", None, value), message))
                }
            }
            Self::CheckAsync { predicate, message } => {
                if predicate.test(value, mode).await? {
                    None
                } else {
                    Some(with_custom(refinement("check_async", "input", None, value), message))
                }
            }
            Self::Trim | Self::ToLowerCase | Self::Transform(_) => None,
        };
        Ok(issue)
    }

    /// Apply a transform. Refinements return the value untouched.
    pub(crate) fn apply(&self, value: Value) -> Value {
        match (self, value) {
            (Self::Trim, Value::String(s)) => Value::String(s.trim().to_string()),
            (Self::ToLowerCase, Value::String(s)) => Value::String(s.to_lowercase()),
            (Self::Transform(Mapper(f)), value) => f(value),
            (_, value) => value,
        }
    }
}

fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

fn refinement(issue_type: &'static str, label: &str, expected: Option<String>, value: &Value) -> Issue {
    Issue::new(IssueKind::Validation, issue_type, label, expected, Some(value))
}

/// Length issues report the measured length rather than the value itself.
fn bound(issue_type: &'static str, label: &str, expected: String, len: Option<usize>, value: &Value) -> Issue {
    let received = match len {
        Some(len) => len.to_string(),
        None => describe(Some(value)),
    };
    let message = format!("Invalid {label}: Expected {expected} but received {received}");
    Issue {
        kind: IssueKind::Validation,
        issue_type,
        expected: Some(expected),
        received,
        message,
        path: None,
    }
}

fn with_custom(issue: Issue, message: &Option<String>) -> Issue {
    match message {
        Some(message) => issue.with_message(message.clone()),
        None => issue,
    }
}
