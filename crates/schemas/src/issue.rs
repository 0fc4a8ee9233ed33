//! Issues: one per failed constraint, with the path that led to it.

use core::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

/// Whether an issue came from a type check or from a refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// The value has the wrong shape (wrong type, missing key, no union match).
    Schema,
    /// The value has the right shape but fails a refinement (email, length, ...).
    Validation,
}

/// Container the path step walked into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathItemKind {
    Object,
    Array,
}

/// Key of a single path step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathKey {
    Field(String),
    Index(usize),
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Field(name) => f.write_str(name),
            PathKey::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathKey {
    fn from(value: &str) -> Self {
        Self::Field(value.to_string())
    }
}

impl From<String> for PathKey {
    fn from(value: String) -> Self {
        Self::Field(value)
    }
}

impl From<usize> for PathKey {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

/// One step from a parent value into a child value.
///
/// `key` is optional: engines that cannot name the step still report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathItem {
    pub kind: PathItemKind,
    pub key: Option<PathKey>,
}

impl PathItem {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            kind: PathItemKind::Object,
            key: Some(PathKey::Field(name.into())),
        }
    }

    pub fn index(index: usize) -> Self {
        Self {
            kind: PathItemKind::Array,
            key: Some(PathKey::Index(index)),
        }
    }

    /// A step whose key is unknown.
    pub fn unnamed(kind: PathItemKind) -> Self {
        Self { kind, key: None }
    }
}

/// A single constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    /// Name of the schema or action that raised the issue (`"string"`, `"email"`, ...).
    #[serde(rename = "type")]
    pub issue_type: &'static str,
    pub expected: Option<String>,
    pub received: String,
    pub message: String,
    /// Steps from the root to the failing value; `None` for the root itself.
    pub path: Option<Vec<PathItem>>,
}

impl Issue {
    /// Build an issue with the default message.
    ///
    /// `label` names what was invalid (`type`, `key`, `email`, `length`, ...).
    pub fn new(
        kind: IssueKind,
        issue_type: &'static str,
        label: &str,
        expected: Option<String>,
        input: Option<&Value>,
    ) -> Self {
        let received = describe(input);
        let message = match &expected {
            Some(expected) => format!("Invalid {label}: Expected {expected} but received {received}"),
            None => format!("Invalid {label}: Received {received}"),
        };

        Self {
            kind,
            issue_type,
            expected,
            received,
            message,
            path: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_path(mut self, path: Option<Vec<PathItem>>) -> Self {
        self.path = path;
        self
    }

    /// Prepend a step; used while unwinding out of nested containers.
    pub(crate) fn within(mut self, item: PathItem) -> Self {
        self.path.get_or_insert_with(Vec::new).insert(0, item);
        self
    }
}

/// Render a received value the way issue messages quote it.
///
/// `None` stands for an absent value and renders as `undefined`.
pub fn describe(input: Option<&Value>) -> String {
    match input {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(value @ Value::String(_)) => value.to_string(),
        Some(Value::Number(n)) => describe_number(n),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(_)) => "Array".to_string(),
        Some(Value::Object(_)) => "Object".to_string(),
    }
}

/// Whole floats print without a fraction (`30.0` reads as `30`).
fn describe_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn describe_quotes_strings_and_names_containers() {
        assert_eq!(describe(Some(&json!("thirty"))), "\"thirty\"");
        assert_eq!(describe(Some(&json!(30))), "30");
        assert_eq!(describe(Some(&json!(1.5))), "1.5");
        assert_eq!(describe(Some(&json!(30.0))), "30");
        assert_eq!(describe(Some(&json!(-2.0))), "-2");
        assert_eq!(describe(Some(&json!(true))), "true");
        assert_eq!(describe(Some(&json!(null))), "null");
        assert_eq!(describe(Some(&json!([1]))), "Array");
        assert_eq!(describe(Some(&json!({}))), "Object");
        assert_eq!(describe(None), "undefined");
    }

    #[test]
    fn default_message_mentions_expected_when_known() {
        let issue = Issue::new(
            IssueKind::Schema,
            "number",
            "type",
            Some("number".to_string()),
            Some(&json!("thirty")),
        );
        assert_eq!(issue.message, "Invalid type: Expected number but received \"thirty\"");
        assert_eq!(issue.path, None);

        let issue = Issue::new(IssueKind::Validation, "email", "email", None, Some(&json!("nope")));
        assert_eq!(issue.message, "Invalid email: Received \"nope\"");
    }

    #[test]
    fn within_prepends_steps() {
        let issue = Issue::new(IssueKind::Schema, "string", "type", None, None)
            .within(PathItem::field("id"))
            .within(PathItem::index(1))
            .within(PathItem::field("items"));

        let keys: Vec<String> = issue
            .path
            .unwrap()
            .iter()
            .map(|p| p.key.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(keys, ["items", "1", "id"]);
    }

    #[test]
    fn issue_serializes_with_type_tag() {
        let issue = Issue::new(IssueKind::Validation, "email", "email", None, Some(&json!("x")))
            .within(PathItem::field("email"));
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "email");
        assert_eq!(json["kind"], "validation");
        assert_eq!(json["path"][0]["key"], "email");
        assert_eq!(json["path"][0]["kind"], "object");
    }
}
