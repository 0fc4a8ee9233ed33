//! The schema tree and the walker that checks values against it.

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::{Map, Value};

use crate::action::{Action, AsyncPredicate, Predicate};
use crate::error::{BoxError, ParseError, SchemaFault, ValidationError};
use crate::issue::{Issue, IssueKind, PathItem};

/// How a walk treats asynchronous checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Asynchronous checks fail with [`SchemaFault::AsyncRequired`].
    Sync,
    Async,
}

/// Declarative description of an expected value.
///
/// Build with the constructor functions and combinators; schemas are cheap to
/// clone and safe to share between threads.
#[derive(Debug, Clone)]
pub enum Schema {
    Any,
    String,
    Number,
    Boolean,
    /// Declared entries, checked in order. Unknown keys are dropped from the output.
    Object(Vec<(String, Schema)>),
    Array(Box<Schema>),
    Union(Vec<Schema>),
    Optional {
        wrapped: Box<Schema>,
        default: Option<Value>,
    },
    Nullable(Box<Schema>),
    Pipe {
        root: Box<Schema>,
        actions: Vec<Action>,
    },
    Custom(Predicate),
    CustomAsync(AsyncPredicate),
}

/// Intermediate result of a walk.
#[derive(Debug)]
pub(crate) struct Outcome {
    /// `None` when the value is absent (an omitted optional key).
    value: Option<Value>,
    issues: Vec<Issue>,
    /// `false` once the value failed a type check somewhere below.
    typed: bool,
}

impl Outcome {
    fn typed(value: Option<Value>) -> Self {
        Self {
            value,
            issues: Vec::new(),
            typed: true,
        }
    }

    fn mismatch(issue_type: &'static str, expected: String, input: Option<&Value>) -> Self {
        Self {
            value: input.cloned(),
            issues: vec![Issue::new(IssueKind::Schema, issue_type, "type", Some(expected), input)],
            typed: false,
        }
    }
}

impl Schema {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn string() -> Self {
        Self::String
    }

    pub fn number() -> Self {
        Self::Number
    }

    pub fn boolean() -> Self {
        Self::Boolean
    }

    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Schema)>,
    {
        Self::Object(entries.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }

    pub fn array(item: Schema) -> Self {
        Self::Array(Box::new(item))
    }

    pub fn union(options: impl IntoIterator<Item = Schema>) -> Self {
        Self::Union(options.into_iter().collect())
    }

    /// Schema defined by a predicate. An absent value is tested as `null`.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        Self::Custom(Predicate::new(f))
    }

    pub fn custom_async<F>(f: F) -> Self
    where
        F: Fn(&Value) -> BoxFuture<'static, Result<bool, BoxError>> + Send + Sync + 'static,
    {
        Self::CustomAsync(AsyncPredicate::new(f))
    }

    /// Accept an absent value.
    pub fn optional(self) -> Self {
        Self::Optional {
            wrapped: Box::new(self),
            default: None,
        }
    }

    /// Accept an absent value and substitute `default` for it.
    pub fn optional_or(self, default: Value) -> Self {
        Self::Optional {
            wrapped: Box::new(self),
            default: Some(default),
        }
    }

    /// Accept `null`.
    pub fn nullable(self) -> Self {
        Self::Nullable(Box::new(self))
    }

    /// Run `actions` in order on values that pass this schema.
    pub fn pipe(self, actions: impl IntoIterator<Item = Action>) -> Self {
        Self::Pipe {
            root: Box::new(self),
            actions: actions.into_iter().collect(),
        }
    }

    /// Check `input` synchronously and return the canonical output.
    pub fn parse(&self, input: Value) -> Result<Value, ParseError> {
        self.parse_input(Some(input))
    }

    /// Like [`parse`](Self::parse); `None` stands for an absent input.
    ///
    /// An absent output (an optional root with no input) comes back as `null`.
    pub fn parse_input(&self, input: Option<Value>) -> Result<Value, ParseError> {
        // In sync mode no check ever suspends, so the walk is ready on first poll.
        match self.run(input, Mode::Sync).now_or_never() {
            Some(result) => finish(result),
            None => Err(ParseError::unexpected(SchemaFault::AsyncRequired)),
        }
    }

    /// Check `input`, awaiting asynchronous checks.
    pub async fn parse_async(&self, input: Value) -> Result<Value, ParseError> {
        self.parse_input_async(Some(input)).await
    }

    pub async fn parse_input_async(&self, input: Option<Value>) -> Result<Value, ParseError> {
        finish(self.run(input, Mode::Async).await)
    }

    /// Human-readable name of what this schema accepts.
    pub fn expects(&self) -> String {
        match self {
            Self::Any => "any".to_string(),
            Self::String => "string".to_string(),
            Self::Number => "number".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Object(_) => "Object".to_string(),
            Self::Array(_) => "Array".to_string(),
            Self::Union(options) => {
                let mut seen = Vec::new();
                for expected in options.iter().map(Schema::expects) {
                    if !seen.contains(&expected) {
                        seen.push(expected);
                    }
                }
                seen.join(" | ")
            }
            Self::Optional { wrapped, .. } => format!("{} | undefined", wrapped.expects()),
            Self::Nullable(wrapped) => format!("{} | null", wrapped.expects()),
            Self::Pipe { root, .. } => root.expects(),
            Self::Custom(_) | Self::CustomAsync(_) => "unknown".to_string(),
        }
    }

    /// Whether an object may omit the key this schema is attached to.
    fn accepts_missing(&self) -> bool {
        match self {
            Self::Optional { .. } => true,
            Self::Pipe { root, .. } => root.accepts_missing(),
            _ => false,
        }
    }

    pub(crate) fn run<'a>(
        &'a self,
        input: Option<Value>,
        mode: Mode,
    ) -> BoxFuture<'a, Result<Outcome, BoxError>> {
        async move {
            match self {
                Self::Any => Ok(Outcome::typed(input)),
                Self::String => Ok(primitive(input, Value::is_string, "string")),
                Self::Number => Ok(primitive(input, Value::is_number, "number")),
                Self::Boolean => Ok(primitive(input, Value::is_boolean, "boolean")),
                Self::Object(entries) => run_object(entries, input, mode).await,
                Self::Array(item) => run_array(item, input, mode).await,
                Self::Union(options) => {
                    let mut typed = Vec::new();
                    let mut untyped = Vec::new();
                    for option in options {
                        let outcome = option.run(input.clone(), mode).await?;
                        match (outcome.typed, outcome.issues.is_empty()) {
                            (true, true) => return Ok(outcome),
                            (true, false) => typed.push(outcome),
                            _ => untyped.push(outcome),
                        }
                    }
                    // A lone candidate keeps its own issues; several collapse into one.
                    let mut candidates = if typed.is_empty() { untyped } else { typed };
                    if candidates.len() == 1 {
                        return Ok(candidates.remove(0));
                    }
                    let mut outcome = Outcome::mismatch("union", self.expects(), input.as_ref());
                    outcome.typed = candidates.first().is_some_and(|c| c.typed);
                    Ok(outcome)
                }
                Self::Optional { wrapped, default } => match input.or_else(|| default.clone()) {
                    None => Ok(Outcome::typed(None)),
                    present => wrapped.run(present, mode).await,
                },
                Self::Nullable(wrapped) => match input {
                    Some(Value::Null) => Ok(Outcome::typed(Some(Value::Null))),
                    other => wrapped.run(other, mode).await,
                },
                Self::Pipe { root, actions } => run_pipe(root, actions, input, mode).await,
                Self::Custom(predicate) => {
                    let ok = predicate.test(input.as_ref().unwrap_or(&Value::Null))?;
                    Ok(custom_outcome(ok, input))
                }
                Self::CustomAsync(predicate) => {
                    let ok = predicate
                        .test(input.as_ref().unwrap_or(&Value::Null), mode)
                        .await?;
                    Ok(custom_outcome(ok, input))
                }
            }
        }
        .boxed()
    }
}

fn finish(result: Result<Outcome, BoxError>) -> Result<Value, ParseError> {
    let outcome = result.map_err(ParseError::Unexpected)?;
    if outcome.issues.is_empty() {
        Ok(outcome.value.unwrap_or(Value::Null))
    } else {
        Err(ValidationError::new(outcome.issues).into())
    }
}

fn primitive(input: Option<Value>, accepts: fn(&Value) -> bool, name: &'static str) -> Outcome {
    match input {
        Some(value) if accepts(&value) => Outcome::typed(Some(value)),
        other => Outcome::mismatch(name, name.to_string(), other.as_ref()),
    }
}

fn custom_outcome(ok: bool, input: Option<Value>) -> Outcome {
    if ok {
        Outcome::typed(input)
    } else {
        Outcome::mismatch("custom", "unknown".to_string(), input.as_ref())
    }
}

async fn run_object(
    entries: &[(String, Schema)],
    input: Option<Value>,
    mode: Mode,
) -> Result<Outcome, BoxError> {
    let mut fields = match input {
        Some(Value::Object(fields)) => fields,
        other => return Ok(Outcome::mismatch("object", "Object".to_string(), other.as_ref())),
    };

    let mut output = Map::new();
    let mut issues = Vec::new();
    let mut typed = true;

    for (key, schema) in entries {
        let step = PathItem::field(key.clone());
        let value = fields.remove(key);

        if value.is_none() && !schema.accepts_missing() {
            let issue = Issue::new(IssueKind::Schema, "object", "key", Some(format!("\"{key}\"")), None);
            issues.push(issue.within(step));
            typed = false;
            continue;
        }

        let outcome = schema.run(value, mode).await?;
        typed &= outcome.typed;
        issues.extend(outcome.issues.into_iter().map(|i| i.within(step.clone())));
        if let Some(value) = outcome.value {
            output.insert(key.clone(), value);
        }
    }

    Ok(Outcome {
        value: Some(Value::Object(output)),
        issues,
        typed,
    })
}

async fn run_array(item: &Schema, input: Option<Value>, mode: Mode) -> Result<Outcome, BoxError> {
    let items = match input {
        Some(Value::Array(items)) => items,
        other => return Ok(Outcome::mismatch("array", "Array".to_string(), other.as_ref())),
    };

    let mut output = Vec::with_capacity(items.len());
    let mut issues = Vec::new();
    let mut typed = true;

    for (index, value) in items.into_iter().enumerate() {
        let outcome = item.run(Some(value), mode).await?;
        typed &= outcome.typed;
        issues.extend(outcome.issues.into_iter().map(|i| i.within(PathItem::index(index))));
        output.push(outcome.value.unwrap_or(Value::Null));
    }

    Ok(Outcome {
        value: Some(Value::Array(output)),
        issues,
        typed,
    })
}

async fn run_pipe(
    root: &Schema,
    actions: &[Action],
    input: Option<Value>,
    mode: Mode,
) -> Result<Outcome, BoxError> {
    let mut outcome = root.run(input, mode).await?;

    for action in actions {
        if action.is_transformation() {
            // Never rewrite a value that already has issues.
            if !outcome.issues.is_empty() {
                outcome.typed = false;
                break;
            }
            outcome.value = outcome.value.map(|v| action.apply(v));
        } else if outcome.typed {
            if let Some(value) = &outcome.value {
                if let Some(issue) = action.validate(value, mode).await? {
                    outcome.issues.push(issue);
                }
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::PathKey;
    use proptest::prelude::*;
    use serde_json::json;

    fn issues(err: ParseError) -> Vec<Issue> {
        match err {
            ParseError::Invalid(e) => e.into_issues(),
            ParseError::Unexpected(e) => panic!("unexpected failure: {e}"),
        }
    }

    fn dotted(issue: &Issue) -> String {
        issue
            .path
            .iter()
            .flatten()
            .filter_map(|p| p.key.as_ref().map(PathKey::to_string))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn person() -> Schema {
        Schema::object([("name", Schema::string()), ("age", Schema::number())])
    }

    #[test]
    fn valid_data_passes_through_unchanged() {
        let input = json!({ "name": "John", "age": 30 });
        assert_eq!(person().parse(input.clone()).unwrap(), input);
    }

    #[test]
    fn wrong_type_reports_the_field() {
        let found = issues(person().parse(json!({ "name": "John", "age": "thirty" })).unwrap_err());
        assert_eq!(found.len(), 1);
        assert_eq!(dotted(&found[0]), "age");
        assert_eq!(found[0].message, "Invalid type: Expected number but received \"thirty\"");
        assert_eq!(found[0].kind, IssueKind::Schema);
    }

    #[test]
    fn missing_required_key_is_a_key_issue() {
        let schema = Schema::object([("name", Schema::string()), ("email", Schema::string())]);
        let found = issues(schema.parse(json!({ "name": "John" })).unwrap_err());
        assert_eq!(found.len(), 1);
        assert_eq!(dotted(&found[0]), "email");
        assert_eq!(found[0].message, "Invalid key: Expected \"email\" but received undefined");
    }

    #[test]
    fn unknown_keys_are_stripped() {
        let out = person()
            .parse(json!({ "name": "John", "age": 30, "admin": true }))
            .unwrap();
        assert_eq!(out, json!({ "name": "John", "age": 30 }));
    }

    #[test]
    fn multiple_failures_keep_declaration_order() {
        let schema = Schema::object([
            ("name", Schema::string().pipe([Action::min_length(2)])),
            ("age", Schema::number().pipe([Action::min_value(18.0)])),
        ]);
        let found = issues(schema.parse(json!({ "name": "A", "age": 10 })).unwrap_err());
        let paths: Vec<String> = found.iter().map(dotted).collect();
        assert_eq!(paths, ["name", "age"]);
    }

    #[test]
    fn nested_objects_build_full_paths() {
        let schema = Schema::object([(
            "user",
            Schema::object([(
                "profile",
                Schema::object([("email", Schema::string().pipe([Action::email()]))]),
            )]),
        )]);
        let found = issues(
            schema
                .parse(json!({ "user": { "profile": { "email": "invalid" } } }))
                .unwrap_err(),
        );
        assert_eq!(dotted(&found[0]), "user.profile.email");
        assert_eq!(found[0].message, "Invalid email: Received \"invalid\"");
    }

    #[test]
    fn array_items_are_checked_with_indices() {
        let schema = Schema::object([(
            "items",
            Schema::array(Schema::object([("id", Schema::number()), ("name", Schema::string())])),
        )]);
        let found = issues(
            schema
                .parse(json!({ "items": [
                    { "id": 1, "name": "Item 1" },
                    { "id": "two", "name": "Item 2" },
                ] }))
                .unwrap_err(),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(dotted(&found[0]), "items.1.id");

        let tags = Schema::object([("tags", Schema::array(Schema::string()))]);
        let input = json!({ "tags": ["tag1", "tag2"] });
        assert_eq!(tags.parse(input.clone()).unwrap(), input);
    }

    #[test]
    fn array_reports_every_bad_item() {
        let schema = Schema::object([("numbers", Schema::array(Schema::number()))]);
        let found = issues(schema.parse(json!({ "numbers": [1, "two", 3, "four"] })).unwrap_err());
        let paths: Vec<String> = found.iter().map(dotted).collect();
        assert_eq!(paths, ["numbers.1", "numbers.3"]);
    }

    #[test]
    fn null_and_absent_roots_are_rejected_by_objects() {
        let schema = Schema::object([("name", Schema::string())]);

        let found = issues(schema.parse(Value::Null).unwrap_err());
        assert_eq!(found[0].message, "Invalid type: Expected Object but received null");
        assert_eq!(found[0].path, None);

        let found = issues(schema.parse_input(None).unwrap_err());
        assert_eq!(found[0].message, "Invalid type: Expected Object but received undefined");
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let schema = Schema::object([
            ("name", Schema::string().optional()),
            ("age", Schema::number().optional()),
        ]);
        assert_eq!(schema.parse(json!({})).unwrap(), json!({}));

        let schema = Schema::object([("name", Schema::string().optional()), ("age", Schema::number())]);
        assert_eq!(schema.parse(json!({ "age": 30 })).unwrap(), json!({ "age": 30 }));
    }

    #[test]
    fn optional_default_fills_missing_keys_and_is_validated() {
        let schema = Schema::object([("role", Schema::string().optional_or(json!("member")))]);
        assert_eq!(schema.parse(json!({})).unwrap(), json!({ "role": "member" }));

        let schema = Schema::object([("role", Schema::number().optional_or(json!("oops")))]);
        assert!(schema.parse(json!({})).is_err());
    }

    #[test]
    fn nullable_accepts_null_but_not_absence() {
        let schema = Schema::object([("name", Schema::string().nullable())]);
        assert_eq!(schema.parse(json!({ "name": null })).unwrap(), json!({ "name": null }));
        assert_eq!(schema.parse(json!({ "name": "John" })).unwrap(), json!({ "name": "John" }));
        assert!(schema.parse(json!({})).is_err());
    }

    #[test]
    fn unions_accept_any_option() {
        let schema = Schema::union([Schema::string(), Schema::number()]);
        assert_eq!(schema.parse(json!("test")).unwrap(), json!("test"));
        assert_eq!(schema.parse(json!(42)).unwrap(), json!(42));

        let found = issues(schema.parse(json!(true)).unwrap_err());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].issue_type, "union");
        assert_eq!(found[0].message, "Invalid type: Expected string | number but received true");
    }

    #[test]
    fn union_prefers_issues_from_a_typed_option() {
        let schema = Schema::union([
            Schema::string().pipe([Action::email()]),
            Schema::number(),
        ]);
        let found = issues(schema.parse(json!("nope")).unwrap_err());
        assert_eq!(found[0].issue_type, "email");
    }

    #[test]
    fn union_collapses_several_typed_failures_into_one_issue() {
        let schema = Schema::union([
            Schema::string().pipe([Action::email()]),
            Schema::string().pipe([Action::min_length(10)]),
        ]);
        let found = issues(schema.parse(json!("abc")).unwrap_err());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].issue_type, "union");
        assert_eq!(found[0].message, "Invalid type: Expected string but received \"abc\"");
    }

    #[test]
    fn whole_floats_are_described_without_a_fraction() {
        let input: Value = serde_json::from_str("30.0").unwrap();
        let found = issues(Schema::string().parse(input).unwrap_err());
        assert_eq!(found[0].message, "Invalid type: Expected string but received 30");
    }

    #[test]
    fn union_with_a_single_mismatched_option_reports_that_option() {
        let schema = Schema::union([Schema::string()]);
        let found = issues(schema.parse(json!(1)).unwrap_err());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].issue_type, "string");
        assert_eq!(found[0].message, "Invalid type: Expected string but received 1");
    }

    #[test]
    fn transforms_shape_the_output() {
        let schema = Schema::object([("email", Schema::string())]).pipe([Action::transform(|mut v| {
            if let Some(email) = v.get_mut("email") {
                if let Some(s) = email.as_str() {
                    *email = Value::String(s.to_lowercase());
                }
            }
            v
        })]);
        let out = schema.parse(json!({ "email": "TEST@EXAMPLE.COM" })).unwrap();
        assert_eq!(out, json!({ "email": "test@example.com" }));
    }

    #[test]
    fn transforms_are_skipped_once_an_issue_exists() {
        let schema = Schema::string().pipe([Action::min_length(5), Action::to_lower_case(), Action::max_length(1)]);
        let found = issues(schema.parse(json!("ABC")).unwrap_err());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].issue_type, "min_length");
    }

    #[test]
    fn validations_keep_running_after_a_failed_validation() {
        let schema = Schema::string().pipe([Action::min_length(10), Action::email()]);
        let found = issues(schema.parse(json!("abc")).unwrap_err());
        let types: Vec<&str> = found.iter().map(|i| i.issue_type).collect();
        assert_eq!(types, ["min_length", "email"]);
    }

    #[test]
    fn validations_skip_untyped_values() {
        let schema = Schema::string().pipe([Action::email()]);
        let found = issues(schema.parse(json!(5)).unwrap_err());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].issue_type, "string");
    }

    #[test]
    fn custom_errors_are_not_validation_failures() {
        #[derive(Debug, thiserror::Error)]
        #[error("Custom error")]
        struct Custom;

        let schema = Schema::custom(|_| Err(Custom.into()));
        let err = schema.parse(json!("any")).unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Custom error");
    }

    #[tokio::test]
    async fn failing_check_predicates_are_not_validation_failures() {
        #[derive(Debug, thiserror::Error)]
        #[error("lookup failed")]
        struct Lookup;

        let schema = Schema::object([(
            "name",
            Schema::string().pipe([Action::check(|_| Err(Lookup.into()), Some("bad name"))]),
        )]);
        let input = json!({ "name": "ada" });

        let err = schema.parse(input.clone()).unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "lookup failed");

        let err = schema.parse_async(input.clone()).await.unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "lookup failed");

        let schema = Schema::object([(
            "name",
            Schema::string().pipe([Action::check_async(
                |_| async { Err::<bool, BoxError>(Lookup.into()) }.boxed(),
                None,
            )]),
        )]);
        let err = schema.parse_async(input).await.unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "lookup failed");
    }

    #[test]
    fn custom_predicate_false_is_a_type_issue() {
        let schema = Schema::custom(|v| Ok(v.as_str().is_some_and(|s| s.starts_with('#'))));
        assert!(schema.parse(json!("#ok")).is_ok());
        let err = schema.parse(json!("nope")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn sync_parse_refuses_async_checks() {
        let schema = Schema::custom_async(|_| async { Ok::<_, BoxError>(true) }.boxed());
        match schema.parse(json!(1)).unwrap_err() {
            ParseError::Unexpected(e) => {
                assert_eq!(e.downcast_ref::<SchemaFault>(), Some(&SchemaFault::AsyncRequired));
            }
            other => panic!("expected unexpected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn async_parse_awaits_checks_in_order() {
        let taken = Action::check_async(
            |v| {
                let taken = v.as_str() == Some("taken");
                async move { Ok::<_, BoxError>(!taken) }.boxed()
            },
            Some("already taken"),
        );
        let schema = Schema::object([
            ("username", Schema::string().pipe([taken])),
            ("age", Schema::number()),
        ]);

        let found = issues(
            schema
                .parse_async(json!({ "username": "taken", "age": "x" }))
                .await
                .unwrap_err(),
        );
        let summary: Vec<(String, String)> = found.iter().map(|i| (dotted(i), i.message.clone())).collect();
        assert_eq!(
            summary,
            [
                ("username".to_string(), "already taken".to_string()),
                ("age".to_string(), "Invalid type: Expected number but received \"x\"".to_string()),
            ]
        );

        let ok = schema.parse_async(json!({ "username": "free", "age": 3 })).await.unwrap();
        assert_eq!(ok, json!({ "username": "free", "age": 3 }));
    }

    #[test]
    fn expects_describes_composites() {
        assert_eq!(Schema::string().nullable().expects(), "string | null");
        assert_eq!(Schema::number().optional().expects(), "number | undefined");
        assert_eq!(Schema::array(Schema::any()).expects(), "Array");
    }

    proptest! {
        #[test]
        fn wrong_typed_fields_give_one_issue_each_in_declaration_order(
            values in prop::collection::vec("[a-z]{0,8}", 0..12),
        ) {
            let keys: Vec<String> = (0..values.len()).map(|i| format!("f{i}")).collect();
            let schema = Schema::object(keys.iter().map(|k| (k.clone(), Schema::number())));
            let input: Map<String, Value> = keys
                .iter()
                .cloned()
                .zip(values.iter().map(|v| json!(v)))
                .collect();

            match schema.parse(Value::Object(input)) {
                Ok(out) => {
                    let empty = json!({});
                    prop_assert!(keys.is_empty() && out == empty)
                }
                Err(err) => {
                    let found = issues(err);
                    let paths: Vec<String> = found.iter().map(dotted).collect();
                    prop_assert_eq!(paths, keys);
                    for (issue, value) in found.iter().zip(&values) {
                        prop_assert_eq!(
                            &issue.message,
                            &format!("Invalid type: Expected number but received \"{value}\"")
                        );
                    }
                }
            }
        }
    }
}
