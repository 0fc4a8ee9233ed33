//! `keel-schemas`: declarative schemas for untrusted JSON.
//!
//! A [`Schema`] describes the expected shape of a value, checks it, and
//! produces the canonical output (unknown object keys stripped, defaults
//! filled, transforms applied). Failures come back as an ordered list of
//! [`Issue`]s, each carrying the path from the root to the offending value.
//!
//! ```
//! use keel_schemas::{Action, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::object([
//!     ("name", Schema::string()),
//!     ("email", Schema::string().pipe([Action::email(), Action::to_lower_case()])),
//! ]);
//!
//! let out = schema.parse(json!({ "name": "Ada", "email": "ADA@EXAMPLE.COM" })).unwrap();
//! assert_eq!(out, json!({ "name": "Ada", "email": "ada@example.com" }));
//! ```

pub mod action;
pub mod error;
pub mod issue;
pub mod parser;
pub mod schema;
pub mod user;

pub use action::Action;
pub use error::{BoxError, ParseError, SchemaFault, ValidationError};
pub use issue::{Issue, IssueKind, PathItem, PathItemKind, PathKey};
pub use parser::Parser;
pub use schema::Schema;
pub use user::{User, user_schema};
