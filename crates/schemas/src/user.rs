//! The user payload accepted by the API.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::schema::Schema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Schema for [`User`]: every field required, `email` must look like an address.
pub fn user_schema() -> Schema {
    Schema::object([
        ("id", Schema::string()),
        ("name", Schema::string()),
        ("email", Schema::string().pipe([Action::email()])),
    ])
}
