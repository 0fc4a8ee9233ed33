//! The `users` table.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use keel_core::UserId;

use crate::error::DbResult;
use crate::table::{Column, Table};

static USERS: LazyLock<Table> = LazyLock::new(|| {
    Table::new(
        "users",
        [
            Column::text("id", "id").primary_key().default_uuid_v7(),
            Column::varchar("email", "email", 50).not_null().unique(),
            Column::text("password_hash", "passwordHash").not_null(),
            Column::varchar("first_name", "firstName", 50).not_null(),
            Column::varchar("last_name", "lastName", 50).not_null(),
            Column::timestamptz("created_at", "createdAt").not_null().default_now(),
            Column::timestamptz("updated_at", "updatedAt")
                .not_null()
                .default_now()
                .on_update_now(),
        ],
    )
});

pub fn users() -> &'static Table {
    &USERS
}

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Record a modification made at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// A user about to be inserted, as accepted by `users().insert_schema()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl NewUser {
    /// Fill in column defaults the way an insert would.
    pub fn into_row(self, now: DateTime<Utc>) -> UserRow {
        UserRow {
            id: self.id.unwrap_or_else(|| UserId::new().to_string()),
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        }
    }
}

/// Create the `users` table if it does not exist yet.
pub async fn migrate(pool: &PgPool) -> DbResult<()> {
    let ddl = users().create_table_sql();
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = users().name, "table ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_schemas::ParseError;
    use serde_json::json;

    fn new_user_json() -> serde_json::Value {
        json!({
            "email": "ada@example.com",
            "passwordHash": "$argon2id$v=19$...",
            "firstName": "Ada",
            "lastName": "Lovelace",
        })
    }

    #[test]
    fn users_ddl_matches_the_table() {
        let ddl = users().create_table_sql();
        assert!(ddl.starts_with("CREATE TABLE IF NOT EXISTS users (\n"));
        assert!(ddl.contains("    id text PRIMARY KEY,\n"));
        assert!(ddl.contains("    email varchar(50) NOT NULL UNIQUE,\n"));
        assert!(ddl.contains("    password_hash text NOT NULL,\n"));
        assert!(ddl.contains("    updated_at timestamp with time zone NOT NULL DEFAULT now()\n"));
        assert!(users().column("updated_at").unwrap().on_update_now);
    }

    #[test]
    fn insert_schema_accepts_a_minimal_user() {
        let out = users().insert_schema().parse(new_user_json()).unwrap();
        let user: NewUser = serde_json::from_value(out).unwrap();
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.id, None);
    }

    #[test]
    fn insert_schema_reports_missing_and_oversized_fields() {
        let mut input = new_user_json();
        input["email"] = json!("a".repeat(51));
        input.as_object_mut().unwrap().remove("passwordHash");

        let ParseError::Invalid(err) = users().insert_schema().parse(input).unwrap_err() else {
            panic!("expected a validation failure");
        };
        let fields: Vec<String> = err
            .issues()
            .iter()
            .map(|i| i.path.as_ref().unwrap()[0].key.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(fields, ["email", "passwordHash"]);
    }

    #[test]
    fn select_schema_requires_timestamps() {
        let mut row = new_user_json();
        row["id"] = json!("1");
        assert!(users().select_schema().parse(row.clone()).is_err());

        row["createdAt"] = json!("2024-01-01T00:00:00Z");
        row["updatedAt"] = json!("2024-01-01T00:00:00Z");
        assert!(users().select_schema().parse(row).is_ok());
    }

    #[test]
    fn into_row_generates_ids_and_timestamps() {
        let now = Utc::now();
        let user: NewUser = serde_json::from_value(new_user_json()).unwrap();
        let row = user.into_row(now);

        let id: UserId = row.id.parse().unwrap();
        assert_eq!(id.as_uuid().get_version_num(), 7);
        assert_eq!(row.created_at, now);
        assert_eq!(row.updated_at, now);
    }

    #[test]
    fn into_row_keeps_explicit_values() {
        let mut input = new_user_json();
        input["id"] = json!("fixed");
        let user: NewUser = serde_json::from_value(input).unwrap();
        assert_eq!(user.into_row(Utc::now()).id, "fixed");
    }

    #[test]
    fn touch_bumps_updated_at_only() {
        let created = Utc::now();
        let mut row = serde_json::from_value::<NewUser>(new_user_json())
            .unwrap()
            .into_row(created);
        let later = created + chrono::Duration::seconds(5);
        row.touch(later);
        assert_eq!(row.created_at, created);
        assert_eq!(row.updated_at, later);
    }
}
