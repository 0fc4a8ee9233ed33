//! `keel-db`: table definitions and the schemas derived from them.
//!
//! A [`Table`] is the single description of a relation: it renders the
//! Postgres DDL and derives the insert/select/update schemas used to check
//! rows coming from the outside.

pub mod error;
pub mod table;
pub mod users;

pub use error::{DbError, DbResult};
pub use table::{Column, ColumnDefault, ColumnType, Table};
pub use users::{NewUser, UserRow, migrate, users};
