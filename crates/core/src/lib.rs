//! `keel-core`: identifiers and errors shared by every keel crate.
//!
//! No infrastructure concerns live here.

pub mod error;
pub mod id;

pub use error::{CoreError, CoreResult};
pub use id::UserId;
