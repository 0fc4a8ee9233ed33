//! Request bodies and the pipes attached to them.

use std::sync::LazyLock;

use keel_schemas::{User, user_schema};

use crate::extract::Validated;
use crate::validation::ValidationPipe;

static USER_PIPE: LazyLock<ValidationPipe> = LazyLock::new(|| ValidationPipe::new(user_schema()));

impl Validated for User {
    fn pipe() -> &'static ValidationPipe {
        &USER_PIPE
    }
}
