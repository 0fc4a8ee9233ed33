use axum::Json;

use keel_schemas::User;

use crate::extract::Valid;

/// Echo the validated user back.
pub async fn create_user(Valid(user): Valid<User>) -> Json<User> {
    Json(user)
}
