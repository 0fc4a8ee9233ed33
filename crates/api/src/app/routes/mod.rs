use axum::{Router, routing::get};

pub mod system;
pub mod users;

/// Router for the application endpoints.
pub fn router() -> Router {
    Router::new().route("/", get(system::hello).post(users::create_user))
}
