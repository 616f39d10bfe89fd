//! Account registration, login and logout.

pub mod post;

use axum::{routing::post as http_post, Router};

use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", http_post(post::register))
        .route("/login", http_post(post::login))
        .route("/logout", http_post(post::logout))
}
