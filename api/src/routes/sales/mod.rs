//! Sale recording and history. Sales are immutable once written, so there
//! is no update or delete surface.

pub mod common;
pub mod get;
pub mod post;

use axum::{
    routing::{get, post as http_post},
    Router,
};

use crate::state::AppState;

pub fn sales_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_sales))
        .route("/", http_post(post::create_sale))
        .route("/{sale_id}", get(get::get_sale))
}
