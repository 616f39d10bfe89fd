//! Product catalog: listing, lookup, search and the popular/on-sale filter
//! for any authenticated user; create, update and delete for admins.

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{
    middleware::from_fn,
    routing::{delete as http_delete, get, post as http_post, put as http_put},
    Router,
};

use crate::auth::guards::allow_admin;
use crate::state::AppState;

pub fn products_routes() -> Router<AppState> {
    // Static segments are registered alongside `{product_id}`; axum matches
    // them ahead of the capture.
    let read = Router::new()
        .route("/", get(get::list_products))
        .route("/search", get(get::search_products))
        .route("/popular-or-on-sale", get(get::popular_or_on_sale))
        .route("/{product_id}", get(get::get_product));

    let write = Router::new()
        .route("/", http_post(post::create_product))
        .route("/{product_id}", http_put(put::update_product))
        .route("/{product_id}", http_delete(delete::delete_product))
        .route_layer(from_fn(allow_admin));

    read.merge(write)
}
