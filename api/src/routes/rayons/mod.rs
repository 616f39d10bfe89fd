//! Department ("rayon") management. Reads are open to any authenticated
//! user; writes are admin-only.

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

pub fn rayons_routes() -> Router<AppState> {
    let read = Router::new()
        .route("/", get(get::list_rayons))
        .route("/{rayon_id}", get(get::get_rayon));

    let write = Router::new()
        .route("/", http_post(post::create_rayon))
        .route("/{rayon_id}", http_put(put::update_rayon))
        .route("/{rayon_id}", http_delete(delete::delete_rayon))
        .route_layer(from_fn(allow_admin));

    read.merge(write)
}
