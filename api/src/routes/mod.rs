//! Route composition for the supermarket API.
//!
//! `/register` and `/login` are public. Everything else requires a valid
//! bearer token, and mutating routes on rayons and products additionally
//! require the admin role.

pub mod auth;
pub mod common;
pub mod health;
pub mod products;
pub mod rayons;
pub mod sales;
pub mod statistics;

use axum::{middleware::from_fn, Router};

use crate::auth::guards::allow_authenticated;
use crate::state::AppState;

/// Builds the full application router over the shared [`AppState`].
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .merge(auth::auth_routes())
        .nest(
            "/rayons",
            rayons::rayons_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/products",
            products::products_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/sales",
            sales::sales_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/statistics",
            statistics::statistics_routes().route_layer(from_fn(allow_authenticated)),
        )
        .with_state(app_state)
}
