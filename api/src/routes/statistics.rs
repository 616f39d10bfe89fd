use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use db::models::{product, sale};

use crate::response::ApiError;
use crate::routes::products::common::ProductResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct TopProductEntry {
    product_id: i64,
    total_quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    product: Option<ProductResponse>,
}

#[derive(Debug, Serialize)]
struct StatisticsResponse {
    top_products: Vec<TopProductEntry>,
    low_stock_products: Vec<ProductResponse>,
}

/// GET /statistics
///
/// Sales and inventory rollup: the five best-selling products by total
/// units sold (ties broken by product id), and every product at or below
/// its own stock threshold.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "top_products": [
///     { "product_id": 1, "total_quantity": 42, "product": { "id": 1, "name": "Milk", ... } }
///   ],
///   "low_stock_products": [
///     { "id": 7, "name": "Butter", "stock": 4, "stock_threshold": 10, ... }
///   ]
/// }
/// ```
async fn statistics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let top_products = sale::Model::top_products(state.db())
        .await?
        .into_iter()
        .map(|entry| TopProductEntry {
            product_id: entry.product_id,
            total_quantity: entry.total_quantity,
            product: entry.product.map(ProductResponse::from),
        })
        .collect();

    let low_stock_products = product::Model::low_stock(state.db())
        .await?
        .into_iter()
        .map(ProductResponse::from)
        .collect();

    Ok(Json(StatisticsResponse {
        top_products,
        low_stock_products,
    }))
}

pub fn statistics_routes() -> Router<AppState> {
    Router::new().route("/", get(statistics))
}
