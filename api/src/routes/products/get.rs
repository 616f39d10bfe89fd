use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use db::models::product;

use crate::response::ApiError;
use crate::routes::products::common::{truthy, ProductResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub rayon_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct FlagParams {
    pub popular: Option<String>,
    pub on_sale: Option<String>,
}

/// GET /products
///
/// Lists every product with its rayon embedded.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// [
///   {
///     "id": 1, "rayon_id": 1, "name": "Milk", "category": "Dairy",
///     "price": 2.5, "stock": 100, "stock_threshold": 10,
///     "is_popular": false, "is_on_sale": false, "sale_price": null,
///     "rayon": { "id": 1, "name": "Dairy", ... }, ...
///   }
/// ]
/// ```
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let products = product::Model::list_with_rayon(state.db()).await?;
    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(body))
}

/// GET /products/search?name=&category=&rayon_id=
///
/// Filters combine with AND; omitted parameters are simply not applied, so
/// an empty query returns the full catalog. `name` is a substring match,
/// `category` and `rayon_id` are exact.
///
/// ### Responses
///
/// - `200 OK` — matching products, rayon embedded
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let products = product::Model::search(
        state.db(),
        params.name.as_deref(),
        params.category.as_deref(),
        params.rayon_id,
    )
    .await?;
    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(body))
}

/// GET /products/popular-or-on-sale?popular=1&on_sale=1
///
/// Both flags set means products that are popular AND on sale; a single
/// flag filters on that flag alone; no flags returns everything.
///
/// ### Responses
///
/// - `200 OK` — matching products, rayon embedded
pub async fn popular_or_on_sale(
    State(state): State<AppState>,
    Query(params): Query<FlagParams>,
) -> Result<impl IntoResponse, ApiError> {
    let products = product::Model::popular_or_on_sale(
        state.db(),
        truthy(params.popular.as_deref()),
        truthy(params.on_sale.as_deref()),
    )
    .await?;
    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(body))
}

/// GET /products/{product_id}
///
/// ### Responses
///
/// - `200 OK` — the product with its rayon embedded
/// - `404 Not Found` — `{ "message": "Product not found" }`
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let product = product::Model::find_with_rayon(state.db(), product_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;
    Ok(Json(ProductResponse::from(product)))
}
