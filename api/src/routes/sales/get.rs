use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use db::models::sale;

use crate::response::ApiError;
use crate::routes::sales::common::SaleResponse;
use crate::state::AppState;

/// GET /sales
///
/// Lists every sale with its product and buyer embedded.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// [
///   {
///     "id": 1, "product_id": 1, "user_id": 2, "quantity": 3,
///     "total_price": 7.5,
///     "product": { "id": 1, "name": "Milk", ... },
///     "user": { "id": 2, "name": "Alice", ... }, ...
///   }
/// ]
/// ```
pub async fn list_sales(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let sales = sale::Model::list_with_related(state.db()).await?;
    let body: Vec<SaleResponse> = sales.into_iter().map(SaleResponse::from).collect();
    Ok(Json(body))
}

/// GET /sales/{sale_id}
///
/// ### Responses
///
/// - `200 OK` — the sale with product and buyer embedded
/// - `404 Not Found` — `{ "message": "Sale not found" }`
pub async fn get_sale(
    State(state): State<AppState>,
    Path(sale_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let sale = sale::Model::find_with_related(state.db(), sale_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Sale not found".to_string()))?;
    Ok(Json(SaleResponse::from(sale)))
}
