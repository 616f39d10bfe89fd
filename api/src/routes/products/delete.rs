use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;

use db::models::product;

use crate::response::ApiError;
use crate::state::AppState;

/// DELETE /products/{product_id}
///
/// Removes a product; its sales history goes with it through the cascade.
/// Admin only.
///
/// ### Responses
///
/// - `204 No Content`
/// - `404 Not Found` — `{ "message": "Product not found" }`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if product::Entity::find_by_id(product_id)
        .one(state.db())
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("Product not found".to_string()));
    }

    product::Model::delete(state.db(), product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
