use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use sea_orm::EntityTrait;
use validator::Validate;

use common::format_validation_errors;
use db::models::{product, rayon};

use crate::response::ApiError;
use crate::routes::products::common::{ProductRequest, ProductResponse};
use crate::state::AppState;

/// PUT /products/{product_id}
///
/// Full replacement of a product, including moving it to another rayon.
/// Admin only.
///
/// ### Responses
///
/// - `200 OK` — the updated product
/// - `404 Not Found` — `{ "message": "Product not found" }`
/// - `422 Unprocessable Entity` (validation failure or invalid `rayon_id`)
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(req): Json<ProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(errors) = req.validate() {
        return Err(ApiError::Validation(format_validation_errors(&errors)));
    }

    if product::Entity::find_by_id(product_id)
        .one(state.db())
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("Product not found".to_string()));
    }
    if rayon::Entity::find_by_id(req.rayon_id)
        .one(state.db())
        .await?
        .is_none()
    {
        return Err(ApiError::Validation(
            "The selected rayon_id is invalid".to_string(),
        ));
    }

    let product = product::Model::update(state.db(), product_id, req.into_data()).await?;
    Ok(Json(ProductResponse::from(product)))
}
