use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use validator::Validate;

use common::format_validation_errors;
use db::models::{product, rayon};

use crate::response::ApiError;
use crate::routes::products::common::{ProductRequest, ProductResponse};
use crate::state::AppState;

/// POST /products
///
/// Creates a product inside an existing rayon. Admin only.
///
/// ### Request Body
/// ```json
/// {
///   "rayon_id": 1,
///   "name": "Milk",
///   "category": "Dairy",
///   "price": 2.5,
///   "stock": 100,
///   "stock_threshold": 10,
///   "is_popular": false,
///   "is_on_sale": false,
///   "sale_price": null
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created` — the new product
/// - `422 Unprocessable Entity` (validation failure, or `rayon_id` does not
///   reference an existing rayon)
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(errors) = req.validate() {
        return Err(ApiError::Validation(format_validation_errors(&errors)));
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

    let product = product::Model::create(state.db(), req.into_data()).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}
