use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use validator::Validate;

use common::format_validation_errors;
use db::models::{product, sale};

use crate::auth::claims::AuthUser;
use crate::response::ApiError;
use crate::routes::sales::common::{SaleRequest, SaleResponse};
use crate::state::AppState;

/// POST /sales
///
/// Records a purchase for the authenticated user. The total is snapshotted
/// from the product's current pricing (sale price while on sale, regular
/// price otherwise), then a stock decrement is queued for the background
/// worker. The response does not wait for the decrement to land, so a read
/// of the product immediately afterwards may still show the old stock.
///
/// The stock check here and the decrement are not one atomic step;
/// concurrent purchases can drive stock below zero.
///
/// ### Request Body
/// ```json
/// { "product_id": 1, "quantity": 3 }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// { "id": 1, "product_id": 1, "user_id": 2, "quantity": 3, "total_price": 7.5, ... }
/// ```
/// - `404 Not Found` — `{ "message": "Product not found" }`
/// - `422 Unprocessable Entity` (quantity below 1)
/// - `400 Bad Request` — `{ "message": "Insufficient stock" }`
pub async fn create_sale(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(req): Json<SaleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(errors) = req.validate() {
        return Err(ApiError::Validation(format_validation_errors(&errors)));
    }

    let product = product::Entity::find_by_id(req.product_id)
        .one(state.db())
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    if product.stock < req.quantity {
        return Err(ApiError::Domain("Insufficient stock".to_string()));
    }

    let unit_price = if product.is_on_sale {
        product.sale_price.unwrap_or(product.price)
    } else {
        product.price
    };
    let total_price = unit_price * f64::from(req.quantity);

    let sale = sale::Model::create(
        state.db(),
        product.id,
        claims.sub,
        req.quantity,
        total_price,
    )
    .await?;

    state.stock().enqueue(product.id, req.quantity);

    Ok((StatusCode::CREATED, Json(SaleResponse::from(sale))))
}
