use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::{product, sale, user};

use crate::routes::common::UserResponse;
use crate::routes::products::common::ProductResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct SaleRequest {
    pub product_id: i64,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaleResponse {
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    pub quantity: i32,
    pub total_price: f64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl From<sale::Model> for SaleResponse {
    fn from(model: sale::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            user_id: model.user_id,
            quantity: model.quantity,
            total_price: model.total_price,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
            product: None,
            user: None,
        }
    }
}

impl From<(sale::Model, Option<product::Model>, Option<user::Model>)> for SaleResponse {
    fn from(
        (model, product, user): (sale::Model, Option<product::Model>, Option<user::Model>),
    ) -> Self {
        let mut response = Self::from(model);
        response.product = product.map(ProductResponse::from);
        response.user = user.map(UserResponse::from);
        response
    }
}
