use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::{product, rayon};

use crate::routes::rayons::common::RayonResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    pub rayon_id: i64,
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "Category must be between 1 and 255 characters"))]
    pub category: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,
    pub stock_threshold: Option<i32>,
    pub is_popular: Option<bool>,
    pub is_on_sale: Option<bool>,
    pub sale_price: Option<f64>,
}

impl ProductRequest {
    /// Applies the server-side defaults for fields the caller omitted.
    pub fn into_data(self) -> product::ProductData {
        product::ProductData {
            rayon_id: self.rayon_id,
            name: self.name,
            category: self.category,
            price: self.price,
            stock: self.stock,
            stock_threshold: self.stock_threshold.unwrap_or(10),
            is_popular: self.is_popular.unwrap_or(false),
            is_on_sale: self.is_on_sale.unwrap_or(false),
            sale_price: self.sale_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub rayon_id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i32,
    pub stock_threshold: i32,
    pub is_popular: bool,
    pub is_on_sale: bool,
    pub sale_price: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rayon: Option<RayonResponse>,
}

impl From<product::Model> for ProductResponse {
    fn from(model: product::Model) -> Self {
        Self {
            id: model.id,
            rayon_id: model.rayon_id,
            name: model.name,
            category: model.category,
            price: model.price,
            stock: model.stock,
            stock_threshold: model.stock_threshold,
            is_popular: model.is_popular,
            is_on_sale: model.is_on_sale,
            sale_price: model.sale_price,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
            rayon: None,
        }
    }
}

impl From<(product::Model, Option<rayon::Model>)> for ProductResponse {
    fn from((model, rayon): (product::Model, Option<rayon::Model>)) -> Self {
        let mut response = Self::from(model);
        response.rayon = rayon.map(RayonResponse::from);
        response
    }
}

/// Query-string booleans arrive as text; only an absent, empty, `0` or
/// `false` value counts as off.
pub fn truthy(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false"),
    }
}
