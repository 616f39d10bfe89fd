use std::sync::Once;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::Value;

use api::auth::generate_jwt;
use api::routes::routes;
use api::services::stock::StockQueue;
use api::state::AppState;
use db::models::product::{self, ProductData};
use db::models::{rayon, user};
use db::test_utils::setup_test_db;

static ENV_INIT: Once = Once::new();

fn setup_env() {
    ENV_INIT.call_once(|| unsafe {
        std::env::set_var("JWT_SECRET", "integration-test-secret");
        std::env::set_var("JWT_DURATION_MINUTES", "60");
    });
}

/// Fresh in-memory database plus a fully wired router, including the stock
/// reconciliation worker.
pub async fn make_test_app() -> (Router, DatabaseConnection) {
    setup_env();
    let db = setup_test_db().await;
    let stock = StockQueue::spawn(db.clone());
    let state = AppState::new(db.clone(), stock);
    (routes(state), db)
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => Body::from(serde_json::to_vec(&json).unwrap()),
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}

/// Creates a user directly in the database and mints a token for them.
pub async fn user_with_token(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    role: &str,
) -> (user::Model, String) {
    let user = user::Model::create(db, name, email, "password123", role)
        .await
        .unwrap();
    let (token, _) = generate_jwt(user.id, &user.role);
    (user, token)
}

pub async fn admin_token(db: &DatabaseConnection) -> String {
    user_with_token(db, "Admin", "admin@example.com", "admin")
        .await
        .1
}

pub async fn client_token(db: &DatabaseConnection) -> String {
    user_with_token(db, "Client", "client@example.com", "client")
        .await
        .1
}

pub async fn seed_rayon(db: &DatabaseConnection, name: &str) -> rayon::Model {
    rayon::Model::create(db, name, None).await.unwrap()
}

pub async fn seed_product(
    db: &DatabaseConnection,
    rayon_id: i64,
    name: &str,
    price: f64,
    stock: i32,
) -> product::Model {
    product::Model::create(
        db,
        ProductData {
            rayon_id,
            name: name.into(),
            category: "General".into(),
            price,
            stock,
            stock_threshold: 10,
            is_popular: false,
            is_on_sale: false,
            sale_price: None,
        },
    )
    .await
    .unwrap()
}

/// Polls until the product's stock reaches `expected` or the deadline
/// passes; the decrement runs on a background task so reads right after a
/// sale may still see the old value.
pub async fn wait_for_stock(db: &DatabaseConnection, product_id: i64, expected: i32) -> i32 {
    for _ in 0..100 {
        let stock = product::Entity::find_by_id(product_id)
            .one(db)
            .await
            .unwrap()
            .unwrap()
            .stock;
        if stock == expected {
            return stock;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    product::Entity::find_by_id(product_id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .stock
}
