use axum::http::StatusCode;
use sea_orm::{entity::prelude::*, ActiveValue::Set, QueryFilter};
use serde_json::json;
use tower::ServiceExt;

use db::models::{product, sale};

use crate::helpers::{
    client_token, get_json_body, json_request, make_test_app, seed_product, seed_rayon,
    user_with_token, wait_for_stock,
};

#[tokio::test]
async fn recording_a_sale_snapshots_the_total_and_decrements_stock() {
    let (app, db) = make_test_app().await;
    let (user, token) = user_with_token(&db, "Shopper", "shopper@example.com", "client").await;
    let rayon = seed_rayon(&db, "Dairy").await;
    let milk = seed_product(&db, rayon.id, "Milk", 2.50, 100).await;

    let payload = json!({ "product_id": milk.id, "quantity": 3 });
    let response = app
        .oneshot(json_request("POST", "/sales", Some(&token), Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = get_json_body(response).await;
    assert_eq!(body["product_id"], milk.id);
    assert_eq!(body["user_id"], user.id);
    assert_eq!(body["quantity"], 3);
    assert_eq!(body["total_price"], 7.5);

    // The decrement is applied out of band.
    assert_eq!(wait_for_stock(&db, milk.id, 97).await, 97);
}

#[tokio::test]
async fn sale_price_is_used_while_a_product_is_on_sale() {
    let (app, db) = make_test_app().await;
    let token = client_token(&db).await;
    let rayon = seed_rayon(&db, "Dairy").await;

    let cheese = seed_product(&db, rayon.id, "Cheese", 4.00, 50).await;
    let mut cheese: product::ActiveModel = cheese.into();
    cheese.is_on_sale = Set(true);
    cheese.sale_price = Set(Some(3.00));
    let cheese = cheese.update(&db).await.unwrap();

    let payload = json!({ "product_id": cheese.id, "quantity": 2 });
    let response = app
        .oneshot(json_request("POST", "/sales", Some(&token), Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = get_json_body(response).await;
    assert_eq!(body["total_price"], 6.0);
}

#[tokio::test]
async fn sale_rejects_quantity_below_one() {
    let (app, db) = make_test_app().await;
    let token = client_token(&db).await;
    let rayon = seed_rayon(&db, "Dairy").await;
    let milk = seed_product(&db, rayon.id, "Milk", 2.50, 100).await;

    let payload = json!({ "product_id": milk.id, "quantity": 0 });
    let response = app
        .oneshot(json_request("POST", "/sales", Some(&token), Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = get_json_body(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Quantity must be at least 1"));
}

#[tokio::test]
async fn sale_for_missing_product_returns_404() {
    let (app, db) = make_test_app().await;
    let token = client_token(&db).await;

    let payload = json!({ "product_id": 999, "quantity": 1 });
    let response = app
        .oneshot(json_request("POST", "/sales", Some(&token), Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = get_json_body(response).await;
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn insufficient_stock_records_nothing() {
    let (app, db) = make_test_app().await;
    let token = client_token(&db).await;
    let rayon = seed_rayon(&db, "Dairy").await;
    let butter = seed_product(&db, rayon.id, "Butter", 3.00, 2).await;

    let payload = json!({ "product_id": butter.id, "quantity": 5 });
    let response = app
        .oneshot(json_request("POST", "/sales", Some(&token), Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = get_json_body(response).await;
    assert_eq!(body["message"], "Insufficient stock");

    // No sale row and no decrement job were produced.
    let sales = sale::Entity::find()
        .filter(sale::Column::ProductId.eq(butter.id))
        .all(&db)
        .await
        .unwrap();
    assert!(sales.is_empty());

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    let reloaded = product::Entity::find_by_id(butter.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.stock, 2);
}

#[tokio::test]
async fn sales_require_authentication() {
    let (app, _db) = make_test_app().await;

    let payload = json!({ "product_id": 1, "quantity": 1 });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/sales", None, Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(json_request("GET", "/sales", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn listing_sales_embeds_product_and_buyer() {
    let (app, db) = make_test_app().await;
    let (user, token) = user_with_token(&db, "Shopper", "shopper@example.com", "client").await;
    let rayon = seed_rayon(&db, "Dairy").await;
    let milk = seed_product(&db, rayon.id, "Milk", 2.50, 100).await;
    let recorded = sale::Model::create(&db, milk.id, user.id, 2, 5.00).await.unwrap();

    let response = app
        .clone()
        .oneshot(json_request("GET", "/sales", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = get_json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["product"]["name"], "Milk");
    assert_eq!(body[0]["user"]["name"], "Shopper");
    assert!(body[0]["user"].get("password_hash").is_none());

    let response = app
        .oneshot(json_request(
            "GET",
            &format!("/sales/{}", recorded.id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = get_json_body(response).await;
    assert_eq!(body["id"], recorded.id);
    assert_eq!(body["total_price"], 5.0);
}

#[tokio::test]
async fn missing_sale_returns_404() {
    let (app, db) = make_test_app().await;
    let token = client_token(&db).await;

    let response = app
        .oneshot(json_request("GET", "/sales/999", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = get_json_body(response).await;
    assert_eq!(body["message"], "Sale not found");
}
