use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use db::models::sale;

use crate::helpers::{
    admin_token, client_token, get_json_body, json_request, make_test_app, seed_product,
    seed_rayon, user_with_token, wait_for_stock,
};

#[tokio::test]
async fn statistics_require_authentication() {
    let (app, _db) = make_test_app().await;

    let response = app
        .oneshot(json_request("GET", "/statistics", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn top_products_are_ranked_by_units_sold() {
    let (app, db) = make_test_app().await;
    let (user, token) = user_with_token(&db, "Shopper", "shopper@example.com", "client").await;
    let rayon = seed_rayon(&db, "Dairy").await;

    let milk = seed_product(&db, rayon.id, "Milk", 2.50, 100).await;
    let cheese = seed_product(&db, rayon.id, "Cheese", 4.00, 100).await;
    let butter = seed_product(&db, rayon.id, "Butter", 3.00, 100).await;

    // Milk sells 2 units, cheese 7 across two sales, butter 5.
    sale::Model::create(&db, milk.id, user.id, 2, 5.00).await.unwrap();
    sale::Model::create(&db, cheese.id, user.id, 4, 16.00).await.unwrap();
    sale::Model::create(&db, cheese.id, user.id, 3, 12.00).await.unwrap();
    sale::Model::create(&db, butter.id, user.id, 5, 15.00).await.unwrap();

    let response = app
        .oneshot(json_request("GET", "/statistics", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = get_json_body(response).await;
    let top = body["top_products"].as_array().unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0]["product_id"], cheese.id);
    assert_eq!(top[0]["total_quantity"], 7);
    assert_eq!(top[0]["product"]["name"], "Cheese");
    assert_eq!(top[1]["product_id"], butter.id);
    assert_eq!(top[2]["product_id"], milk.id);
}

#[tokio::test]
async fn top_products_are_capped_at_five() {
    let (app, db) = make_test_app().await;
    let (user, token) = user_with_token(&db, "Shopper", "shopper@example.com", "client").await;
    let rayon = seed_rayon(&db, "Pantry").await;

    for i in 0..7 {
        let product = seed_product(&db, rayon.id, &format!("Item {i}"), 1.00, 100).await;
        sale::Model::create(&db, product.id, user.id, 1, 1.00).await.unwrap();
    }

    let response = app
        .oneshot(json_request("GET", "/statistics", Some(&token), None))
        .await
        .unwrap();
    let body = get_json_body(response).await;
    assert_eq!(body["top_products"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn low_stock_includes_products_at_their_threshold() {
    let (app, db) = make_test_app().await;
    let token = client_token(&db).await;
    let rayon = seed_rayon(&db, "Dairy").await;

    // Threshold is 10 for seeded products.
    seed_product(&db, rayon.id, "At threshold", 1.00, 10).await;
    seed_product(&db, rayon.id, "Below", 1.00, 3).await;
    seed_product(&db, rayon.id, "Above", 1.00, 11).await;

    let response = app
        .oneshot(json_request("GET", "/statistics", Some(&token), None))
        .await
        .unwrap();
    let body = get_json_body(response).await;
    let low: Vec<&str> = body["low_stock_products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(low.contains(&"At threshold"));
    assert!(low.contains(&"Below"));
    assert!(!low.contains(&"Above"));
}

#[tokio::test]
async fn sales_made_through_the_api_feed_the_rollup() {
    let (app, db) = make_test_app().await;
    let admin = admin_token(&db).await;
    let (_, client) = user_with_token(&db, "Shopper", "shopper@example.com", "client").await;

    // Full flow: admin sets up the catalog, a client buys, statistics move.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/rayons",
            Some(&admin),
            Some(json!({ "name": "Dairy" })),
        ))
        .await
        .unwrap();
    let rayon_id = get_json_body(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/products",
            Some(&admin),
            Some(json!({
                "rayon_id": rayon_id,
                "name": "Milk",
                "category": "Dairy",
                "price": 2.0,
                "stock": 12
            })),
        ))
        .await
        .unwrap();
    let product_id = get_json_body(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/sales",
            Some(&client),
            Some(json!({ "product_id": product_id, "quantity": 3 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // 12 - 3 = 9 puts the product below its default threshold of 10.
    assert_eq!(wait_for_stock(&db, product_id, 9).await, 9);

    let response = app
        .oneshot(json_request("GET", "/statistics", Some(&client), None))
        .await
        .unwrap();
    let body = get_json_body(response).await;
    assert_eq!(body["top_products"][0]["product_id"], product_id);
    assert_eq!(body["top_products"][0]["total_quantity"], 3);
    assert_eq!(body["low_stock_products"][0]["id"], product_id);
}
