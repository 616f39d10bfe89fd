use axum::http::StatusCode;
use sea_orm::EntityTrait;
use serde_json::json;
use tower::ServiceExt;

use db::models::product;

use crate::helpers::{
    admin_token, client_token, get_json_body, json_request, make_test_app, seed_product, seed_rayon,
};

#[tokio::test]
async fn rayon_routes_require_authentication() {
    let (app, _db) = make_test_app().await;

    let response = app
        .oneshot(json_request("GET", "/rayons", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn any_authenticated_user_can_read_rayons() {
    let (app, db) = make_test_app().await;
    let token = client_token(&db).await;
    let rayon = seed_rayon(&db, "Dairy").await;

    let response = app
        .clone()
        .oneshot(json_request("GET", "/rayons", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = get_json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Dairy");

    let response = app
        .oneshot(json_request(
            "GET",
            &format!("/rayons/{}", rayon.id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = get_json_body(response).await;
    assert_eq!(body["id"], rayon.id);
}

#[tokio::test]
async fn missing_rayon_returns_404() {
    let (app, db) = make_test_app().await;
    let token = client_token(&db).await;

    let response = app
        .oneshot(json_request("GET", "/rayons/999", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = get_json_body(response).await;
    assert_eq!(body["message"], "Rayon not found");
}

#[tokio::test]
async fn clients_cannot_write_rayons() {
    let (app, db) = make_test_app().await;
    let token = client_token(&db).await;
    let rayon = seed_rayon(&db, "Dairy").await;

    let payload = json!({ "name": "Bakery" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/rayons", Some(&token), Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(json_request(
            "DELETE",
            &format!("/rayons/{}", rayon.id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = get_json_body(response).await;
    assert_eq!(body["message"], "Admin access required");
}

#[tokio::test]
async fn admin_can_create_update_and_delete_rayons() {
    let (app, db) = make_test_app().await;
    let token = admin_token(&db).await;

    let payload = json!({ "name": "Dairy", "description": "Milk and cheese" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/rayons", Some(&token), Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = get_json_body(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["description"], "Milk and cheese");

    let payload = json!({ "name": "Dairy Section", "description": null });
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/rayons/{id}"),
            Some(&token),
            Some(payload),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = get_json_body(response).await;
    assert_eq!(updated["name"], "Dairy Section");
    assert!(updated["description"].is_null());

    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/rayons/{id}"),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(json_request(
            "GET",
            &format!("/rayons/{id}"),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rayon_rejects_blank_name() {
    let (app, db) = make_test_app().await;
    let token = admin_token(&db).await;

    let payload = json!({ "name": "" });
    let response = app
        .oneshot(json_request("POST", "/rayons", Some(&token), Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn deleting_a_rayon_removes_its_products() {
    let (app, db) = make_test_app().await;
    let token = admin_token(&db).await;
    let rayon = seed_rayon(&db, "Dairy").await;
    let milk = seed_product(&db, rayon.id, "Milk", 2.50, 100).await;

    let response = app
        .oneshot(json_request(
            "DELETE",
            &format!("/rayons/{}", rayon.id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining = product::Entity::find_by_id(milk.id).one(&db).await.unwrap();
    assert!(remaining.is_none());
}
