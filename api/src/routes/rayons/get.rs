use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use sea_orm::EntityTrait;

use db::models::rayon;

use crate::response::ApiError;
use crate::routes::rayons::common::RayonResponse;
use crate::state::AppState;

/// GET /rayons
///
/// Lists every rayon.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// [
///   { "id": 1, "name": "Dairy", "description": "Milk and cheese", ... },
///   { "id": 2, "name": "Bakery", "description": null, ... }
/// ]
/// ```
pub async fn list_rayons(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rayons = rayon::Entity::find().all(state.db()).await?;
    let body: Vec<RayonResponse> = rayons.into_iter().map(RayonResponse::from).collect();
    Ok(Json(body))
}

/// GET /rayons/{rayon_id}
///
/// ### Responses
///
/// - `200 OK` — the rayon
/// - `404 Not Found`
/// ```json
/// { "message": "Rayon not found" }
/// ```
pub async fn get_rayon(
    State(state): State<AppState>,
    Path(rayon_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let rayon = rayon::Entity::find_by_id(rayon_id)
        .one(state.db())
        .await?
        .ok_or_else(|| ApiError::NotFound("Rayon not found".to_string()))?;
    Ok(Json(RayonResponse::from(rayon)))
}
