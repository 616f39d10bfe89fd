use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use sea_orm::EntityTrait;
use validator::Validate;

use common::format_validation_errors;
use db::models::rayon;

use crate::response::ApiError;
use crate::routes::rayons::common::{RayonRequest, RayonResponse};
use crate::state::AppState;

/// PUT /rayons/{rayon_id}
///
/// Replaces a rayon's name and description. Admin only.
///
/// ### Request Body
/// ```json
/// { "name": "Dairy Section", "description": null }
/// ```
///
/// ### Responses
///
/// - `200 OK` — the updated rayon
/// - `404 Not Found` — `{ "message": "Rayon not found" }`
/// - `422 Unprocessable Entity` (validation failure)
pub async fn update_rayon(
    State(state): State<AppState>,
    Path(rayon_id): Path<i64>,
    Json(req): Json<RayonRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(errors) = req.validate() {
        return Err(ApiError::Validation(format_validation_errors(&errors)));
    }

    if rayon::Entity::find_by_id(rayon_id)
        .one(state.db())
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("Rayon not found".to_string()));
    }

    let rayon =
        rayon::Model::update(state.db(), rayon_id, &req.name, req.description.as_deref()).await?;
    Ok(Json(RayonResponse::from(rayon)))
}
