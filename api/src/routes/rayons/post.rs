use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use common::format_validation_errors;
use db::models::rayon;

use crate::response::ApiError;
use crate::routes::rayons::common::{RayonRequest, RayonResponse};
use crate::state::AppState;

/// POST /rayons
///
/// Creates a rayon. Admin only.
///
/// ### Request Body
/// ```json
/// { "name": "Dairy", "description": "Milk and cheese" }
/// ```
///
/// ### Responses
///
/// - `201 Created` — the new rayon
/// - `422 Unprocessable Entity` (validation failure)
/// - `403 Forbidden` (caller is not an admin)
pub async fn create_rayon(
    State(state): State<AppState>,
    Json(req): Json<RayonRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(errors) = req.validate() {
        return Err(ApiError::Validation(format_validation_errors(&errors)));
    }

    let rayon = rayon::Model::create(state.db(), &req.name, req.description.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(RayonResponse::from(rayon))))
}
