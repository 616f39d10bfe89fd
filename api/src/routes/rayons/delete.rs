use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;

use db::models::rayon;

use crate::response::ApiError;
use crate::state::AppState;

/// DELETE /rayons/{rayon_id}
///
/// Removes a rayon and, through the cascade, every product in it. Admin only.
///
/// ### Responses
///
/// - `204 No Content`
/// - `404 Not Found` — `{ "message": "Rayon not found" }`
pub async fn delete_rayon(
    State(state): State<AppState>,
    Path(rayon_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if rayon::Entity::find_by_id(rayon_id)
        .one(state.db())
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("Rayon not found".to_string()));
    }

    rayon::Model::delete(state.db(), rayon_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
