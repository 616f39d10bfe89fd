use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use common::format_validation_errors;
use db::models::user::{self, ROLE_ADMIN, ROLE_CLIENT};

use crate::auth::{claims::AuthUser, generate_jwt};
use crate::response::{ApiError, Message};
use crate::routes::common::UserResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub password_confirmation: String,
    pub role: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub expires_at: String,
    pub user: UserResponse,
}

/// POST /register
///
/// Creates an account and returns a bearer token for it.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com",
///   "password": "password123",
///   "password_confirmation": "password123",
///   "role": "client"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "token": "<jwt>",
///   "expires_at": "2026-01-01T00:00:00+00:00",
///   "user": { "id": 1, "name": "Alice", "email": "alice@example.com", "role": "client", ... }
/// }
/// ```
/// - `422 Unprocessable Entity` (validation failure, mismatched confirmation,
///   unknown role, or an email that is already taken)
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(errors) = req.validate() {
        return Err(ApiError::Validation(format_validation_errors(&errors)));
    }
    if req.password != req.password_confirmation {
        return Err(ApiError::Validation(
            "The password confirmation does not match".to_string(),
        ));
    }
    if req.role != ROLE_ADMIN && req.role != ROLE_CLIENT {
        return Err(ApiError::Validation(
            "Role must be either admin or client".to_string(),
        ));
    }
    if user::Model::find_by_email(state.db(), &req.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Validation(
            "The email has already been taken".to_string(),
        ));
    }

    let user =
        user::Model::create(state.db(), &req.name, &req.email, &req.password, &req.role).await?;
    let (token, expires_at) = generate_jwt(user.id, &user.role);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            expires_at,
            user: user.into(),
        }),
    ))
}

/// POST /login
///
/// Exchanges credentials for a bearer token.
///
/// ### Request Body
/// ```json
/// { "email": "alice@example.com", "password": "password123" }
/// ```
///
/// ### Responses
///
/// - `200 OK` — same shape as `/register`
/// - `422 Unprocessable Entity`
/// ```json
/// { "message": "The provided credentials are incorrect." }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(errors) = req.validate() {
        return Err(ApiError::Validation(format_validation_errors(&errors)));
    }

    let user = user::Model::verify_credentials(state.db(), &req.email, &req.password)
        .await?
        .ok_or_else(|| {
            ApiError::Validation("The provided credentials are incorrect.".to_string())
        })?;

    let (token, expires_at) = generate_jwt(user.id, &user.role);

    Ok(Json(AuthResponse {
        token,
        expires_at,
        user: user.into(),
    }))
}

/// POST /logout
///
/// Tokens are stateless, so logout only confirms that the caller presented a
/// valid token. Clients discard the token on their side.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "message": "Logged out successfully" }
/// ```
/// - `401 Unauthorized` (missing or invalid token)
pub async fn logout(AuthUser(_claims): AuthUser) -> impl IntoResponse {
    Json(Message::new("Logged out successfully"))
}
