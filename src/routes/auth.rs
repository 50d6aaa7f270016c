use crate::{
    AppState,
    auth::{create_token, credentials_match},
    dto::{LoginRequest, LoginResponse, MessageResponse, validation_messages},
    errors::ApiError,
};
use axum::{Json, extract::State};
use tracing::info;
use validator::Validate;

/// POST /auth/login
/// Body: { "username": "...", "password": "..." }
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(validation_messages(&e)))?;

    // Generic rejection: never reveal which half of the pair was wrong
    if !credentials_match(
        &state.credentials.username,
        &state.credentials.password,
        &payload.username,
        &payload.password,
    ) {
        return Err(ApiError::InvalidCredentials);
    }

    let token = create_token(&payload.username, &state.jwt_secret)?;

    info!("Login successful for {}", payload.username);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// POST /auth/logout
///
/// Tokens are stateless, so logout only tells the client to drop its copy.
/// A token that has already been handed out stays valid until it expires.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    })
}
