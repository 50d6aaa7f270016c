use crate::errors::ApiError;
use axum::http::{HeaderMap, header};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Issued tokens expire this long after login.
const TOKEN_TTL_HOURS: i64 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (the authenticated username)
    pub exp: usize,
}

/// Exact match against the single configured credential pair. No per-user
/// lookup, no hashing; callers get a yes/no with no hint which field failed.
pub fn credentials_match(
    configured_username: &str,
    configured_password: &str,
    username: &str,
    password: &str,
) -> bool {
    username == configured_username && password == configured_password
}

pub fn create_token(username: &str, secret: &str) -> Result<String, ApiError> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(TOKEN_TTL_HOURS))
        .ok_or_else(|| ApiError::Internal("Failed to calculate expiration".into()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: username.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("Token creation failed: {}", e)))
}

/// Signature and expiry check on a bare token string.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Forbidden)
}

/// Extracts the bearer token from the Authorization header and verifies it.
/// No token at all is `Unauthorized`; a token that fails the signature or
/// expiry check is `Forbidden`.
pub fn validate_token(headers: &HeaderMap, secret: &str) -> Result<Claims, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    // Check for "Bearer " prefix
    if !auth_header.starts_with("Bearer ") {
        return Err(ApiError::Unauthorized);
    }

    let token = &auth_header[7..];

    decode_token(token, secret)
}
