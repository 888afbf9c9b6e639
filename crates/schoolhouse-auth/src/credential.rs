//! Credential verification for incoming requests.
//!
//! A missing header is `Unauthenticated`; anything present that fails to
//! verify is `InvalidCredential`.

use schoolhouse_config::JwtConfig;
use schoolhouse_core::AppError;

use crate::claims::Claims;
use crate::jwt::verify_token;

const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the token from an `Authorization` header value.
///
/// The `Bearer ` prefix is stripped when present; a bare token is accepted
/// as-is. An absent or blank header is rejected as unauthenticated.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let value = header
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::unauthenticated("Access denied. No token provided."))?;

    let token = value
        .trim_start()
        .strip_prefix(BEARER_PREFIX)
        .unwrap_or(value)
        .trim();
    if token.is_empty() {
        return Err(AppError::invalid_credential("Invalid token"));
    }

    Ok(token)
}

/// Verifies the credential carried by an `Authorization` header.
pub fn verify_credential(header: Option<&str>, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let token = bearer_token(header)?;
    verify_token(token, jwt_config)
}
