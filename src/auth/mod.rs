use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::error::ServiceError;

/// Claims read from the bearer token. Both must be present as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    pub username: String,
    pub role: String,
}

/// Extracts and verifies the bearer token from the Authorization header.
///
/// The header must hold exactly two space-separated tokens (scheme +
/// credential); the scheme string itself is not inspected. The credential
/// must be signed with the shared secret using an HMAC algorithm. Every
/// failure maps to precondition-required so clients can tell "not
/// authenticated" (428) apart from "not allowed" (403).
pub fn token_claims(headers: &HeaderMap, secret: &str) -> Result<Claims, ServiceError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() != 2 {
        return Err(ServiceError::PreconditionRequired);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    // exp is validated when present but not required, matching the token
    // issuer this service pairs with.
    validation.required_spec_claims.clear();

    let token = decode::<Claims>(
        parts[1],
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "token rejected");
        ServiceError::PreconditionRequired
    })?;

    Ok(token.claims)
}

/// Gate for the list/update/delete routes: the role claim must equal
/// "administrator", case-insensitively.
pub fn require_administrator(claims: &Claims) -> Result<(), ServiceError> {
    if claims.role.eq_ignore_ascii_case("administrator") {
        Ok(())
    } else {
        Err(ServiceError::Forbidden)
    }
}
