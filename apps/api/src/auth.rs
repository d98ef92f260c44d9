//! Shared-secret authentication for the advisory endpoints.

use axum::http::HeaderMap;

use crate::config::Config;
use crate::errors::AppError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Verifies the caller-supplied `X-API-Key` header byte-for-byte against the
/// configured secret. Runs before any prompt composition or provider call.
///
/// A server with no secret configured fails with a misconfiguration error;
/// a missing or mismatched header fails as unauthorized.
pub fn verify_api_key(config: &Config, headers: &HeaderMap) -> Result<(), AppError> {
    let expected = config
        .api_key
        .as_deref()
        .ok_or(AppError::ApiKeyNotConfigured)?;

    match headers.get(API_KEY_HEADER).map(|v| v.as_bytes()) {
        Some(presented) if presented == expected.as_bytes() => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}
