//! Provider-subsystem error type.
//!
//! "Location not found" is deliberately not an error — the geocoder models
//! it as `Ok(None)` so the interactive retry loop stays a caller concern.

use thiserror::Error;

/// Errors produced by the provider clients.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned HTTP status {0}")]
    Status(u16),

    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed provider field: {0}")]
    Malformed(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
