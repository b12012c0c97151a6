//! Framework error type.
//!
//! Sub-crates define their own error enums (`SpatialError`, `ProviderError`,
//! `RenderError`) rather than funneling everything through one type; this
//! crate only carries the errors its own modules can produce.

use thiserror::Error;

/// The top-level error type for `cp-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
