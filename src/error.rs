//! Errors raised while decoding requests at the WASM boundary.
//!
//! Binding itself never fails; these only cover inputs that cannot be read
//! at all.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OptionsError>;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown label mapper: {0}")]
    UnknownMapper(String),

    #[error("missing parameter: {0}")]
    MissingParam(&'static str),
}
