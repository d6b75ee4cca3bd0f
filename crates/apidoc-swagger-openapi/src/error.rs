//! Error types for Swagger document conversion.

use apidoc_swagger_core::CoreError;
use thiserror::Error;

/// Errors that can occur around a conversion.
///
/// The synthesis engine itself never fails; these come from reading inputs
/// and rendering the finished document.
#[derive(Debug, Error)]
pub enum SwaggerError {
    /// Input could not be loaded.
    #[error("Invalid input: {0}")]
    Input(#[from] CoreError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
