//! Error types for document serialization.

use thiserror::Error;

/// Errors that can occur when encoding an OpenAPI document.
///
/// Assembly itself never fails; only encoding the result can.
#[derive(Debug, Error)]
pub enum OpenApiError {
    /// JSON serialization error.
    #[error("Failed to serialize OpenAPI document: {0}")]
    Serialization(#[from] serde_json::Error),
}
