//! Error types for route registration.

use thiserror::Error;

/// Errors that can occur when registering routes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A strict registry rejected a malformed descriptor.
    #[error("Invalid route descriptor {method} {path:?}: {reason}")]
    InvalidDescriptor {
        method: String,
        path: String,
        reason: &'static str,
    },
}
