//! OpenAPI 3.0 document assembly for routedoc.
//!
//! This crate turns an ordered list of [`RouteDescriptor`]s into a typed
//! [`OpenApiDocument`]. Assembly is a pure function: it performs no I/O and
//! never fails.
//!
//! # Example
//!
//! ```
//! use routedoc_core::{RouteDescriptor, Schema};
//!
//! let routes = vec![
//!     RouteDescriptor::builder("POST", "/items")
//!         .summary("Create item")
//!         .request_body(Schema::primitive("string"))
//!         .response(Schema::primitive("string"))
//!         .build(),
//! ];
//!
//! let doc = routedoc_openapi::generate(&routes);
//! let json = doc.to_value().unwrap();
//! assert_eq!(json["paths"]["/items"]["POST"]["summary"], "Create item");
//! ```
//!
//! [`RouteDescriptor`]: routedoc_core::RouteDescriptor

mod assembler;
mod error;
mod types;

pub use assembler::{
    DEFAULT_TITLE, DEFAULT_VERSION, DocumentAssembler, generate, normalize_response_schema,
};
pub use error::OpenApiError;
pub use types::*;

/// Result type for OpenAPI operations.
pub type Result<T> = std::result::Result<T, OpenApiError>;
