//! routedoc - OpenAPI documentation for declared routes
//!
//! Route owners register [`RouteDescriptor`]s in a [`RouteRegistry`]; the
//! [`DocumentAssembler`] turns a snapshot of the registry into an OpenAPI 3.0
//! document, and [`http::openapi_router`] serves it as JSON.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use routedoc::prelude::*;
//!
//! let registry = Arc::new(RouteRegistry::new());
//! registry.add_route(
//!     "GET",
//!     "/items/{id}",
//!     "Get item",
//!     None,
//!     vec![],
//!     vec![ParameterSpec::path("id", "string")],
//!     Some(Schema::object([("id", Schema::primitive("string"))])),
//! )?;
//!
//! let router = routedoc::http::openapi_router(registry, DocumentAssembler::new(), "/openapi.json")?;
//! ```
//!
//! # Manifests
//!
//! The `routedoc` binary reads routes from a TOML [`manifest`] and either serves
//! the document (`routedoc serve`) or prints it (`routedoc dump`).

pub mod config;
pub mod manifest;

#[cfg(feature = "http")]
pub mod http;

pub use routedoc_core::{
    ParamLocation, ParameterSpec, RegistryError, RouteDescriptor, RouteDescriptorBuilder,
    RouteRegistry, Schema, ToSchema,
};
pub use routedoc_openapi::{DocumentAssembler, OpenApiDocument, OpenApiError, generate};

pub use config::{ConfigError, InfoConfig, ServerConfig};
pub use manifest::{Manifest, ManifestError};

// Re-export for users building schemas from JSON
pub use serde_json;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        DocumentAssembler, OpenApiDocument, ParameterSpec, RouteDescriptor, RouteRegistry, Schema,
        ToSchema,
    };
}
