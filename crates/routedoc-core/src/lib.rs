//! Core types for routedoc.
//!
//! Route owners describe their operations with [`RouteDescriptor`]s and
//! register them in a [`RouteRegistry`]. The registry hands out immutable
//! snapshots that `routedoc-openapi` assembles into an OpenAPI document.
//!
//! # Example
//!
//! ```
//! use routedoc_core::{ParameterSpec, RouteRegistry, Schema};
//!
//! let registry = RouteRegistry::new();
//! registry
//!     .add_route(
//!         "GET",
//!         "/items",
//!         "List items",
//!         None,
//!         vec![ParameterSpec::query("limit", "integer")],
//!         vec![],
//!         Some(Schema::of::<Vec<String>>()),
//!     )
//!     .unwrap();
//!
//! assert_eq!(registry.len(), 1);
//! ```

mod descriptor;
mod error;
mod registry;
mod schema;

pub use descriptor::{ParamLocation, ParameterSpec, RouteDescriptor, RouteDescriptorBuilder};
pub use error::RegistryError;
pub use registry::RouteRegistry;
pub use schema::{Schema, ToSchema};

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
