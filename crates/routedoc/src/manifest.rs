//! TOML route manifests.
//!
//! A manifest declares server settings, the document `info` header, and the
//! routes to document:
//!
//! ```toml
//! strict = true
//!
//! [server]
//! bind = "0.0.0.0:8080"
//! spec_path = "/openapi.json"
//!
//! [info]
//! title = "Items API"
//!
//! [[routes]]
//! method = "GET"
//! path = "/items/{id}"
//! summary = "Get item"
//! response = { object = { id = { primitive = "string" } } }
//!
//! [[routes.path_params]]
//! name = "id"
//! type = "string"
//! required = true
//! ```

use std::path::Path;

use routedoc_core::{ParameterSpec, RegistryError, RouteDescriptor, RouteRegistry, Schema};
use routedoc_openapi::DocumentAssembler;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{ConfigError, InfoConfig, ServerConfig};

/// Errors that can occur while loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid TOML or has the wrong shape.
    #[error("Invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// The `[server]` table is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A route was rejected by the registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// A parsed route manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Reject routes with an empty method, path, or parameter name.
    pub strict: bool,
    pub server: ServerConfig,
    pub info: InfoConfig,
    pub routes: Vec<RouteEntry>,
}

/// One `[[routes]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteEntry {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub request_body: Option<Schema>,
    #[serde(default)]
    pub query_params: Vec<ParameterSpec>,
    #[serde(default)]
    pub path_params: Vec<ParameterSpec>,
    #[serde(default)]
    pub response: Option<Schema>,
}

impl From<RouteEntry> for RouteDescriptor {
    fn from(entry: RouteEntry) -> Self {
        RouteDescriptor::new(
            entry.method,
            entry.path,
            entry.summary,
            entry.request_body,
            entry.query_params,
            entry.path_params,
            entry.response,
        )
    }
}

impl Manifest {
    /// Parse a manifest from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self, ManifestError> {
        let mut manifest: Manifest = toml::from_str(source)?;
        manifest.server = manifest.server.validate()?;
        Ok(manifest)
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let manifest = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            routes = manifest.routes.len(),
            "loaded route manifest"
        );
        Ok(manifest)
    }

    /// Register every route, in manifest order, in a fresh registry.
    ///
    /// The registry is strict if either the manifest or `force_strict` asks for it.
    pub fn registry(&self, force_strict: bool) -> Result<RouteRegistry, ManifestError> {
        let registry = if self.strict || force_strict {
            RouteRegistry::strict()
        } else {
            RouteRegistry::new()
        };

        for entry in &self.routes {
            registry.register(entry.clone().into())?;
        }
        Ok(registry)
    }

    /// An assembler emitting the manifest's `info` header.
    pub fn assembler(&self) -> DocumentAssembler {
        self.info.assembler()
    }
}
