//! Server and document settings loaded from a manifest.

use std::net::{Ipv4Addr, SocketAddr};

use routedoc_openapi::{DEFAULT_TITLE, DEFAULT_VERSION, DocumentAssembler};
use serde::Deserialize;
use thiserror::Error;

/// Path the document is served at unless configured otherwise.
pub const DEFAULT_SPEC_PATH: &str = "/openapi.json";

/// Port the server binds to unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors in server settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The spec path cannot be used as a static route.
    #[error("Invalid spec path {path:?}: {reason}")]
    InvalidSpecPath { path: String, reason: &'static str },
}

/// Validate a spec path and give it a leading slash.
///
/// The document is served from a single static route, so capture (`{id}`,
/// `:id`) and wildcard (`*rest`) segments are rejected.
pub fn normalize_spec_path(spec_path: &str) -> Result<String, ConfigError> {
    let reject = |reason| ConfigError::InvalidSpecPath {
        path: spec_path.to_string(),
        reason,
    };

    if spec_path.contains(['{', '}']) {
        return Err(reject("braces are not allowed"));
    }
    if spec_path
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
    {
        return Err(reject("segments must not start with `:` or `*`"));
    }

    Ok(if spec_path.starts_with('/') {
        spec_path.to_string()
    } else {
        format!("/{spec_path}")
    })
}

/// The `[server]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub spec_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            spec_path: DEFAULT_SPEC_PATH.to_string(),
        }
    }
}

impl ServerConfig {
    /// Check the spec path and normalize it in place.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.spec_path = normalize_spec_path(&self.spec_path)?;
        Ok(self)
    }

    /// Replace fields that were given on the command line or in the environment.
    pub fn with_overrides(
        mut self,
        bind: Option<SocketAddr>,
        spec_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        if let Some(spec_path) = spec_path {
            self.spec_path = spec_path;
        }
        self.validate()
    }
}

/// The `[info]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InfoConfig {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            description: None,
        }
    }
}

impl InfoConfig {
    /// An assembler emitting this `info` header.
    pub fn assembler(&self) -> DocumentAssembler {
        let assembler = DocumentAssembler::new()
            .title(&self.title)
            .version(&self.version);
        match &self.description {
            Some(description) => assembler.description(description),
            None => assembler,
        }
    }
}
