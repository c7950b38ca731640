//! Serves the assembled document over HTTP.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use routedoc_core::RouteRegistry;
use routedoc_openapi::DocumentAssembler;
use thiserror::Error;

use crate::config::{ConfigError, ServerConfig, normalize_spec_path};

/// Errors that stop the documentation server.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to serve OpenAPI document: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone)]
struct DocsState {
    registry: Arc<RouteRegistry>,
    assembler: Arc<DocumentAssembler>,
}

/// Create an axum Router serving the document at `spec_path`.
///
/// Each request assembles a fresh document from a snapshot of the registry,
/// so routes registered after the router is built are included. Spec paths
/// with capture or wildcard segments are rejected.
pub fn openapi_router(
    registry: Arc<RouteRegistry>,
    assembler: DocumentAssembler,
    spec_path: &str,
) -> Result<Router, ConfigError> {
    let spec_path = normalize_spec_path(spec_path)?;
    let state = DocsState {
        registry,
        assembler: Arc::new(assembler),
    };

    Ok(Router::new()
        .route(&spec_path, get(serve_document))
        .with_state(state))
}

/// Bind to `config.bind` and serve until the process exits.
pub async fn serve(
    config: &ServerConfig,
    registry: Arc<RouteRegistry>,
    assembler: DocumentAssembler,
) -> Result<(), ServeError> {
    let spec_path = normalize_spec_path(&config.spec_path)?;
    let routes = registry.len();
    let router = openapi_router(registry, assembler, &spec_path)?;

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        spec_path = %spec_path,
        routes,
        "serving OpenAPI document"
    );
    axum::serve(listener, router).await?;
    Ok(())
}

async fn serve_document(State(state): State<DocsState>) -> Response {
    let routes = state.registry.list();
    let document = state.assembler.generate(&routes);

    match document.to_json() {
        Ok(body) => {
            tracing::debug!(
                routes = routes.len(),
                paths = document.paths.len(),
                "served OpenAPI document"
            );
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to encode OpenAPI document");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
