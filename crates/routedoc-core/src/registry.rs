//! Ordered, append-only storage for route descriptors.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use crate::Result;
use crate::descriptor::{ParameterSpec, RouteDescriptor};
use crate::error::RegistryError;
use crate::schema::Schema;

/// An owned collection of route descriptors in registration order.
///
/// Appends take a write lock and [`list`](Self::list) copies a snapshot under a
/// read lock, so readers never observe a partially appended state. Share the
/// registry between registration call sites and the transport with an `Arc`.
///
/// Registering the same (path, method) pair twice is accepted; the later
/// descriptor shadows the earlier one in generated documents.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: RwLock<Routes>,
    strict: bool,
}

#[derive(Debug, Default)]
struct Routes {
    list: Vec<RouteDescriptor>,
    /// (path, method) pairs already in `list`.
    keys: HashSet<(String, String)>,
}

impl RouteRegistry {
    /// Create a permissive registry that accepts any descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that rejects descriptors with an empty method, path,
    /// or parameter name.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Append a descriptor.
    pub fn register(&self, route: RouteDescriptor) -> Result<()> {
        if self.strict {
            validate(&route)?;
        }

        let mut routes = self.routes.write().unwrap_or_else(PoisonError::into_inner);
        let key = (route.path().to_string(), route.method().to_string());
        if !routes.keys.insert(key) {
            tracing::debug!(
                method = route.method(),
                path = route.path(),
                "route shadows an earlier registration"
            );
        }
        tracing::debug!(
            method = route.method(),
            path = route.path(),
            index = routes.list.len(),
            "registered route"
        );
        routes.list.push(route);
        Ok(())
    }

    /// Build a descriptor from its parts and append it.
    ///
    /// A request body supplied for a `"GET"` route is dropped.
    #[allow(clippy::too_many_arguments)]
    pub fn add_route(
        &self,
        method: impl Into<String>,
        path: impl Into<String>,
        summary: impl Into<String>,
        request_body: Option<Schema>,
        query_params: Vec<ParameterSpec>,
        path_params: Vec<ParameterSpec>,
        response: Option<Schema>,
    ) -> Result<()> {
        self.register(RouteDescriptor::new(
            method,
            path,
            summary,
            request_body,
            query_params,
            path_params,
            response,
        ))
    }

    /// Snapshot of all registered descriptors, in registration order.
    pub fn list(&self) -> Vec<RouteDescriptor> {
        self.routes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .list
            .clone()
    }

    pub fn len(&self) -> usize {
        self.routes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .list
            .len()
    }

    /// Whether a descriptor for this (path, method) pair has been registered.
    pub fn contains(&self, path: &str, method: &str) -> bool {
        self.routes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys
            .contains(&(path.to_string(), method.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate(route: &RouteDescriptor) -> Result<()> {
    let reason = if route.method().is_empty() {
        "method must not be empty"
    } else if route.path().is_empty() {
        "path must not be empty"
    } else if route
        .query_parameters()
        .iter()
        .chain(route.path_parameters())
        .any(|param| param.name().is_empty())
    {
        "parameter name must not be empty"
    } else {
        return Ok(());
    };

    Err(RegistryError::InvalidDescriptor {
        method: route.method().to_string(),
        path: route.path().to_string(),
        reason,
    })
}
