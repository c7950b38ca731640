//! Route and parameter descriptors.

use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// The only method whose request body is dropped at construction time.
const GET: &str = "GET";

/// Where a parameter appears in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Query,
    Path,
}

impl ParamLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamLocation::Query => "query",
            ParamLocation::Path => "path",
        }
    }
}

impl std::fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query or path parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParameterSpec {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    required: bool,
    #[serde(rename = "type", default = "default_param_type")]
    ty: String,
}

fn default_param_type() -> String {
    "string".to_string()
}

impl ParameterSpec {
    /// Create an optional parameter with no description.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            required: false,
            ty: ty.into(),
        }
    }

    /// Create a required path parameter.
    pub fn path(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, ty).required(true)
    }

    /// Create an optional query parameter.
    pub fn query(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, ty)
    }

    /// Set whether the parameter is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description_text(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Primitive type name, e.g. `"string"`.
    pub fn type_name(&self) -> &str {
        &self.ty
    }
}

/// One declared API operation.
///
/// Descriptors are immutable once built. A descriptor whose method is exactly
/// `"GET"` never carries a request body: any body supplied for it is dropped
/// when the descriptor is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor {
    method: String,
    path: String,
    summary: String,
    request_body: Option<Schema>,
    query_parameters: Vec<ParameterSpec>,
    path_parameters: Vec<ParameterSpec>,
    response: Option<Schema>,
}

impl RouteDescriptor {
    /// Create a descriptor from all of its parts.
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        summary: impl Into<String>,
        request_body: Option<Schema>,
        query_parameters: Vec<ParameterSpec>,
        path_parameters: Vec<ParameterSpec>,
        response: Option<Schema>,
    ) -> Self {
        let method = method.into();
        let request_body = if method == GET { None } else { request_body };

        Self {
            method,
            path: path.into(),
            summary: summary.into(),
            request_body,
            query_parameters,
            path_parameters,
            response,
        }
    }

    /// Start building a descriptor.
    ///
    /// ```
    /// use routedoc_core::{ParameterSpec, RouteDescriptor, Schema};
    ///
    /// let route = RouteDescriptor::builder("GET", "/items/{id}")
    ///     .summary("Get item")
    ///     .path_param(ParameterSpec::path("id", "string"))
    ///     .response(Schema::primitive("string"))
    ///     .build();
    ///
    /// assert_eq!(route.path_parameters().len(), 1);
    /// ```
    pub fn builder(method: impl Into<String>, path: impl Into<String>) -> RouteDescriptorBuilder {
        RouteDescriptorBuilder {
            method: method.into(),
            path: path.into(),
            summary: String::new(),
            request_body: None,
            query_parameters: Vec::new(),
            path_parameters: Vec::new(),
            response: None,
        }
    }

    /// HTTP method, exactly as registered.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// URL template, exactly as registered.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn request_body(&self) -> Option<&Schema> {
        self.request_body.as_ref()
    }

    pub fn query_parameters(&self) -> &[ParameterSpec] {
        &self.query_parameters
    }

    pub fn path_parameters(&self) -> &[ParameterSpec] {
        &self.path_parameters
    }

    pub fn response(&self) -> Option<&Schema> {
        self.response.as_ref()
    }
}

/// Builder for [`RouteDescriptor`].
#[derive(Debug, Clone)]
pub struct RouteDescriptorBuilder {
    method: String,
    path: String,
    summary: String,
    request_body: Option<Schema>,
    query_parameters: Vec<ParameterSpec>,
    path_parameters: Vec<ParameterSpec>,
    response: Option<Schema>,
}

impl RouteDescriptorBuilder {
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn request_body(mut self, schema: Schema) -> Self {
        self.request_body = Some(schema);
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, param: ParameterSpec) -> Self {
        self.query_parameters.push(param);
        self
    }

    /// Append a path parameter.
    pub fn path_param(mut self, param: ParameterSpec) -> Self {
        self.path_parameters.push(param);
        self
    }

    pub fn response(mut self, schema: Schema) -> Self {
        self.response = Some(schema);
        self
    }

    pub fn build(self) -> RouteDescriptor {
        RouteDescriptor::new(
            self.method,
            self.path,
            self.summary,
            self.request_body,
            self.query_parameters,
            self.path_parameters,
            self.response,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_drops_request_body() {
        let route = RouteDescriptor::builder("GET", "/items")
            .request_body(Schema::primitive("string"))
            .build();
        assert!(route.request_body().is_none());
    }

    #[test]
    fn test_get_rule_is_case_sensitive() {
        let route = RouteDescriptor::builder("get", "/items")
            .request_body(Schema::primitive("string"))
            .build();
        assert!(route.request_body().is_some());
    }

    #[test]
    fn test_post_keeps_request_body() {
        let route = RouteDescriptor::new(
            "POST",
            "/items",
            "Create item",
            Some(Schema::primitive("string")),
            vec![],
            vec![],
            None,
        );
        assert_eq!(route.request_body(), Some(&Schema::primitive("string")));
        assert_eq!(route.summary(), "Create item");
    }

    #[test]
    fn test_builder_preserves_parameter_order() {
        let route = RouteDescriptor::builder("GET", "/a/{b}/{c}")
            .path_param(ParameterSpec::path("b", "string"))
            .query(ParameterSpec::query("q", "string"))
            .path_param(ParameterSpec::path("c", "integer"))
            .build();

        let names: Vec<_> = route.path_parameters().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["b", "c"]);
        assert_eq!(route.query_parameters()[0].name(), "q");
    }

    #[test]
    fn test_parameter_defaults() {
        let param: ParameterSpec = serde_json::from_str(r#"{"name": "limit"}"#).unwrap();
        assert_eq!(param.type_name(), "string");
        assert!(!param.is_required());
        assert_eq!(param.description_text(), "");

        let id = ParameterSpec::path("id", "integer").description("Item ID");
        assert!(id.is_required());
        assert_eq!(id.description_text(), "Item ID");
    }
}
