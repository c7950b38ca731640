//! Assembles route descriptors into an OpenAPI document.

use std::collections::BTreeMap;

use routedoc_core::{ParamLocation, ParameterSpec, RouteDescriptor, Schema};
use serde_json::{Value, json};

use crate::types::{
    Info, MediaType, OPENAPI_VERSION, OpenApiDocument, Operation, Parameter, ParameterSchema,
    RequestBody, Response,
};

/// Default `info.title`.
pub const DEFAULT_TITLE: &str = "API Documentation";
/// Default `info.version`.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Generate a document with the default `info` header.
pub fn generate(routes: &[RouteDescriptor]) -> OpenApiDocument {
    DocumentAssembler::default().generate(routes)
}

/// Builds OpenAPI documents from route descriptors.
///
/// # Example
///
/// ```
/// use routedoc_core::{RouteDescriptor, Schema};
/// use routedoc_openapi::DocumentAssembler;
///
/// let routes = vec![
///     RouteDescriptor::builder("GET", "/items")
///         .summary("List items")
///         .response(Schema::of::<Vec<String>>())
///         .build(),
/// ];
///
/// let doc = DocumentAssembler::new().title("Items API").generate(&routes);
/// assert_eq!(doc.info.title, "Items API");
/// assert!(doc.operation("/items", "GET").is_some());
/// ```
///
/// # Conflict Resolution
///
/// - **Paths**: Last write wins. A later descriptor with the same path and
///   method replaces the earlier operation entirely.
/// - **Methods**: Used as keys exactly as registered, never re-cased.
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    title: String,
    version: String,
    description: Option<String>,
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAssembler {
    /// Create an assembler with the default title and version.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            description: None,
        }
    }

    /// Set the API title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the API version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the API description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build a document from `routes`, in order.
    ///
    /// This never fails: empty paths, methods and summaries are emitted as-is.
    pub fn generate(&self, routes: &[RouteDescriptor]) -> OpenApiDocument {
        let mut paths: BTreeMap<String, BTreeMap<String, Operation>> = BTreeMap::new();

        for route in routes {
            paths
                .entry(route.path().to_string())
                .or_default()
                .insert(route.method().to_string(), build_operation(route));
        }

        OpenApiDocument {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: self.title.clone(),
                version: self.version.clone(),
                description: self.description.clone(),
            },
            paths,
        }
    }
}

fn build_operation(route: &RouteDescriptor) -> Operation {
    let parameters = route
        .query_parameters()
        .iter()
        .map(|p| build_parameter(p, ParamLocation::Query))
        .chain(
            route
                .path_parameters()
                .iter()
                .map(|p| build_parameter(p, ParamLocation::Path)),
        )
        .collect();

    let request_body = route.request_body().map(|schema| RequestBody {
        content: MediaType::json(Some(schema.to_value())),
    });

    let success = Response {
        description: "Success".to_string(),
        content: MediaType::json(normalize_response_schema(route.response())),
    };

    Operation {
        summary: route.summary().to_string(),
        parameters,
        request_body,
        responses: BTreeMap::from([("200".to_string(), success)]),
    }
}

fn build_parameter(param: &ParameterSpec, location: ParamLocation) -> Parameter {
    Parameter {
        name: param.name().to_string(),
        location,
        required: param.is_required(),
        schema: ParameterSchema {
            ty: param.type_name().to_string(),
        },
        description: param.description_text().to_string(),
    }
}

/// Render a response schema, wrapping lists in the OpenAPI array envelope.
///
/// `Array(T)` becomes `{"type": "array", "items": T}`; every other schema is
/// rendered unchanged. An absent schema stays absent. Raw JSON is never
/// classified, even when it holds a list.
pub fn normalize_response_schema(schema: Option<&Schema>) -> Option<Value> {
    let schema = schema?;
    Some(match schema.element() {
        Some(element) => json!({ "type": "array", "items": element.to_value() }),
        None => schema.to_value(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(method: &str, path: &str) -> routedoc_core::RouteDescriptorBuilder {
        RouteDescriptor::builder(method, path)
    }

    #[test]
    fn test_header_fields() {
        let doc = generate(&[]);
        assert_eq!(doc.openapi, "3.0.0");
        assert_eq!(doc.info.title, "API Documentation");
        assert_eq!(doc.info.version, "1.0.0");
        assert!(doc.info.description.is_none());
        assert!(doc.paths.is_empty());
    }

    #[test]
    fn test_custom_info() {
        let doc = DocumentAssembler::new()
            .title("Items")
            .version("2.1.0")
            .description("Item store")
            .generate(&[]);
        assert_eq!(doc.info.title, "Items");
        assert_eq!(doc.info.version, "2.1.0");
        assert_eq!(doc.info.description.as_deref(), Some("Item store"));
    }

    #[test]
    fn test_groups_methods_under_path() {
        let routes = vec![
            route("GET", "/items").summary("List").build(),
            route("POST", "/items").summary("Create").build(),
            route("GET", "/users").summary("Users").build(),
        ];
        let doc = generate(&routes);

        assert_eq!(doc.paths.len(), 2);
        assert_eq!(doc.paths["/items"].len(), 2);
        assert_eq!(doc.operation("/items", "POST").unwrap().summary, "Create");
    }

    #[test]
    fn test_last_write_wins() {
        let routes = vec![
            route("GET", "/x")
                .summary("first")
                .query(ParameterSpec::query("q", "string"))
                .build(),
            route("GET", "/x").summary("second").build(),
        ];
        let doc = generate(&routes);

        let op = doc.operation("/x", "GET").unwrap();
        assert_eq!(op.summary, "second");
        assert!(op.parameters.is_empty());
    }

    #[test]
    fn test_method_casing_preserved() {
        let routes = vec![route("get", "/x").build(), route("GET", "/x").build()];
        let doc = generate(&routes);
        assert_eq!(doc.paths["/x"].len(), 2);
    }

    #[test]
    fn test_query_before_path_parameters() {
        let routes = vec![
            route("GET", "/a/{id}")
                .path_param(ParameterSpec::path("id", "integer"))
                .query(ParameterSpec::query("limit", "integer").description("Max"))
                .query(ParameterSpec::query("offset", "integer"))
                .build(),
        ];
        let op = generate(&routes).operation("/a/{id}", "GET").cloned().unwrap();

        let order: Vec<_> = op
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), p.location))
            .collect();
        assert_eq!(
            order,
            [
                ("limit", ParamLocation::Query),
                ("offset", ParamLocation::Query),
                ("id", ParamLocation::Path),
            ]
        );
        assert_eq!(op.parameters[0].description, "Max");
        assert!(op.parameters[2].required);
    }

    #[test]
    fn test_normalize_response_schema() {
        assert_eq!(normalize_response_schema(None), None);
        assert_eq!(
            normalize_response_schema(Some(&Schema::of::<Vec<i64>>())),
            Some(json!({"type": "array", "items": {"type": "integer"}}))
        );
        assert_eq!(
            normalize_response_schema(Some(&Schema::raw(json!({"id": "string"})))),
            Some(json!({"id": "string"}))
        );
    }

    #[test]
    fn test_nested_list_response_wraps_each_level_once() {
        let schema = Schema::of::<Vec<Vec<String>>>();
        assert_eq!(
            normalize_response_schema(Some(&schema)),
            Some(json!({
                "type": "array",
                "items": {"type": "array", "items": {"type": "string"}}
            }))
        );
    }

    #[test]
    fn test_raw_list_response_is_not_wrapped() {
        assert_eq!(
            normalize_response_schema(Some(&Schema::raw(json!(["item"])))),
            Some(json!(["item"]))
        );
    }

    #[test]
    fn test_list_request_body_uses_array_schema() {
        let routes = vec![
            route("POST", "/batch")
                .request_body(Schema::of::<Vec<String>>())
                .build(),
        ];
        let doc = generate(&routes);
        let op = doc.operation("/batch", "POST").unwrap();
        assert_eq!(
            op.request_schema(),
            Some(&json!({"type": "array", "items": {"type": "string"}}))
        );
    }
}
