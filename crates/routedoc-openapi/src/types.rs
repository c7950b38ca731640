//! Typed OpenAPI structures.
//!
//! These types represent the subset of OpenAPI 3.0 that routedoc emits.

use std::collections::BTreeMap;

use routedoc_core::ParamLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// The OpenAPI version emitted by the assembler.
pub const OPENAPI_VERSION: &str = "3.0.0";

/// The only media type routes are documented with.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Operations at one path, keyed by method exactly as registered.
pub type PathItem = BTreeMap<String, Operation>;

/// A complete OpenAPI document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenApiDocument {
    pub openapi: String,
    pub info: Info,
    pub paths: BTreeMap<String, PathItem>,
}

/// The `info` header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An OpenAPI operation (endpoint).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub summary: String,
    /// Query parameters first, then path parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Response definitions keyed by status code.
    pub responses: BTreeMap<String, Response>,
}

/// An OpenAPI parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParamLocation,
    pub required: bool,
    pub schema: ParameterSchema,
    /// Always emitted, possibly empty.
    pub description: String,
}

/// The `{"type": ...}` schema of a parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub ty: String,
}

/// A request body definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestBody {
    pub content: BTreeMap<String, MediaType>,
}

/// A response definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub description: String,
    pub content: BTreeMap<String, MediaType>,
}

/// Content for one media type.
///
/// An absent schema serializes as an explicit `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaType {
    pub schema: Option<Value>,
}

impl MediaType {
    /// Content map with a single `application/json` entry.
    pub fn json(schema: Option<Value>) -> BTreeMap<String, MediaType> {
        BTreeMap::from([(JSON_MEDIA_TYPE.to_string(), MediaType { schema })])
    }
}

impl OpenApiDocument {
    /// Operation registered at `path` for `method`, if any.
    pub fn operation(&self, path: &str, method: &str) -> Option<&Operation> {
        self.paths.get(path)?.get(method)
    }

    /// Convert to a JSON value.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to compact JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Operation {
    /// Schema of the `application/json` content of a response.
    pub fn response_schema(&self, status: &str) -> Option<&Value> {
        self.responses
            .get(status)?
            .content
            .get(JSON_MEDIA_TYPE)?
            .schema
            .as_ref()
    }

    /// Schema of the `application/json` request body.
    pub fn request_schema(&self) -> Option<&Value> {
        self.request_body
            .as_ref()?
            .content
            .get(JSON_MEDIA_TYPE)?
            .schema
            .as_ref()
    }
}
