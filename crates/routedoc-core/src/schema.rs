//! Schema values attached to route descriptors.
//!
//! A [`Schema`] describes the JSON shape of a request or response body. The
//! variant is chosen by whoever registers the route, so the only classification
//! the document assembler ever performs ("is this a list of T?") is a pattern
//! match on [`Schema::Array`].

use std::collections::{BTreeMap, VecDeque};

use serde::Deserialize;
use serde_json::{Map, Value, json};

/// A JSON shape description.
///
/// In a route manifest the externally tagged form is used:
///
/// ```toml
/// response = { array = { object = { id = { primitive = "string" } } } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    /// A primitive type name such as `"string"` or `"integer"`.
    Primitive(String),
    /// A record with named fields.
    Object(BTreeMap<String, Schema>),
    /// A homogeneous list whose elements are described by the inner schema.
    Array(Box<Schema>),
    /// A JSON pointer to a schema defined elsewhere.
    Ref(String),
    /// An opaque JSON value, emitted verbatim and never classified.
    Raw(Value),
}

impl Schema {
    /// Schema for a Rust type, derived from its declared shape.
    ///
    /// ```
    /// use routedoc_core::Schema;
    ///
    /// assert!(Schema::of::<Vec<String>>().is_array());
    /// assert!(!Schema::of::<String>().is_array());
    /// ```
    pub fn of<T: ToSchema + ?Sized>() -> Self {
        T::schema()
    }

    /// Create a primitive schema.
    pub fn primitive(name: impl Into<String>) -> Self {
        Schema::Primitive(name.into())
    }

    /// Create an object schema from `(field, schema)` pairs.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Schema)>,
    {
        Schema::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create a list schema with the given element schema.
    pub fn array(element: Schema) -> Self {
        Schema::Array(Box::new(element))
    }

    /// Create a `$ref` schema.
    pub fn reference(pointer: impl Into<String>) -> Self {
        Schema::Ref(pointer.into())
    }

    /// Wrap an arbitrary JSON value.
    pub fn raw(value: Value) -> Self {
        Schema::Raw(value)
    }

    /// Whether this schema describes a list of elements.
    pub fn is_array(&self) -> bool {
        matches!(self, Schema::Array(_))
    }

    /// The element schema, if this is a list.
    pub fn element(&self) -> Option<&Schema> {
        match self {
            Schema::Array(element) => Some(element.as_ref()),
            _ => None,
        }
    }

    /// Render the schema as JSON.
    ///
    /// Lists render as `{"type": "array", "items": ...}` at every depth.
    pub fn to_value(&self) -> Value {
        match self {
            Schema::Primitive(name) => json!({ "type": name }),
            Schema::Object(fields) => {
                let properties: Map<String, Value> = fields
                    .iter()
                    .map(|(name, schema)| (name.clone(), schema.to_value()))
                    .collect();
                json!({ "type": "object", "properties": properties })
            }
            Schema::Array(element) => json!({ "type": "array", "items": element.to_value() }),
            Schema::Ref(pointer) => json!({ "$ref": pointer }),
            Schema::Raw(value) => value.clone(),
        }
    }
}

impl From<Value> for Schema {
    fn from(value: Value) -> Self {
        Schema::Raw(value)
    }
}

/// Types with a statically known schema.
pub trait ToSchema {
    /// The schema describing values of this type.
    fn schema() -> Schema;
}

macro_rules! impl_primitive_schema {
    ($name:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl ToSchema for $ty {
                fn schema() -> Schema {
                    Schema::Primitive($name.to_string())
                }
            }
        )+
    };
}

impl_primitive_schema!("string" => String, str, char);
impl_primitive_schema!("integer" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_primitive_schema!("number" => f32, f64);
impl_primitive_schema!("boolean" => bool);

impl<T: ToSchema> ToSchema for Vec<T> {
    fn schema() -> Schema {
        Schema::array(T::schema())
    }
}

impl<T: ToSchema> ToSchema for VecDeque<T> {
    fn schema() -> Schema {
        Schema::array(T::schema())
    }
}

impl<T: ToSchema> ToSchema for [T] {
    fn schema() -> Schema {
        Schema::array(T::schema())
    }
}

impl<T: ToSchema, const N: usize> ToSchema for [T; N] {
    fn schema() -> Schema {
        Schema::array(T::schema())
    }
}

impl<T: ToSchema> ToSchema for Option<T> {
    fn schema() -> Schema {
        T::schema()
    }
}

impl<T: ToSchema + ?Sized> ToSchema for Box<T> {
    fn schema() -> Schema {
        T::schema()
    }
}

impl<T: ToSchema + ?Sized> ToSchema for &T {
    fn schema() -> Schema {
        T::schema()
    }
}

impl ToSchema for Value {
    fn schema() -> Schema {
        Schema::Raw(json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_type_classification() {
        assert_eq!(Schema::of::<Vec<String>>(), Schema::array(Schema::primitive("string")));
        assert_eq!(Schema::of::<[u32]>(), Schema::array(Schema::primitive("integer")));
        assert_eq!(Schema::of::<[bool; 4]>(), Schema::array(Schema::primitive("boolean")));
        assert_eq!(Schema::of::<Option<f64>>(), Schema::primitive("number"));
        assert_eq!(Schema::of::<&str>(), Schema::primitive("string"));
        assert!(!Schema::of::<Box<i64>>().is_array());
    }

    #[test]
    fn test_nested_lists() {
        let schema = Schema::of::<Vec<Vec<i32>>>();
        let inner = schema.element().unwrap();
        assert!(inner.is_array());
        assert_eq!(inner.element(), Some(&Schema::primitive("integer")));
    }

    #[test]
    fn test_render_object() {
        let schema = Schema::object([
            ("id", Schema::primitive("string")),
            ("tags", Schema::of::<Vec<String>>()),
        ]);

        assert_eq!(
            schema.to_value(),
            json!({
                "type": "object",
                "properties": {
                    "id": {"type": "string"},
                    "tags": {"type": "array", "items": {"type": "string"}}
                }
            })
        );
    }

    #[test]
    fn test_render_nested_list() {
        assert_eq!(
            Schema::of::<Vec<Vec<i32>>>().to_value(),
            json!({
                "type": "array",
                "items": {"type": "array", "items": {"type": "integer"}}
            })
        );
    }

    #[test]
    fn test_render_ref_and_raw() {
        assert_eq!(
            Schema::reference("#/components/schemas/Item").to_value(),
            json!({"$ref": "#/components/schemas/Item"})
        );
        assert_eq!(Schema::raw(json!({"id": "string"})).to_value(), json!({"id": "string"}));
    }

    #[test]
    fn test_raw_json_array_is_opaque() {
        let schema = Schema::from(json!(["item"]));
        assert!(!schema.is_array());
        assert_eq!(schema.to_value(), json!(["item"]));
    }

    #[test]
    fn test_deserialize_tagged_form() {
        let schema: Schema = serde_json::from_value(json!({
            "array": {"object": {"id": {"primitive": "string"}, "owner": {"ref": "#/User"}}}
        }))
        .unwrap();

        assert_eq!(
            schema,
            Schema::array(Schema::object([
                ("id", Schema::primitive("string")),
                ("owner", Schema::reference("#/User")),
            ]))
        );
    }
}
