//! The normalized schema value produced by derivation.
//!
//! [`Schema`] is a small algebraic model of the OpenAPI 3.1 Schema object:
//! just the cases derivation can produce, with structural equality and no
//! identity. Serialization renders the conventional JSON form
//! (`type`/`properties`/`required`/`enum`/`oneOf`/`items`/`prefixItems`/
//! `$ref`); serializing whole documents is the surrounding document model's
//! concern.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use eidos_core::PrimitiveKind;

/// A normalized description of a value's shape.
///
/// The engine never introduces cycles: recursive types must be broken by the
/// shape producer inserting a [`Schema::Ref`] at the recursion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// An object with named properties; insertion order is preserved.
    Object {
        /// Property name to schema, in insertion order.
        properties: IndexMap<String, Schema>,
        /// Names of required properties.
        required: Vec<String>,
    },
    /// A string enumeration.
    Enum {
        /// Allowed values, in declaration order; duplicates preserved.
        values: Vec<String>,
    },
    /// A disjunction of alternatives.
    OneOf {
        /// The alternatives, in declaration order.
        alternatives: Vec<Schema>,
    },
    /// A homogeneous array.
    Array {
        /// Element schema.
        items: Box<Schema>,
    },
    /// A fixed-length positional tuple, rendered via `prefixItems`.
    Tuple {
        /// Per-position schemas.
        items: Vec<Schema>,
    },
    /// A reference to a schema registered under a name.
    Ref {
        /// The registered name.
        name: String,
    },
    /// An opaque leaf type.
    Primitive(PrimitiveKind),
}

impl Schema {
    /// Create a string schema.
    #[must_use]
    pub fn string() -> Self {
        Self::Primitive(PrimitiveKind::String)
    }

    /// Create an integer schema.
    #[must_use]
    pub fn integer() -> Self {
        Self::Primitive(PrimitiveKind::Integer)
    }

    /// Create a number schema.
    #[must_use]
    pub fn number() -> Self {
        Self::Primitive(PrimitiveKind::Number)
    }

    /// Create a boolean schema.
    #[must_use]
    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveKind::Boolean)
    }

    /// Create a null schema.
    #[must_use]
    pub fn null() -> Self {
        Self::Primitive(PrimitiveKind::Null)
    }

    /// Create an array schema with the given item schema.
    #[must_use]
    pub fn array(items: Schema) -> Self {
        Self::Array {
            items: Box::new(items),
        }
    }

    /// Create an empty object schema.
    #[must_use]
    pub fn object() -> Self {
        Self::Object {
            properties: IndexMap::new(),
            required: Vec::new(),
        }
    }

    /// Create a string enumeration schema.
    #[must_use]
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a disjunction over the given alternatives.
    #[must_use]
    pub fn one_of(alternatives: Vec<Schema>) -> Self {
        Self::OneOf { alternatives }
    }

    /// Create a reference schema to a registered name.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Ref { name: name.into() }
    }

    /// Wraps this schema so a null value is also accepted.
    #[must_use]
    pub fn nullable(self) -> Self {
        Self::OneOf {
            alternatives: vec![self, Self::null()],
        }
    }
}

impl Serialize for Schema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Object {
                properties,
                required,
            } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "object")?;
                if !properties.is_empty() {
                    map.serialize_entry("properties", properties)?;
                }
                if !required.is_empty() {
                    map.serialize_entry("required", required)?;
                }
                map.end()
            }
            Self::Enum { values } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "string")?;
                map.serialize_entry("enum", values)?;
                map.end()
            }
            Self::OneOf { alternatives } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("oneOf", alternatives)?;
                map.end()
            }
            Self::Array { items } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("items", items)?;
                map.end()
            }
            Self::Tuple { items } => {
                let len = items.len() as u64;
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("prefixItems", items)?;
                map.serialize_entry("minItems", &len)?;
                map.serialize_entry("maxItems", &len)?;
                map.end()
            }
            Self::Ref { name } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$ref", &format!("#/components/schemas/{name}"))?;
                map.end()
            }
            Self::Primitive(kind) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", kind.as_str())?;
                map.end()
            }
        }
    }
}
