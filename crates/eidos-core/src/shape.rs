//! The abstract shape algebra describing data types.
//!
//! A [`TypeShape`] is produced by an external reflection or code-generation
//! facility (see [`crate::HasShape`] for the manual seam) and consumed by the
//! derivation engine. Shapes are immutable value types with structural
//! equality and no identity beyond their structure.
//!
//! # Invariants
//!
//! Constructor tags within one [`TypeShape::Sum`] are unique, and field names
//! within one [`Product`], when present, are unique. These invariants are the
//! caller's responsibility; violations are not detected here and lead to
//! silent key overwrites downstream.

use serde::{Deserialize, Serialize};

/// A leaf type opaque to the derivation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// String type.
    String,
    /// Integer type.
    Integer,
    /// Floating-point number type.
    Number,
    /// Boolean type.
    Boolean,
    /// Null type.
    Null,
}

impl PrimitiveKind {
    /// Returns the JSON Schema type keyword for this primitive.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

/// A single field of a [`Product`].
///
/// Fields of a plain record carry a name; fields of a positional (tuple-like)
/// constructor do not. A field may be *omissible*: its absence is a valid
/// encoding of "no value", as opposed to an explicit null. Omissibility is
/// signalled by whatever produced the shape, typically because the field's
/// host type is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, absent for positional fields.
    pub name: Option<String>,
    /// Shape of the field's value.
    pub shape: TypeShape,
    /// Whether the field may be omitted entirely when encoding.
    #[serde(default)]
    pub omissible: bool,
}

impl Field {
    /// Creates a named record field.
    #[must_use]
    pub fn named(name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            name: Some(name.into()),
            shape,
            omissible: false,
        }
    }

    /// Creates an unnamed positional field.
    #[must_use]
    pub fn positional(shape: TypeShape) -> Self {
        Self {
            name: None,
            shape,
            omissible: false,
        }
    }

    /// Marks this field as omissible.
    #[must_use]
    pub fn omissible(mut self) -> Self {
        self.omissible = true;
        self
    }
}

/// An ordered sequence of fields: a plain record or tuple constructor body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// The fields, in declaration order.
    pub fields: Vec<Field>,
}

impl Product {
    /// Creates a product from its fields.
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Creates a product with no fields (a nullary constructor body).
    #[must_use]
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Returns true when this product carries no fields.
    #[must_use]
    pub fn is_nullary(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One tagged alternative of a [`TypeShape::Sum`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    /// The constructor tag, unique within its sum.
    pub tag: String,
    /// The constructor's payload.
    pub fields: Product,
}

impl Constructor {
    /// Creates a constructor with the given payload.
    #[must_use]
    pub fn new(tag: impl Into<String>, fields: Product) -> Self {
        Self {
            tag: tag.into(),
            fields,
        }
    }

    /// Creates a constructor carrying no fields (an enum-like case).
    #[must_use]
    pub fn nullary(tag: impl Into<String>) -> Self {
        Self::new(tag, Product::empty())
    }
}

/// An abstract description of a data type's structure.
///
/// The derivation engine walks this tree recursively; termination requires
/// that the producer never builds a cyclic shape without interposing a
/// [`TypeShape::Ref`] at the recursion point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    /// A single-constructor record or tuple.
    Product(Product),
    /// A non-empty sum of tagged constructors.
    Sum(Vec<Constructor>),
    /// An opaque leaf type.
    Primitive(PrimitiveKind),
    /// A homogeneous sequence of some element shape.
    Array(Box<TypeShape>),
    /// A reference to a named schema registered elsewhere, used to break
    /// recursion.
    Ref(String),
}

impl TypeShape {
    /// Creates a record shape from named fields.
    #[must_use]
    pub fn record(fields: Vec<Field>) -> Self {
        Self::Product(Product::new(fields))
    }

    /// Creates a sum shape from its constructors.
    #[must_use]
    pub fn sum(constructors: Vec<Constructor>) -> Self {
        Self::Sum(constructors)
    }

    /// The string primitive shape.
    #[must_use]
    pub fn string() -> Self {
        Self::Primitive(PrimitiveKind::String)
    }

    /// The integer primitive shape.
    #[must_use]
    pub fn integer() -> Self {
        Self::Primitive(PrimitiveKind::Integer)
    }

    /// The number primitive shape.
    #[must_use]
    pub fn number() -> Self {
        Self::Primitive(PrimitiveKind::Number)
    }

    /// The boolean primitive shape.
    #[must_use]
    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveKind::Boolean)
    }

    /// An array shape over the given element shape.
    #[must_use]
    pub fn array(element: TypeShape) -> Self {
        Self::Array(Box::new(element))
    }

    /// A reference shape to a named schema.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Ref(name.into())
    }
}
