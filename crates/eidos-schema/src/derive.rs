//! The derivation engine.
//!
//! A pure, bounded walk over a [`TypeShape`] tree: identical inputs always
//! produce structurally identical output. The walk only reads the shape and
//! the options and allocates fresh [`Schema`] values, so concurrent
//! derivations over one shared [`SchemaOptions`] need no locking.
//!
//! Well-formedness of the input is the caller's concern: a cyclic shape
//! without an interposed [`TypeShape::Ref`] does not terminate, and field
//! names or constructor tags that collide after modification silently
//! overwrite earlier entries (later wins).

use indexmap::IndexMap;

use eidos_core::{Constructor, HasShape, Product, SumEncoding, TypeShape};

use crate::options::SchemaOptions;
use crate::schema::Schema;

/// The result of deriving a type: its schema and the name it registers
/// under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedSchema {
    /// The registered name, produced by the datatype name modifier. With
    /// the default options this satisfies `^[A-Za-z0-9._-]+$` for any
    /// non-empty input name.
    pub name: String,
    /// The derived schema.
    pub schema: Schema,
}

/// Derives a schema and registered name from a type-shape description.
///
/// # Example
///
/// ```
/// use eidos_core::{Field, TypeShape};
/// use eidos_schema::{derive, Schema, SchemaOptions};
///
/// let shape = TypeShape::record(vec![Field::named("code", TypeShape::integer())]);
/// let derived = derive(&shape, "Status", &SchemaOptions::default());
///
/// assert_eq!(derived.name, "Status");
/// assert!(matches!(derived.schema, Schema::Object { .. }));
/// ```
#[must_use]
pub fn derive(shape: &TypeShape, type_name: &str, options: &SchemaOptions) -> DerivedSchema {
    DerivedSchema {
        name: (options.datatype_name_modifier)(type_name),
        schema: schema_for(shape, options),
    }
}

/// Derives a schema for a type implementing [`HasShape`].
#[must_use]
pub fn derive_for<T: HasShape>(options: &SchemaOptions) -> DerivedSchema {
    derive(&T::shape(), T::type_name(), options)
}

fn schema_for(shape: &TypeShape, options: &SchemaOptions) -> Schema {
    match shape {
        // Leaves pass through; options do not apply to primitives.
        TypeShape::Primitive(kind) => Schema::Primitive(*kind),
        TypeShape::Array(element) => Schema::array(schema_for(element, options)),
        TypeShape::Ref(name) => Schema::reference(name.clone()),
        TypeShape::Product(product) => product_schema(product, options),
        TypeShape::Sum(constructors) => sum_schema(constructors, options),
    }
}

/// Derives a single-constructor body: a plain record or tuple.
fn product_schema(product: &Product, options: &SchemaOptions) -> Schema {
    if options.unwrap_unary_records && product.fields.len() == 1 {
        return schema_for(&product.fields[0].shape, options);
    }

    let mut properties = IndexMap::with_capacity(product.fields.len());
    let mut required = Vec::with_capacity(product.fields.len());

    for (position, field) in product.fields.iter().enumerate() {
        let key = field.name.as_deref().map_or_else(
            || position.to_string(),
            |name| (options.field_label_modifier)(name),
        );
        let mut schema = schema_for(&field.shape, options);

        if field.omissible {
            if options.set_nullable_on_omissable {
                schema = schema.nullable();
                required.push(key.clone());
            }
        } else {
            required.push(key.clone());
        }
        properties.insert(key, schema);
    }

    Schema::Object {
        properties,
        required,
    }
}

fn sum_schema(constructors: &[Constructor], options: &SchemaOptions) -> Schema {
    let all_nullary = constructors.iter().all(|c| c.fields.is_nullary());
    if all_nullary && options.all_nullary_to_string_tag {
        let values = constructors
            .iter()
            .map(|c| (options.constructor_tag_modifier)(&c.tag));
        return Schema::enumeration(values);
    }

    let mut alternatives: Vec<Schema> = constructors
        .iter()
        .map(|c| constructor_schema(c, options))
        .collect();

    // A singleton disjunction collapses to its only alternative.
    if alternatives.len() == 1 {
        alternatives.remove(0)
    } else {
        Schema::one_of(alternatives)
    }
}

/// Derives one constructor and applies the configured sum encoding.
fn constructor_schema(constructor: &Constructor, options: &SchemaOptions) -> Schema {
    let tag = (options.constructor_tag_modifier)(&constructor.tag);
    let payload = product_schema(&constructor.fields, options);

    match &options.sum_encoding {
        SumEncoding::TaggedObject {
            tag_key,
            contents_key,
        } => match payload {
            // Flat tagged object: the discriminator merges into the
            // constructor's own properties, listed first.
            Schema::Object {
                properties,
                required,
            } => {
                let mut merged = IndexMap::with_capacity(properties.len() + 1);
                merged.insert(tag_key.clone(), Schema::enumeration(vec![tag]));
                merged.extend(properties);

                let mut merged_required = Vec::with_capacity(required.len() + 1);
                merged_required.push(tag_key.clone());
                merged_required.extend(required);

                Schema::Object {
                    properties: merged,
                    required: merged_required,
                }
            }
            // Unwrapped payloads (primitives, arrays) cannot carry the
            // discriminator themselves; wrap both in a fresh object.
            other => Schema::Object {
                properties: IndexMap::from([
                    (tag_key.clone(), Schema::enumeration(vec![tag])),
                    (contents_key.clone(), other),
                ]),
                required: vec![tag_key.clone(), contents_key.clone()],
            },
        },
        SumEncoding::UntaggedValue => payload,
        SumEncoding::ObjectWithSingleField => Schema::Object {
            properties: IndexMap::from([(tag.clone(), payload)]),
            required: vec![tag],
        },
        SumEncoding::TwoElemArray => Schema::Tuple {
            items: vec![Schema::enumeration(vec![tag]), payload],
        },
    }
}
