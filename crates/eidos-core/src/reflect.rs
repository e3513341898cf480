//! Manual reflection seam.
//!
//! [`HasShape`] is implemented per type, by hand or by a derive-style code
//! generator, and produces the [`TypeShape`] the derivation engine consumes.
//! Keeping this an explicit trait (instead of runtime reflection) keeps
//! derivation deterministic and testable with handwritten shape fixtures.
//!
//! Implementations for recursive types must break the cycle by returning a
//! [`TypeShape::Ref`] at the recursion point; the engine does not detect
//! cyclic shapes.

use crate::shape::TypeShape;

/// A type with a describable shape.
///
/// # Example
///
/// ```
/// use eidos_core::{Field, HasShape, TypeShape};
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl HasShape for User {
///     fn type_name() -> &'static str {
///         "User"
///     }
///
///     fn shape() -> TypeShape {
///         TypeShape::record(vec![
///             Field::named("name", String::shape()),
///             Field::named("age", u32::shape()),
///         ])
///     }
/// }
///
/// assert_eq!(User::type_name(), "User");
/// ```
pub trait HasShape {
    /// The type's name as registered in a schema document.
    fn type_name() -> &'static str;

    /// The type's structural description.
    fn shape() -> TypeShape;
}

macro_rules! impl_primitive_shape {
    ($($ty:ty => $name:literal, $shape:expr;)*) => {
        $(
            impl HasShape for $ty {
                fn type_name() -> &'static str {
                    $name
                }

                fn shape() -> TypeShape {
                    $shape
                }
            }
        )*
    };
}

impl_primitive_shape! {
    String => "String", TypeShape::string();
    bool => "Boolean", TypeShape::boolean();
    i8 => "Int8", TypeShape::integer();
    i16 => "Int16", TypeShape::integer();
    i32 => "Int32", TypeShape::integer();
    i64 => "Int64", TypeShape::integer();
    u8 => "UInt8", TypeShape::integer();
    u16 => "UInt16", TypeShape::integer();
    u32 => "UInt32", TypeShape::integer();
    u64 => "UInt64", TypeShape::integer();
    f32 => "Float", TypeShape::number();
    f64 => "Double", TypeShape::number();
}

impl<T: HasShape> HasShape for Vec<T> {
    fn type_name() -> &'static str {
        T::type_name()
    }

    fn shape() -> TypeShape {
        TypeShape::array(T::shape())
    }
}

impl<T: HasShape> HasShape for Box<T> {
    fn type_name() -> &'static str {
        T::type_name()
    }

    fn shape() -> TypeShape {
        T::shape()
    }
}
