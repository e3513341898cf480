//! # Eidos Core
//!
//! Core types for the Eidos schema derivation engine.
//!
//! This crate defines:
//! - **The shape algebra** ([`TypeShape`], [`Product`], [`Constructor`],
//!   [`Field`]) — an abstract description of a data type as a product of
//!   fields or a sum of tagged constructors, independent of any runtime
//!   reflection facility.
//! - **Generic encoding options** ([`EncodingOptions`], [`SumEncoding`]) —
//!   the knobs a general-purpose JSON encoder exposes, which schema
//!   derivation must stay representationally consistent with.
//! - **The reflection seam** ([`HasShape`]) — a trait implemented per type
//!   (by hand or by a code generator) that produces a [`TypeShape`], so the
//!   derivation engine never inspects language-native type metadata.
//!
//! ## Example
//!
//! ```
//! use eidos_core::{Field, Product, TypeShape};
//!
//! let user = TypeShape::record(vec![
//!     Field::named("name", TypeShape::string()),
//!     Field::named("email", TypeShape::string()).omissible(),
//! ]);
//!
//! assert!(matches!(user, TypeShape::Product(_)));
//! ```

mod options;
mod reflect;
mod shape;

pub use options::{identity_modifier, EncodingOptions, NameModifier, SumEncoding};
pub use reflect::HasShape;
pub use shape::{Constructor, Field, PrimitiveKind, Product, TypeShape};
