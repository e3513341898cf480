//! # Eidos Schema
//!
//! Generic OpenAPI schema derivation for the Eidos framework.
//!
//! This crate provides:
//! - **The options model** ([`SchemaOptions`]) — every knob that changes
//!   derivation output, with canonical defaults and an adapter from the
//!   generic JSON [`EncodingOptions`](eidos_core::EncodingOptions)
//! - **The derivation engine** ([`derive`], [`derive_for`]) — a pure
//!   transform from a [`TypeShape`](eidos_core::TypeShape) to a [`Schema`]
//!   plus a sanitized registered name
//! - **The name sanitizer** ([`sanitize`]) — maps arbitrary strings into the
//!   `^[A-Za-z0-9._-]+$` key space required by schema registries
//! - **A schema registry** ([`SchemaRegistry`]) — the components-style
//!   `name -> Schema` mapping that enforces the naming grammar at its
//!   boundary
//!
//! ## Quick Start
//!
//! ```
//! use eidos_core::{Constructor, TypeShape};
//! use eidos_schema::{derive, Schema, SchemaOptions};
//!
//! let color = TypeShape::sum(vec![
//!     Constructor::nullary("Red"),
//!     Constructor::nullary("Green"),
//!     Constructor::nullary("Blue"),
//! ]);
//!
//! let derived = derive(&color, "Color", &SchemaOptions::default());
//! assert_eq!(derived.name, "Color");
//! assert_eq!(
//!     derived.schema,
//!     Schema::enumeration(vec!["Red", "Green", "Blue"]),
//! );
//! ```
//!
//! Derivation is a deterministic pure function: no I/O, no hidden state, no
//! locking. A single [`SchemaOptions`] may serve concurrent derivations on
//! separate threads.

mod derive;
mod error;
mod name;
mod options;
mod registry;
mod schema;

pub use derive::{derive, derive_for, DerivedSchema};
pub use error::{SchemaError, SchemaResult};
pub use name::sanitize;
pub use options::SchemaOptions;
pub use registry::SchemaRegistry;
pub use schema::Schema;
