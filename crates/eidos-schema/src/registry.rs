//! The components-style schema registry.
//!
//! Derivation hands its output to a surrounding document model that stores
//! `name -> Schema` in a definitions mapping and embeds references at use
//! sites. [`SchemaRegistry`] is that mapping, and it is the layer that
//! enforces the registry naming grammar: derivation itself never rejects a
//! name, but registration of a name outside `^[A-Za-z0-9._-]+$` (including
//! the empty name) fails here.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

use crate::derive::DerivedSchema;
use crate::error::{SchemaError, SchemaResult};
use crate::schema::Schema;

/// The naming grammar for registry keys.
const NAME_GRAMMAR: &str = "^[A-Za-z0-9._-]+$";

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(NAME_GRAMMAR).expect("valid regex"))
}

/// An ordered mapping of registered names to schemas.
///
/// # Example
///
/// ```
/// use eidos_core::{Field, TypeShape};
/// use eidos_schema::{derive, SchemaOptions, SchemaRegistry};
///
/// let shape = TypeShape::record(vec![Field::named("name", TypeShape::string())]);
/// let derived = derive(&shape, "User", &SchemaOptions::default());
///
/// let mut registry = SchemaRegistry::new();
/// registry.register(derived)?;
/// assert!(registry.get("User").is_some());
/// # Ok::<(), eidos_schema::SchemaError>(())
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, Schema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a derived schema under its registered name.
    ///
    /// Re-registering a name overwrites the previous entry. Names outside
    /// the registry grammar are rejected; this is where an empty modified
    /// datatype name surfaces as an error.
    pub fn register(&mut self, derived: DerivedSchema) -> SchemaResult<()> {
        if !name_pattern().is_match(&derived.name) {
            return Err(SchemaError::InvalidName { name: derived.name });
        }
        tracing::debug!(name = %derived.name, "registering schema");
        self.schemas.insert(derived.name, derived.schema);
        Ok(())
    }

    /// Returns the schema registered under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Returns a reference schema pointing at `name`.
    #[must_use]
    pub fn reference(&self, name: &str) -> Schema {
        Schema::reference(name)
    }

    /// Returns the number of registered schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true when no schemas are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterates over registered `(name, schema)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.schemas.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    /// Renders the registry as the `components.schemas` JSON value.
    pub fn to_components(&self) -> SchemaResult<serde_json::Value> {
        Ok(serde_json::json!({ "schemas": serde_json::to_value(&self.schemas)? }))
    }

    /// Renders the registry as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SchemaResult<String> {
        serde_json::to_string_pretty(&self.schemas).map_err(SchemaError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive;
    use crate::options::SchemaOptions;
    use eidos_core::{Field, TypeShape};

    fn user_derived() -> DerivedSchema {
        let shape = TypeShape::record(vec![Field::named("name", TypeShape::string())]);
        derive(&shape, "User", &SchemaOptions::default())
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = SchemaRegistry::new();
        registry.register(user_derived()).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.get("User").is_some());
        assert!(registry.get("Missing").is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = SchemaRegistry::new();
        let derived = derive(&TypeShape::string(), "", &SchemaOptions::default());
        assert_eq!(derived.name, "");

        let err = registry.register(derived).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidName { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unsanitized_name_rejected() {
        // A custom name modifier can produce names outside the grammar;
        // the registry is the layer that catches them.
        let options = SchemaOptions::default().datatype_name_modifier(str::to_owned);
        let derived = derive(&TypeShape::string(), "a/b", &options);

        let mut registry = SchemaRegistry::new();
        assert!(matches!(
            registry.register(derived),
            Err(SchemaError::InvalidName { name }) if name == "a/b"
        ));
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut registry = SchemaRegistry::new();
        registry.register(user_derived()).unwrap();
        registry
            .register(DerivedSchema {
                name: "User".to_string(),
                schema: Schema::string(),
            })
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("User"), Some(&Schema::string()));
    }

    #[test]
    fn test_components_rendering() {
        let mut registry = SchemaRegistry::new();
        registry.register(user_derived()).unwrap();

        let components = registry.to_components().unwrap();
        assert!(components["schemas"]["User"]["properties"]["name"].is_object());
    }

    #[test]
    fn test_reference() {
        let registry = SchemaRegistry::new();
        assert_eq!(registry.reference("User"), Schema::reference("User"));
    }

    #[test]
    fn test_iteration_order() {
        let mut registry = SchemaRegistry::new();
        for name in ["Zeta", "Alpha", "Mid"] {
            registry
                .register(DerivedSchema {
                    name: name.to_string(),
                    schema: Schema::string(),
                })
                .unwrap();
        }

        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }
}
