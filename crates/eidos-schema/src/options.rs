//! The options model: every knob that changes derivation output.

use std::fmt;
use std::sync::Arc;

use eidos_core::{identity_modifier, EncodingOptions, NameModifier, SumEncoding};

use crate::name::sanitize;

/// Configuration of schema derivation.
///
/// One value is typically constructed once per process and shared by
/// reference across every derivation call; all fields are read-only after
/// construction, so no locking is needed for concurrent use.
///
/// The canonical default leaves field labels and constructor tags untouched,
/// sanitizes datatype names via [`sanitize`], encodes all-nullary sums as
/// string enumerations, keeps unary records wrapped, uses the default
/// [`SumEncoding`], and drops omissible fields from `required` rather than
/// marking them nullable.
#[derive(Clone)]
pub struct SchemaOptions {
    /// Rewrites each record field label before use as a property key.
    pub field_label_modifier: NameModifier,
    /// Rewrites each constructor tag before use as a discriminator,
    /// property key, or enumeration value.
    pub constructor_tag_modifier: NameModifier,
    /// Rewrites the datatype's own name before use as the registered schema
    /// name.
    pub datatype_name_modifier: NameModifier,
    /// Derive a sum whose constructors are all nullary as a string
    /// enumeration of tags.
    pub all_nullary_to_string_tag: bool,
    /// Drop the wrapper of a single-field product and describe the field's
    /// value directly.
    pub unwrap_unary_records: bool,
    /// Layout for multi-constructor sums.
    pub sum_encoding: SumEncoding,
    /// Keep omissible fields in `required` but mark their schema nullable,
    /// instead of excluding them from `required`.
    pub set_nullable_on_omissable: bool,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            field_label_modifier: identity_modifier(),
            constructor_tag_modifier: identity_modifier(),
            datatype_name_modifier: Arc::new(sanitize),
            all_nullary_to_string_tag: true,
            unwrap_unary_records: false,
            sum_encoding: SumEncoding::default(),
            set_nullable_on_omissable: false,
        }
    }
}

impl SchemaOptions {
    /// Imports an equivalent configuration from generic JSON-encoding
    /// options.
    ///
    /// The label and tag modifiers, nullary-sum handling, unary-record
    /// unwrapping, and sum encoding are copied verbatim;
    /// `set_nullable_on_omissable` is taken from the encoder's
    /// `omit_nothing_fields` flag. The datatype name modifier keeps its
    /// default. Deriving a schema from the same options that drive the
    /// type's JSON encoding keeps the two representations consistent; tuning
    /// them independently is a correctness hazard this adapter removes.
    #[must_use]
    pub fn from_encoding_options(encoding: &EncodingOptions) -> Self {
        Self {
            field_label_modifier: Arc::clone(&encoding.field_label_modifier),
            constructor_tag_modifier: Arc::clone(&encoding.constructor_tag_modifier),
            all_nullary_to_string_tag: encoding.all_nullary_to_string_tag,
            unwrap_unary_records: encoding.unwrap_unary_records,
            sum_encoding: encoding.sum_encoding.clone(),
            set_nullable_on_omissable: encoding.omit_nothing_fields,
            ..Self::default()
        }
    }

    /// Sets the field label modifier.
    #[must_use]
    pub fn field_label_modifier<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.field_label_modifier = Arc::new(f);
        self
    }

    /// Sets the constructor tag modifier.
    #[must_use]
    pub fn constructor_tag_modifier<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.constructor_tag_modifier = Arc::new(f);
        self
    }

    /// Sets the datatype name modifier.
    #[must_use]
    pub fn datatype_name_modifier<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.datatype_name_modifier = Arc::new(f);
        self
    }

    /// Sets whether all-nullary sums derive as string enumerations.
    #[must_use]
    pub fn all_nullary_to_string_tag(mut self, enabled: bool) -> Self {
        self.all_nullary_to_string_tag = enabled;
        self
    }

    /// Sets whether single-field products are unwrapped.
    #[must_use]
    pub fn unwrap_unary_records(mut self, enabled: bool) -> Self {
        self.unwrap_unary_records = enabled;
        self
    }

    /// Sets the sum encoding strategy.
    #[must_use]
    pub fn sum_encoding(mut self, encoding: SumEncoding) -> Self {
        self.sum_encoding = encoding;
        self
    }

    /// Sets whether omissible fields stay required with a nullable schema.
    #[must_use]
    pub fn set_nullable_on_omissable(mut self, enabled: bool) -> Self {
        self.set_nullable_on_omissable = enabled;
        self
    }
}

impl fmt::Debug for SchemaOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaOptions")
            .field("field_label_modifier", &"<fn>")
            .field("constructor_tag_modifier", &"<fn>")
            .field("datatype_name_modifier", &"<fn>")
            .field("all_nullary_to_string_tag", &self.all_nullary_to_string_tag)
            .field("unwrap_unary_records", &self.unwrap_unary_records)
            .field("sum_encoding", &self.sum_encoding)
            .field("set_nullable_on_omissable", &self.set_nullable_on_omissable)
            .finish()
    }
}
