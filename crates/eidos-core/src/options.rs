//! Generic JSON-encoding options.
//!
//! [`EncodingOptions`] mirrors the configuration surface of a
//! general-purpose JSON encoder: how field labels and constructor tags are
//! rewritten, how sums are laid out on the wire, and whether absent optional
//! fields are omitted. Schema derivation imports this record (see the
//! adapter in `eidos-schema`) so that a type's schema and its JSON encoding
//! are always tuned by the same knobs.
//!
//! Modifier fields are first-class functions stored behind [`Arc`], so one
//! options value is immutable and freely shareable across threads.

use std::fmt;
use std::sync::Arc;

/// A string-rewriting function applied to field labels, constructor tags, or
/// datatype names.
pub type NameModifier = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Returns the identity modifier.
#[must_use]
pub fn identity_modifier() -> NameModifier {
    Arc::new(str::to_owned)
}

/// Layout strategy for a multi-constructor sum with non-nullary
/// constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SumEncoding {
    /// Encode as a single object carrying a discriminator property.
    ///
    /// Object-shaped constructors get the discriminator merged into their
    /// own properties; non-object constructors are wrapped in a two-property
    /// object keyed by `tag_key` and `contents_key`.
    TaggedObject {
        /// Property key holding the constructor tag.
        tag_key: String,
        /// Property key holding the constructor payload, when the payload is
        /// not itself an object.
        contents_key: String,
    },
    /// Encode the constructor payload with no discriminator; consumers must
    /// disambiguate structurally.
    UntaggedValue,
    /// Encode as an object with exactly one property, keyed by the
    /// constructor tag.
    ObjectWithSingleField,
    /// Encode as a fixed two-element array: tag first, payload second.
    TwoElemArray,
}

impl Default for SumEncoding {
    fn default() -> Self {
        Self::TaggedObject {
            tag_key: "tag".to_string(),
            contents_key: "contents".to_string(),
        }
    }
}

/// Configuration of a generic JSON encoder.
///
/// The canonical default leaves all names untouched, encodes all-nullary
/// sums as string enumerations, keeps unary records wrapped, uses the
/// default [`SumEncoding`], and encodes absent optional fields by omission.
#[derive(Clone)]
pub struct EncodingOptions {
    /// Rewrites each record field label before use as a JSON object key.
    pub field_label_modifier: NameModifier,
    /// Rewrites each constructor tag before use as a discriminator value.
    pub constructor_tag_modifier: NameModifier,
    /// Encode a sum whose constructors are all nullary as a plain string.
    pub all_nullary_to_string_tag: bool,
    /// Encode an absent optional field as an explicit null instead of
    /// omitting it.
    pub omit_nothing_fields: bool,
    /// Drop the wrapper of a single-field record and encode the field's
    /// value directly.
    pub unwrap_unary_records: bool,
    /// Layout for multi-constructor sums.
    pub sum_encoding: SumEncoding,
}

impl Default for EncodingOptions {
    fn default() -> Self {
        Self {
            field_label_modifier: identity_modifier(),
            constructor_tag_modifier: identity_modifier(),
            all_nullary_to_string_tag: true,
            omit_nothing_fields: false,
            unwrap_unary_records: false,
            sum_encoding: SumEncoding::default(),
        }
    }
}

impl EncodingOptions {
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

    /// Sets whether all-nullary sums encode as plain strings.
    #[must_use]
    pub fn all_nullary_to_string_tag(mut self, enabled: bool) -> Self {
        self.all_nullary_to_string_tag = enabled;
        self
    }

    /// Sets whether absent optional fields encode as explicit nulls.
    #[must_use]
    pub fn omit_nothing_fields(mut self, enabled: bool) -> Self {
        self.omit_nothing_fields = enabled;
        self
    }

    /// Sets whether single-field records are unwrapped.
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
}

impl fmt::Debug for EncodingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodingOptions")
            .field("field_label_modifier", &"<fn>")
            .field("constructor_tag_modifier", &"<fn>")
            .field("all_nullary_to_string_tag", &self.all_nullary_to_string_tag)
            .field("omit_nothing_fields", &self.omit_nothing_fields)
            .field("unwrap_unary_records", &self.unwrap_unary_records)
            .field("sum_encoding", &self.sum_encoding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sum_encoding() {
        let encoding = SumEncoding::default();
        assert_eq!(
            encoding,
            SumEncoding::TaggedObject {
                tag_key: "tag".to_string(),
                contents_key: "contents".to_string(),
            }
        );
    }

    #[test]
    fn test_default_options() {
        let options = EncodingOptions::default();
        assert!(options.all_nullary_to_string_tag);
        assert!(!options.omit_nothing_fields);
        assert!(!options.unwrap_unary_records);
        assert_eq!((options.field_label_modifier)("userId"), "userId");
        assert_eq!((options.constructor_tag_modifier)("Red"), "Red");
    }

    #[test]
    fn test_builder_modifiers() {
        let options = EncodingOptions::default()
            .field_label_modifier(str::to_uppercase)
            .unwrap_unary_records(true)
            .sum_encoding(SumEncoding::UntaggedValue);

        assert_eq!((options.field_label_modifier)("name"), "NAME");
        assert!(options.unwrap_unary_records);
        assert_eq!(options.sum_encoding, SumEncoding::UntaggedValue);
    }

    #[test]
    fn test_options_shareable_across_threads() {
        let options = EncodingOptions::default().field_label_modifier(str::to_uppercase);
        let cloned = options.clone();

        let handle = std::thread::spawn(move || (cloned.field_label_modifier)("shared"));
        assert_eq!(handle.join().unwrap(), "SHARED");
        assert_eq!((options.field_label_modifier)("shared"), "SHARED");
    }
}
