//! Field Descriptors
//!
//! A [`Field`] describes one entry in a schema: where its value comes
//! from, what key it lands under, and whether it participates in reads,
//! writes, or both.

use std::fmt;

use serde_json::Value;

use super::Schema;
use crate::error::ProjectResult;

/// Extractor signature for computed fields: reads the whole source value
/// and produces the field value.
pub type ExtractFn = dyn Fn(&Value) -> ProjectResult<Value> + Send + Sync;

/// How a field obtains its value during projection.
pub enum FieldKind {
    /// Read the source attribute directly; missing attributes and
    /// non-object sources read as `Null`
    Attribute,
    /// Derive the value from the whole source via an extractor
    Computed(Box<ExtractFn>),
    /// Project the attribute through a nested schema
    Nested {
        /// Schema applied to the nested value
        schema: Schema,
        /// Treat the attribute as an array and project each element
        many: bool,
    },
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Attribute => f.write_str("Attribute"),
            FieldKind::Computed(_) => f.write_str("Computed"),
            FieldKind::Nested { schema, many } => f
                .debug_struct("Nested")
                .field("schema", schema)
                .field("many", many)
                .finish(),
        }
    }
}

/// One declared schema entry.
///
/// The internal `name` is what selection paths and transforms address.
/// Output key and source attribute both default to the name and can be
/// overridden independently, so an internal `user_name` can read from
/// `username` and land under `displayName`.
#[derive(Debug)]
pub struct Field {
    name: String,
    key: Option<String>,
    source: Option<String>,
    read_only: bool,
    write_only: bool,
    kind: FieldKind,
}

impl Field {
    fn with_kind(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            key: None,
            source: None,
            read_only: false,
            write_only: false,
            kind,
        }
    }

    /// Plain attribute field: projects the source attribute of the same
    /// name (or the `source` override) verbatim.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Attribute)
    }

    /// Computed field: the extractor sees the whole source value and
    /// returns the field value, or an error that aborts the projection.
    #[must_use]
    pub fn computed<F>(name: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&Value) -> ProjectResult<Value> + Send + Sync + 'static,
    {
        Self::with_kind(name, FieldKind::Computed(Box::new(extract)))
    }

    /// Nested field: the attribute is projected through `schema` under
    /// the selection scope derived for this field.
    #[must_use]
    pub fn nested(name: impl Into<String>, schema: Schema) -> Self {
        Self::with_kind(name, FieldKind::Nested { schema, many: false })
    }

    /// Nested collection field: each element of the attribute array is
    /// projected through `schema`.
    #[must_use]
    pub fn nested_many(name: impl Into<String>, schema: Schema) -> Self {
        Self::with_kind(name, FieldKind::Nested { schema, many: true })
    }

    /// Override the key this field lands under in the output.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Override the source attribute this field reads from.
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Mark the field read-only. Read-only fields are skipped when the
    /// source is `Null`, which keeps schema introspection over an absent
    /// source from fabricating values for them.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Mark the field write-only. Write-only fields are still visited and
    /// recorded in field metadata but never appear in projected data.
    #[must_use]
    pub fn write_only(mut self) -> Self {
        self.write_only = true;
        self
    }

    /// Internal field name, the one selection paths address.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key the field lands under in projected output.
    #[inline]
    #[must_use]
    pub fn output_key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.name)
    }

    /// Source attribute the field reads from.
    #[inline]
    #[must_use]
    pub fn source_attr(&self) -> &str {
        self.source.as_deref().unwrap_or(&self.name)
    }

    /// True for fields marked [`Field::read_only`].
    #[inline]
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// True for fields marked [`Field::write_only`].
    #[inline]
    #[must_use]
    pub fn is_write_only(&self) -> bool {
        self.write_only
    }

    /// How the field obtains its value.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }
}
