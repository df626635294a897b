//! Projection Output
//!
//! A projection yields two parallel views of the same pass: the ordered
//! data map that callers serialize, and per-field metadata covering every
//! field the pass visited, including write-only fields the data map
//! omits.

use serde::Serialize;
use serde_json::{Map, Value};

/// Descriptor-plus-value record for one visited field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMeta {
    /// Internal field name
    pub name: String,
    /// Key the field maps to in projected data
    pub key: String,
    /// Field was declared read-only
    pub read_only: bool,
    /// Field was declared write-only and is absent from projected data
    pub write_only: bool,
    /// Value the field projected to, after any transform
    pub value: Value,
}

/// Output of projecting one source value through a schema.
///
/// `data` holds keys in field declaration order. `fields` records one
/// [`FieldMeta`] per visited field in the same order; fields skipped by
/// the selection rules appear in neither view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    data: Map<String, Value>,
    fields: Vec<FieldMeta>,
}

impl Projection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a visited field: metadata always, data unless write-only.
    pub(crate) fn record(&mut self, meta: FieldMeta) {
        if !meta.write_only {
            self.data.insert(meta.key.clone(), meta.value.clone());
        }
        self.fields.push(meta);
    }

    /// Projected data in field declaration order.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Consume the projection, keeping only the data map.
    #[inline]
    #[must_use]
    pub fn into_data(self) -> Map<String, Value> {
        self.data
    }

    /// Consume the projection into a JSON object value.
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.data)
    }

    /// Metadata for every visited field, in visit order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldMeta] {
        &self.fields
    }

    /// Metadata for the field mapped to `key` in the output.
    #[must_use]
    pub fn meta(&self, key: &str) -> Option<&FieldMeta> {
        self.fields.iter().find(|meta| meta.key == key)
    }

    /// Data keys in output order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// True when no field projected into the data map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
