//! Projection Schemas
//!
//! A [`Schema`] is the ordered list of fields a projection can emit,
//! plus an optional transform per field. Declaration order is load
//! bearing: projected output carries keys in exactly the order fields
//! were declared.

pub mod field;

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

pub use self::field::{ExtractFn, Field, FieldKind};

/// Transform signature: receives the whole source value and the field's
/// extracted value, returns the value to emit.
pub type TransformFn = dyn Fn(&Value, Value) -> Value + Send + Sync;

/// Ordered field declarations with per-field transforms.
///
/// # Examples
///
/// ```rust
/// use sylect_engine::{Field, Schema};
///
/// let schema = Schema::new()
///     .field(Field::new("id"))
///     .field(Field::new("name"))
///     .transform("name", |_source, value| value);
/// assert_eq!(schema.fields().len(), 2);
/// ```
#[derive(Default)]
pub struct Schema {
    fields: Vec<Field>,
    transforms: HashMap<String, Box<TransformFn>>,
}

impl Schema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Fields project in the order they were appended.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Register a transform for the field named `name`.
    ///
    /// The transform runs after extraction and before the value is
    /// recorded, for included fields of every kind. Registering a second
    /// transform for the same name replaces the first.
    #[must_use]
    pub fn transform<F>(mut self, name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&Value, Value) -> Value + Send + Sync + 'static,
    {
        self.transforms.insert(name.into(), Box::new(transform));
        self
    }

    /// Declared fields in declaration order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a declared field by internal name.
    #[must_use]
    pub fn field_named(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// True when no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn transform_for(&self, name: &str) -> Option<&TransformFn> {
        self.transforms.get(name).map(Box::as_ref)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut transform_names: Vec<&str> =
            self.transforms.keys().map(String::as_str).collect();
        transform_names.sort_unstable();
        f.debug_struct("Schema")
            .field("fields", &self.fields)
            .field("transforms", &transform_names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_keep_declaration_order() {
        let schema = Schema::new()
            .field(Field::new("third"))
            .field(Field::new("first"))
            .field(Field::new("second"));
        let names: Vec<&str> = schema.fields().iter().map(Field::name).collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[test]
    fn field_named_finds_declared_fields() {
        let schema = Schema::new().field(Field::new("id")).field(Field::new("name"));
        assert!(schema.field_named("name").is_some());
        assert!(schema.field_named("missing").is_none());
    }

    #[test]
    fn transform_for_resolves_by_internal_name() {
        let schema = Schema::new()
            .field(Field::new("name"))
            .transform("name", |_, value| json!(format!("{}!", value.as_str().unwrap_or(""))));

        let transform = schema.transform_for("name").expect("registered transform");
        assert_eq!(transform(&Value::Null, json!("ada")), json!("ada!"));
        assert!(schema.transform_for("other").is_none());
    }

    #[test]
    fn later_transform_replaces_earlier() {
        let schema = Schema::new()
            .transform("n", |_, _| json!(1))
            .transform("n", |_, _| json!(2));
        let transform = schema.transform_for("n").expect("registered transform");
        assert_eq!(transform(&Value::Null, Value::Null), json!(2));
    }

    #[test]
    fn debug_lists_fields_and_transform_names() {
        let schema = Schema::new()
            .field(Field::new("id"))
            .transform("id", |_, value| value);
        let rendered = format!("{schema:?}");
        assert!(rendered.contains("id"));
    }
}
