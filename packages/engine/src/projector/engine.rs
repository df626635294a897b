//! Selective Projector
//!
//! Walks a schema's fields against a source value under a selection
//! scope, recursing into nested fields with the scope narrowed to their
//! subtree. Three rules decide whether a field is visited at all:
//!
//! 1. read-only fields are skipped when the source is `Null`
//! 2. a non-empty select tree skips every field it does not name
//! 3. an exclude tree skips every field it names with nothing beneath
//!
//! Rule 3 runs after rule 2, so a field both selected and excluded at the
//! same level stays out.

use serde_json::Value;

use super::output::{FieldMeta, Projection};
use crate::context::{SelectionContext, SelectionScope};
use crate::error::ProjectResult;
use crate::schema::{Field, FieldKind, Schema};

/// Projects source values through one schema.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use sylect_engine::{Field, Projector, Schema, SelectionContext};
///
/// let schema = Schema::new()
///     .field(Field::new("id"))
///     .field(Field::new("name"))
///     .field(Field::new("email"));
/// let context = SelectionContext::new("id,name", "");
///
/// let user = json!({"id": 7, "name": "ada", "email": "ada@example.com"});
/// let projection = Projector::new(&schema)
///     .project(&user, &context)
///     .expect("projection succeeds");
/// assert_eq!(projection.into_value(), json!({"id": 7, "name": "ada"}));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Projector<'a> {
    schema: &'a Schema,
}

impl<'a> Projector<'a> {
    /// Projector over `schema`.
    #[inline]
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Project one source value under `context`.
    ///
    /// # Errors
    ///
    /// Propagates the first computed-field extraction error unmodified;
    /// structural mismatches in the source never error.
    pub fn project(
        &self,
        source: &Value,
        context: &SelectionContext,
    ) -> ProjectResult<Projection> {
        project_level(self.schema, source, context.scope())
    }

    /// Project a slice of source values under one shared context.
    ///
    /// # Errors
    ///
    /// Stops at the first element whose projection fails.
    pub fn project_many(
        &self,
        sources: &[Value],
        context: &SelectionContext,
    ) -> ProjectResult<Vec<Projection>> {
        let scope = context.scope();
        sources
            .iter()
            .map(|source| project_level(self.schema, source, scope))
            .collect()
    }
}

/// Project one nesting level: visit each declared field in order, apply
/// the skip rules, extract, transform, record.
fn project_level(
    schema: &Schema,
    source: &Value,
    scope: SelectionScope<'_>,
) -> ProjectResult<Projection> {
    let mut projection = Projection::new();

    for field in schema.fields() {
        let name = field.name();

        if field.is_read_only() && source.is_null() {
            log::trace!("field '{name}' skipped: read-only with null source");
            continue;
        }
        if !scope.selects(name) {
            log::trace!("field '{name}' skipped: outside select scope");
            continue;
        }
        if scope.excludes(name) {
            log::trace!("field '{name}' skipped: excluded");
            continue;
        }

        let extracted = extract(field, source, scope)?;
        let value = match schema.transform_for(name) {
            Some(transform) => transform(source, extracted),
            None => extracted,
        };

        projection.record(FieldMeta {
            name: name.to_string(),
            key: field.output_key().to_string(),
            read_only: field.is_read_only(),
            write_only: field.is_write_only(),
            value,
        });
    }

    Ok(projection)
}

fn extract(field: &Field, source: &Value, scope: SelectionScope<'_>) -> ProjectResult<Value> {
    match field.kind() {
        FieldKind::Attribute => Ok(attribute(source, field.source_attr())),
        FieldKind::Computed(extractor) => extractor(source),
        FieldKind::Nested { schema, many } => {
            let attr = attribute(source, field.source_attr());
            nested(schema, attr, *many, scope.child(field.name()))
        }
    }
}

/// Project a nested attribute. `Null` stays `Null` without recursing;
/// with `many`, array elements project individually and any other value
/// projects as a single object.
fn nested(
    schema: &Schema,
    attr: Value,
    many: bool,
    scope: SelectionScope<'_>,
) -> ProjectResult<Value> {
    if attr.is_null() {
        return Ok(Value::Null);
    }

    if many {
        if let Value::Array(items) = attr {
            let mut projected = Vec::with_capacity(items.len());
            for item in items {
                projected.push(project_level(schema, &item, scope)?.into_value());
            }
            return Ok(Value::Array(projected));
        }
    }

    Ok(project_level(schema, &attr, scope)?.into_value())
}

/// Read an attribute off the source. Missing keys and non-object sources
/// read as `Null`; a `Null` source is the expected introspection case and
/// stays quiet.
fn attribute(source: &Value, attr: &str) -> Value {
    match source {
        Value::Object(map) => map.get(attr).cloned().unwrap_or(Value::Null),
        Value::Null => Value::Null,
        other => {
            log::debug!(
                "attribute '{attr}' read from non-object source ({}); extracting null",
                json_type(other)
            );
            Value::Null
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
