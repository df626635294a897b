//! Sylect Public API
//!
//! Field-selective JSON projection with a fluent builder pattern. Declare a
//! schema once, then narrow any response with `select`/`exclude` specs or
//! straight from request query parameters.
//!
//! ```rust
//! use serde_json::json;
//! use sylect::{Field, Schema, Sylect};
//!
//! let schema = Schema::new()
//!     .field(Field::new("id"))
//!     .field(Field::new("name"))
//!     .field(Field::new("email"));
//!
//! let user = json!({"id": 7, "name": "ada", "email": "ada@example.com"});
//! let value = Sylect::schema(schema)
//!     .query_str("select=id,name")
//!     .project_value(&user)
//!     .expect("projection succeeds");
//! assert_eq!(value, json!({"id": 7, "name": "ada"}));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export important types from engine package
pub use sylect_engine::{
    EXCLUDE_PARAM, ExtractFn, Field, FieldKind, FieldMeta, PathSet, PathSpec, ProjectError,
    ProjectResult, Projection, Projector, QueryParams, SELECT_PARAM, Schema, SelectionContext,
    SelectionScope, TransformFn,
};

// Main builder type alias for convenience
pub use builder::core::SylectBuilder;

/// Main Sylect entry point providing static builder methods
pub struct Sylect;

impl Sylect {
    /// Start a projection builder over `schema`
    ///
    /// Shorthand for `SylectBuilder::new(schema)`
    #[must_use]
    pub fn schema(schema: Schema) -> SylectBuilder {
        SylectBuilder::new(schema)
    }
}

/// Start a projection builder over `schema`
///
/// Shorthand for `SylectBuilder::new(schema)`
#[must_use]
pub fn schema(schema: Schema) -> SylectBuilder {
    SylectBuilder::new(schema)
}
