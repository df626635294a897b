//! Core `SylectBuilder` structures and base functionality
//!
//! Contains the main `SylectBuilder` struct and foundational methods for
//! configuring selective projections with an elegant fluent interface.

use sylect_engine::{PathSpec, QueryParams, Schema};

/// Main Sylect builder for configuring projections with a fluent API
///
/// A builder carries one schema plus the selection inputs gathered so far.
/// Explicit `select`/`exclude` specs and query parameters can both be set;
/// query parameters take authority when the context is resolved.
#[derive(Debug)]
pub struct SylectBuilder {
    /// Schema the projection runs over
    pub(crate) schema: Schema,
    /// Explicit select spec, empty by default
    pub(crate) select: PathSpec,
    /// Explicit exclude spec, empty by default
    pub(crate) exclude: PathSpec,
    /// Query parameters, superseding explicit specs when present
    pub(crate) query: Option<QueryParams>,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl SylectBuilder {
    /// Start building a projection over `schema`
    ///
    /// # Examples
    /// ```rust
    /// use sylect::{Field, Schema, SylectBuilder};
    ///
    /// let builder = SylectBuilder::new(
    ///     Schema::new().field(Field::new("id")).field(Field::new("name")),
    /// );
    /// assert!(builder.context().is_unrestricted());
    /// ```
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            select: PathSpec::default(),
            exclude: PathSpec::default(),
            query: None,
            debug_enabled: false,
        }
    }

    /// Enable debug logging for this projection
    ///
    /// When enabled, the resolved selection context is logged before each
    /// projection runs.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Schema this builder projects through
    #[must_use]
    pub fn schema_ref(&self) -> &Schema {
        &self.schema
    }
}
