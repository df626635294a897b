//! Projection execution methods for `SylectBuilder`
//!
//! Resolves the selection context from the collected inputs and runs the
//! engine projector over source values.

use serde_json::Value;
use sylect_engine::{ProjectResult, Projection, Projector, SelectionContext};

use super::core::SylectBuilder;

impl SylectBuilder {
    /// Resolve the selection context the next projection will run under
    ///
    /// Query parameters, when present, supersede explicit specs entirely;
    /// otherwise the explicit `select`/`exclude` specs normalize into the
    /// context. Resolution does not consume the builder, so one configured
    /// builder can project any number of sources.
    #[must_use]
    pub fn context(&self) -> SelectionContext {
        if let Some(params) = &self.query {
            if !self.select.is_empty() || !self.exclude.is_empty() {
                log::debug!("query parameters supersede explicit select/exclude specs");
            }
            return SelectionContext::from_query(params);
        }
        SelectionContext::new(self.select.clone(), self.exclude.clone())
    }

    /// Project one source value
    ///
    /// # Arguments
    /// * `source` - The value to project through the schema
    ///
    /// # Returns
    /// The projection with ordered data and per-field metadata
    ///
    /// # Errors
    /// Propagates computed-field extraction failures unmodified.
    pub fn project(&self, source: &Value) -> ProjectResult<Projection> {
        let context = self.context();
        if self.debug_enabled {
            log::debug!(
                "projecting with select=[{}] exclude=[{}]",
                context.select(),
                context.exclude()
            );
        }
        Projector::new(&self.schema).project(source, &context)
    }

    /// Project a slice of source values under one shared context
    ///
    /// # Errors
    /// Stops at the first element whose projection fails.
    pub fn project_many(&self, sources: &[Value]) -> ProjectResult<Vec<Projection>> {
        let context = self.context();
        if self.debug_enabled {
            log::debug!(
                "projecting {} sources with select=[{}] exclude=[{}]",
                sources.len(),
                context.select(),
                context.exclude()
            );
        }
        Projector::new(&self.schema).project_many(sources, &context)
    }

    /// Project one source value straight to a JSON object
    ///
    /// Shorthand for [`SylectBuilder::project`] followed by
    /// [`Projection::into_value`].
    ///
    /// # Errors
    /// Propagates computed-field extraction failures unmodified.
    pub fn project_value(&self, source: &Value) -> ProjectResult<Value> {
        self.project(source).map(Projection::into_value)
    }
}
