//! Selection spec methods for `SylectBuilder`
//!
//! Collects select/exclude specs from explicit paths, raw query strings,
//! or full request URLs.

use sylect_engine::{PathSpec, QueryParams};
use url::Url;

use super::core::SylectBuilder;

impl SylectBuilder {
    /// Set the paths to keep
    ///
    /// Accepts any spec shape: `"a.b,c"`, `["a.b", "c"]`, or an
    /// already-normalized `PathSet`.
    ///
    /// # Arguments
    /// * `spec` - Paths to keep at and below the projection root
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```rust
    /// use sylect::{Field, Schema, Sylect};
    ///
    /// let builder = Sylect::schema(Schema::new().field(Field::new("id")))
    ///     .select(["id", "user.name"]);
    /// assert!(builder.context().select().contains("user"));
    /// ```
    #[must_use]
    pub fn select(mut self, spec: impl Into<PathSpec>) -> Self {
        self.select = spec.into();
        self
    }

    /// Set the paths to drop
    ///
    /// A path ending at a field removes it; a path continuing beneath a
    /// field filters inside it instead.
    ///
    /// # Arguments
    /// * `spec` - Paths to drop at and below the projection root
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn exclude(mut self, spec: impl Into<PathSpec>) -> Self {
        self.exclude = spec.into();
        self
    }

    /// Supply request query parameters carrying `select`/`exclude`
    ///
    /// Once parameters are set they are the authority: explicit
    /// [`SylectBuilder::select`] and [`SylectBuilder::exclude`] specs are
    /// superseded even when the parameters carry neither key.
    ///
    /// # Arguments
    /// * `params` - Decoded query parameters
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn query(mut self, params: QueryParams) -> Self {
        self.query = Some(params);
        self
    }

    /// Parse a raw query string and supply it as query parameters
    ///
    /// # Arguments
    /// * `query` - Raw query string, with or without a leading `'?'`
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```rust
    /// use sylect::{Field, Schema, Sylect};
    ///
    /// let builder = Sylect::schema(Schema::new().field(Field::new("id")))
    ///     .query_str("select=id&exclude=meta.internal");
    /// assert!(builder.context().select().terminates_at("id"));
    /// ```
    #[must_use]
    pub fn query_str(self, query: &str) -> Self {
        self.query(QueryParams::parse(query))
    }

    /// Take query parameters from a request URL
    ///
    /// # Arguments
    /// * `url` - The complete request URL whose query to read
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn url(mut self, url: &str) -> Self {
        match url.parse::<Url>() {
            Ok(parsed) => {
                self.query = Some(QueryParams::from_url(&parsed));
            }
            Err(parse_error) => {
                // Invalid URL provided - log and keep existing selection inputs
                log::warn!("invalid URL '{url}': {parse_error}; keeping existing selection");
            }
        }
        self
    }
}
