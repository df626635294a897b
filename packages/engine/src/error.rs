//! Projection Error Types
//!
//! Core error types for selective projection operations.

use thiserror::Error;

/// Errors surfaced while projecting a source value through a schema.
///
/// Projection itself is deliberately lenient: missing attributes and
/// non-object sources extract as `Null` rather than failing. Errors are
/// reserved for computed extractors that genuinely cannot produce a
/// value, and propagate to the caller unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    /// A computed field extractor failed to produce a value
    #[error("extraction failed for field '{field}': {reason}")]
    Extract {
        /// Internal name of the field whose extractor failed
        field: String,
        /// Human-readable failure description
        reason: String,
    },

    /// Typed query parameters could not be encoded as a query string
    #[error("query encoding failed: {reason}")]
    Query {
        /// Underlying encoder failure description
        reason: String,
    },
}

/// Result type for projection operations
pub type ProjectResult<T> = Result<T, ProjectError>;

impl ProjectError {
    /// Build an extraction error for the named field.
    pub fn extract(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Extract {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Build a query encoding error.
    pub fn query(reason: impl Into<String>) -> Self {
        Self::Query {
            reason: reason.into(),
        }
    }
}
