//! Sylect Builder API modules
//!
//! Provides the complete fluent API for configuring and running selective
//! projections with elegant method chaining.

pub mod core;
pub mod project;
pub mod selection;

// Re-export all public types for convenience
pub use core::*;
