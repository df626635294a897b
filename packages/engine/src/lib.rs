//! # Sylect Projection Engine
//!
//! Selective field projection over JSON values: normalize select/exclude
//! path specs into canonical trees, then project sources through ordered
//! schemas with the selection re-scoped at every nesting level.
//!
//! ## Features
//!
//! - **Canonical path trees** merging dotted path specs of any accepted shape
//! - **Recursive projection** with per-level select/exclude scoping
//! - **Ordered output** following field declaration order
//! - **Field metadata** for every visited field, write-only fields included
//! - **Query parameter wiring** for `select=` / `exclude=` request params
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use sylect_engine::{Field, Projector, QueryParams, Schema, SelectionContext};
//!
//! let group = Schema::new().field(Field::new("name"));
//! let schema = Schema::new()
//!     .field(Field::new("username"))
//!     .field(Field::new("email"))
//!     .field(Field::nested_many("groups", group));
//!
//! let params = QueryParams::parse("select=username,groups.name");
//! let context = SelectionContext::from_query(&params);
//!
//! let user = json!({
//!     "username": "ada",
//!     "email": "ada@example.com",
//!     "groups": [{"name": "admins", "internal_id": 3}],
//! });
//!
//! let projection = Projector::new(&schema)
//!     .project(&user, &context)
//!     .expect("projection succeeds");
//! assert_eq!(
//!     projection.into_value(),
//!     json!({"username": "ada", "groups": [{"name": "admins"}]})
//! );
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

// Core modules
pub mod context;
pub mod error;
pub mod pathset;
pub mod projector;
pub mod query;
pub mod schema;

// Prelude with canonical types
pub mod prelude;

// Essential public API - only what end users actually need
pub use crate::prelude::*;
