//! Canonical engine types in one import.

pub use crate::context::{EXCLUDE_PARAM, SELECT_PARAM, SelectionContext, SelectionScope};
pub use crate::error::{ProjectError, ProjectResult};
pub use crate::pathset::{PathSet, PathSpec};
pub use crate::projector::{FieldMeta, Projection, Projector};
pub use crate::query::QueryParams;
pub use crate::schema::{ExtractFn, Field, FieldKind, Schema, TransformFn};
