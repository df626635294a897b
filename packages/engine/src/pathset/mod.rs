//! Path Normalization
//!
//! Selection specs arrive in several shapes and collapse into one
//! canonical tree. The [`set`] module defines the tree itself; [`spec`]
//! defines the accepted input shapes and the normalization that maps them
//! onto it.

pub mod set;
pub mod spec;

pub use self::{set::PathSet, spec::PathSpec};
