//! Selective Projection
//!
//! The [`engine`] module drives the field-by-field walk; [`output`]
//! defines what a pass produces.

pub mod engine;
pub mod output;

pub use self::{
    engine::Projector,
    output::{FieldMeta, Projection},
};
