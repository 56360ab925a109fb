//! Command dispatch, one module per resource

pub mod catalog;
pub mod image;
