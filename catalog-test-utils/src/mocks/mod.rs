//! Mock implementations for testing

mod api;

pub use api::{MockFailure, MockProductSearchApi};
