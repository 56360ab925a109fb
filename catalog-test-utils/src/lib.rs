//! Test utilities for the product search catalog client
//!
//! This crate provides an in-memory mock of the remote product search
//! service plus test data builders for exercising client functionality
//! without network connectivity.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::TestDataBuilder;
pub use mocks::{MockFailure, MockProductSearchApi};
