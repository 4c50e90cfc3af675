//! Core error types.

pub mod error;

pub use error::{MonopackError, MonopackResult};
