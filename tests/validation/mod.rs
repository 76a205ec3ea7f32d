//! Validation tests module.
//!
//! Public API behaviour grouped by area.

pub mod combinators;
pub mod primitives;

// Re-export commonly used test utilities
pub use crate::common::{Fixtures, check, data, error_paths, init_logging};
