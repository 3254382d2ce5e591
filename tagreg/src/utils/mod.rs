// tagreg-rs/tagreg/src/utils/mod.rs

//! Utilities for tagreg: small, reusable helpers used across the crate.
//!
//! This module intentionally contains tiny, well-tested helpers that are
//! convenient for displaying and editing register values as hex.

pub mod hex;

// Re-export the most common helpers at the `utils` module level so callers
// can use `crate::utils::format_register(...)` etc if they prefer.
pub use hex::*;
