// tagreg-rs/tagreg/src/lib.rs

//! tagreg
//!
//! Command opcode tables and configuration register codecs for contactless
//! and low-frequency tags.
//!
//! The crate has two independent halves. [`catalog`] is a static lookup
//! resource: command opcodes and response status codes for a dozen
//! contactless protocols. [`config`] is the interesting half: codecs that
//! pack structured parameter records into the 32-bit configuration registers
//! of the T55x7, T5555 (Q5) and EM4x05/EM4x69 chip families, and unpack
//! them again without loss.
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod prelude;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the shared enums in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
