// tagreg-rs/tagreg/src/prelude.rs

//! One-stop import for the common surface of the crate.

pub use crate::catalog::CommandCode;
pub use crate::config::{Em4x05Config, PskCarrier, T5555Config, T55x7Config};
pub use crate::{Error, ProtocolFamily, Result, TagFamily};

// Re-export small utilities for convenience
pub use crate::utils::{format_register, parse_register};
