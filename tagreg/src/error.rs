// tagreg-rs/tagreg/src/error.rs

use crate::types::TagFamily;
use thiserror::Error;

/// Common error type for the register codecs.
///
/// Encode raises only `InvalidField`; decode raises only
/// `UnrecognizedField`. Both are deterministic: retrying the same input
/// reproduces the same error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A symbolic parameter value has no bit encoding in the target field.
    /// The codec refuses to truncate or wrap.
    #[error("invalid {field} for {family}: {value} has no register encoding")]
    InvalidField {
        /// Chip family whose register was being encoded.
        family: TagFamily,
        /// Name of the offending field.
        field: &'static str,
        /// The rejected parameter value.
        value: u32,
    },

    /// Extracted register bits match no known symbolic value. The raw bits
    /// are carried so callers can render "unknown" instead of a guessed
    /// default; silently defaulting could cause a re-write of a different
    /// configuration than what is physically on the tag.
    #[error("unrecognized {field} bits in {family} register: {bits:#04x}")]
    UnrecognizedField {
        /// Chip family whose register was being decoded.
        family: TagFamily,
        /// Name of the offending field.
        field: &'static str,
        /// The raw extracted bits, right-aligned.
        bits: u32,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
