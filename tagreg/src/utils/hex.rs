// tagreg-rs/tagreg/src/utils/hex.rs

//! Hexadecimal helpers for register display and editing.
//!
//! These helpers are intentionally small and avoid external dependencies;
//! they render a packed register the way tag tooling conventionally prints
//! configuration blocks, and parse user-edited values back.

/// Format a 32-bit register as `0x`-prefixed, zero-padded lowercase hex.
///
/// Example: `0x148200` -> `"0x00148200"`
pub fn format_register(register: u32) -> String {
    format!("{:#010x}", register)
}

/// Parse a register from a hex string.
///
/// Accepts an optional `0x`/`0X` prefix and surrounding ASCII whitespace.
/// Returns an error message string on parse failure or overflow.
pub fn parse_register(s: &str) -> Result<u32, String> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err("empty register string".to_string());
    }

    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid register '{}': {}", trimmed, e))
}
