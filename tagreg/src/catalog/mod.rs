// tagreg-rs/tagreg/src/catalog/mod.rs

//! Static command opcode and status code tables, one module per protocol
//! family.
//!
//! This is inert reference data consumed by the protocol-execution layer
//! that builds and parses frames: flat symbol-to-opcode mappings with no
//! behavior of their own. Command enums implement [`CommandCode`]; status
//! tables expose `from_code` and `description` lookups that return `None`
//! for unknown codes instead of guessing.

pub mod hitag;
pub mod iclass;
pub mod iso14443a;
pub mod iso14443b;
pub mod iso15693;
pub mod iso7816;
pub mod mifare;
pub mod topaz;

/// A fixed command opcode together with its transmitted bit length.
///
/// Most commands are full bytes; REQA/WUPA-class short frames are 7 bits,
/// and the Hitag commands are 4- or 5-bit left-aligned patterns.
pub trait CommandCode {
    /// The opcode value, left-aligned for sub-byte commands.
    fn code(&self) -> u8;

    /// Number of bits actually transmitted on the wire.
    fn bits(&self) -> u8 {
        8
    }
}
