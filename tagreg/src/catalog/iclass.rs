// tagreg-rs/tagreg/src/catalog/iclass.rs

//! HID iClass (Picopass) commands and fuse bits.

use super::CommandCode;

/// iClass commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IclassCommand {
    /// Activate all tags in the field.
    Actall,
    ReadOrIdentify,
    Select,
    /// Select a memory page.
    Pagesel,
    /// Read-check against the debit key.
    ReadcheckKd,
    /// Read-check against the credit key.
    ReadcheckKc,
    /// Check against the credit key.
    CheckKc,
    /// Check against the debit key.
    CheckKd,
    Detect,
    Halt,
    /// Write a block.
    Update,
    Act,
    /// Read four blocks.
    Read4,
}

impl CommandCode for IclassCommand {
    fn code(&self) -> u8 {
        match self {
            Self::Actall => 0x0A,
            Self::ReadOrIdentify => 0x0C,
            Self::Select => 0x81,
            Self::Pagesel => 0x84,
            Self::ReadcheckKd => 0x88,
            Self::ReadcheckKc => 0x18,
            Self::CheckKc => 0x95,
            Self::CheckKd => 0x05,
            Self::Detect => 0x0F,
            Self::Halt => 0x00,
            Self::Update => 0x87,
            Self::Act => 0x8E,
            Self::Read4 => 0x06,
        }
    }
}

// Picopass fuse bits.

/// Personalization fuse.
pub const FUSE_FPERS: u8 = 0x80;
/// Coding fuse 1.
pub const FUSE_CODING1: u8 = 0x40;
/// Coding fuse 0.
pub const FUSE_CODING0: u8 = 0x20;
/// Crypt fuse 1.
pub const FUSE_CRYPT1: u8 = 0x10;
/// Crypt fuse 0.
pub const FUSE_CRYPT0: u8 = 0x08;
/// Production fuse 1.
pub const FUSE_FPROD1: u8 = 0x04;
/// Production fuse 0.
pub const FUSE_FPROD0: u8 = 0x02;
/// RA fuse.
pub const FUSE_RA: u8 = 0x01;
