// tagreg-rs/tagreg/src/catalog/hitag.rs

//! Hitag1 and Hitag2 command sets.
//!
//! Hitag commands are short left-aligned bit patterns, not full bytes;
//! [`CommandCode::bits`] gives the transmitted length and the code value
//! holds the pattern in its high bits. Page or block numbers and CRCs
//! follow the command bits on the wire.

use super::CommandCode;

/// Hitag1 commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hitag1Command {
    /// Set carrier-coding new; left 5 bits only.
    SetCcNew,
    /// Not a real opcode: the read-ID exchange is 5 bits of length, a
    /// partial serial number and a CRC.
    ReadId,
    /// Select; left 5 bits, followed by a 32-bit SN and CRC.
    Select,
    /// Write plain page.
    WritePlainPage,
    /// Write plain block.
    WritePlainBlock,
    /// Write crypto page (or key information).
    WriteCryptoPage,
    /// Write crypto block.
    WriteCryptoBlock,
    /// Read plain page.
    ReadPlainPage,
    /// Read plain block.
    ReadPlainBlock,
    /// Read crypto page.
    ReadCryptoPage,
    /// Read crypto block.
    ReadCryptoBlock,
    /// Halt; followed by a dummy page and CRC.
    Halt,
}

impl CommandCode for Hitag1Command {
    fn code(&self) -> u8 {
        match self {
            Self::SetCcNew => 0xC2,
            Self::ReadId => 0x00,
            Self::Select => 0x00,
            Self::WritePlainPage => 0x80,
            Self::WritePlainBlock => 0x90,
            Self::WriteCryptoPage => 0xA0,
            Self::WriteCryptoBlock => 0xB0,
            Self::ReadPlainPage => 0xC0,
            Self::ReadPlainBlock => 0xD0,
            Self::ReadCryptoPage => 0xE0,
            Self::ReadCryptoBlock => 0xF0,
            Self::Halt => 0x70,
        }
    }

    fn bits(&self) -> u8 {
        match self {
            Self::SetCcNew | Self::ReadId | Self::Select => 5,
            _ => 4,
        }
    }
}

/// Hitag2 commands. For the page operations the page number sits in bits
/// 5..3 of the transmitted byte, with its inversion in the low bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hitag2Command {
    /// Start authentication; left 5 bits only.
    StartAuth,
    ReadPage,
    ReadPageInverted,
    WritePage,
    /// Halt; left 5 bits only.
    Halt,
}

impl CommandCode for Hitag2Command {
    fn code(&self) -> u8 {
        match self {
            Self::StartAuth => 0xC0,
            Self::ReadPage => 0xC0,
            Self::ReadPageInverted => 0x44,
            Self::WritePage => 0x82,
            Self::Halt => 0x00,
        }
    }

    fn bits(&self) -> u8 {
        match self {
            Self::StartAuth | Self::Halt => 5,
            _ => 8,
        }
    }
}
