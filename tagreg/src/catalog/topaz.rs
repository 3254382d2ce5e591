// tagreg-rs/tagreg/src/catalog/topaz.rs

//! Innovision Topaz (NFC type 1) command set.

use super::CommandCode;

/// Topaz commands, including the dynamic memory model additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopazCommand {
    /// Request; short frame like ISO14443-A REQA.
    Reqa,
    /// Wake-up; short frame.
    Wupa,
    /// Read ID.
    Rid,
    /// Read all bytes.
    ReadAll,
    /// Read a single byte.
    ReadByte,
    /// Write a single byte, with erase.
    WriteErase,
    /// Write a single byte, without erase.
    WriteNoErase,
    /// Read a segment (dynamic memory model).
    ReadSegment,
    /// Read eight bytes (dynamic memory model).
    Read8,
    /// Write eight bytes with erase (dynamic memory model).
    WriteErase8,
    /// Write eight bytes without erase (dynamic memory model).
    WriteNoErase8,
}

impl CommandCode for TopazCommand {
    fn code(&self) -> u8 {
        match self {
            Self::Reqa => 0x26,
            Self::Wupa => 0x52,
            Self::Rid => 0x78,
            Self::ReadAll => 0x00,
            Self::ReadByte => 0x01,
            Self::WriteErase => 0x53,
            Self::WriteNoErase => 0x1A,
            Self::ReadSegment => 0x10,
            Self::Read8 => 0x02,
            Self::WriteErase8 => 0x54,
            Self::WriteNoErase8 => 0x1B,
        }
    }

    fn bits(&self) -> u8 {
        match self {
            Self::Reqa | Self::Wupa => 7,
            _ => 8,
        }
    }
}
