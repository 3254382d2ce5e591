// tagreg-rs/tagreg/src/catalog/iso14443b.rs

//! ISO14443 type B commands and the SRIX4K custom set.

use super::CommandCode;

/// ISO14443-B commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iso14443bCommand {
    /// Request type B.
    Reqb,
    /// Attribute (select) command.
    Attrib,
    /// Halt.
    Halt,
}

impl CommandCode for Iso14443bCommand {
    fn code(&self) -> u8 {
        match self {
            Self::Reqb => 0x05,
            Self::Attrib => 0x1D,
            Self::Halt => 0x50,
        }
    }
}

/// SRIX4K commands. The tag does not respond to REQB; it is brought up with
/// INITIATE/SELECT instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Srix4kCommand {
    /// `06 00` - initiate.
    Initiate,
    /// `0E xx` - select by chip ID.
    SelectId,
    GetUid,
    /// `08 yy` - read block `yy`.
    ReadBlock,
    /// `09 yy dd dd dd dd` - write block `yy`.
    WriteBlock,
    ResetToInventory,
    Completion,
    /// `0A` followed by 6 bytes of data to authenticate.
    Authenticate,
}

impl CommandCode for Srix4kCommand {
    fn code(&self) -> u8 {
        match self {
            Self::Initiate => 0x06,
            Self::SelectId => 0x0E,
            Self::GetUid => 0x0B,
            Self::ReadBlock => 0x08,
            Self::WriteBlock => 0x09,
            Self::ResetToInventory => 0x0C,
            Self::Completion => 0x0F,
            Self::Authenticate => 0x0A,
        }
    }
}
