// tagreg-rs/tagreg/src/catalog/iso7816.rs

//! ISO7816-4 basic interindustry instruction bytes and response status
//! words.

use super::CommandCode;

/// Largest command/response frame handled for ISO7816-4 APDUs.
pub const MAX_FRAME_SIZE: usize = 261;

/// ISO7816-4 basic interindustry instructions (the INS byte of a command
/// APDU).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iso7816Instruction {
    EraseBinary,
    Verify,
    ManageChannel,
    ExternalAuthenticate,
    GetChallenge,
    InternalAuthenticate,
    SelectFile,
    GetProcessingOptions,
    ReadBinary,
    ReadRecords,
    GetResponse,
    Envelope,
    GetData,
    WriteBinary,
    WriteRecord,
    UpdateBinary,
    PutData,
    UpdateData,
    AppendRecord,
}

impl CommandCode for Iso7816Instruction {
    fn code(&self) -> u8 {
        match self {
            Self::EraseBinary => 0x0E,
            Self::Verify => 0x20,
            Self::ManageChannel => 0x70,
            Self::ExternalAuthenticate => 0x82,
            Self::GetChallenge => 0x84,
            Self::InternalAuthenticate => 0x88,
            Self::SelectFile => 0xA4,
            Self::GetProcessingOptions => 0xA8,
            Self::ReadBinary => 0xB0,
            Self::ReadRecords => 0xB2,
            Self::GetResponse => 0xC0,
            Self::Envelope => 0xC2,
            Self::GetData => 0xCA,
            Self::WriteBinary => 0xD0,
            Self::WriteRecord => 0xD2,
            Self::UpdateBinary => 0xD6,
            Self::PutData => 0xDA,
            Self::UpdateData => 0xDC,
            Self::AppendRecord => 0xE2,
        }
    }
}

/// ISO7816-4 response status word (SW1 SW2) - Newtype Pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusWord(u16);

impl StatusWord {
    /// Normal processing, no further qualification (`90 00`).
    pub const OK: Self = Self(0x9000);

    /// Wrap a raw status word.
    pub const fn new(sw: u16) -> Self {
        Self(sw)
    }

    /// Build from the two trailing response bytes.
    pub fn from_bytes(sw1: u8, sw2: u8) -> Self {
        Self(u16::from_be_bytes([sw1, sw2]))
    }

    /// The raw word.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// `90 00` - success.
    pub fn is_ok(&self) -> bool {
        *self == Self::OK
    }

    /// `6x xx` - error.
    pub fn is_error(&self) -> bool {
        self.0 >> 12 == 0x6
    }
}
