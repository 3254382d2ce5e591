// tagreg-rs/tagreg/src/catalog/mifare.rs

//! Mifare Classic, Ultralight C and Ultralight EV1 command sets, plus the
//! 4-bit card answers shared by the family.

use super::CommandCode;

/// Mifare Classic commands (including the Chinese changeable-UID "magic"
/// sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MifareCommand {
    /// Read a 16-byte block.
    ReadBlock,
    /// Write a 16-byte block.
    WriteBlock,
    /// Authenticate with key A.
    AuthKeyA,
    /// Authenticate with key B.
    AuthKeyB,
    /// First half of the magic wake-up putting changeable-UID cards in
    /// special mode; 7 bits, must be followed by [`MifareCommand::MagicWupc2`].
    MagicWupc1,
    /// Second half of the magic wake-up.
    MagicWupc2,
    /// Magic wipe.
    MagicWipec,
    Increment,
    Decrement,
    Restore,
    Transfer,
}

impl CommandCode for MifareCommand {
    fn code(&self) -> u8 {
        match self {
            Self::ReadBlock => 0x30,
            Self::WriteBlock => 0xA0,
            Self::AuthKeyA => 0x60,
            Self::AuthKeyB => 0x61,
            Self::MagicWupc1 => 0x40,
            Self::MagicWupc2 => 0x43,
            Self::MagicWipec => 0x41,
            Self::Increment => 0xC0,
            Self::Decrement => 0xC1,
            Self::Restore => 0xC2,
            Self::Transfer => 0xB0,
        }
    }

    fn bits(&self) -> u8 {
        match self {
            Self::MagicWupc1 => 7,
            _ => 8,
        }
    }
}

/// Mifare Ultralight C commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UltralightCCommand {
    /// 4-byte page write.
    Write,
    /// 16-byte compatibility write, to accommodate Mifare commands.
    CompatWrite,
    /// 3DES authentication, step 1.
    Auth1,
    /// 3DES authentication, step 2.
    Auth2,
}

impl CommandCode for UltralightCCommand {
    fn code(&self) -> u8 {
        match self {
            Self::Write => 0xA2,
            Self::CompatWrite => 0xA0,
            Self::Auth1 => 0x1A,
            Self::Auth2 => 0xAF,
        }
    }
}

/// Mifare Ultralight EV1 commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UltralightEv1Command {
    /// Password authentication.
    PwdAuth,
    GetVersion,
    FastRead,
    Write,
    CompatWrite,
    ReadCounter,
    IncrCounter,
    /// Read the ECC originality signature.
    ReadSig,
    CheckTearingEvent,
    /// Virtual card select.
    Vcsl,
}

impl CommandCode for UltralightEv1Command {
    fn code(&self) -> u8 {
        match self {
            Self::PwdAuth => 0x1B,
            Self::GetVersion => 0x60,
            Self::FastRead => 0x3A,
            Self::Write => 0xA2,
            Self::CompatWrite => 0xA0,
            Self::ReadCounter => 0x39,
            Self::IncrCounter => 0xA5,
            Self::ReadSig => 0x3C,
            Self::CheckTearingEvent => 0x3E,
            Self::Vcsl => 0x4B,
        }
    }
}

/// Command selecting the EV1 personal-UID feature.
pub const EV1_PERSONAL_UID: u8 = 0x40;
/// Mode byte following [`EV1_PERSONAL_UID`].
pub const EV1_SETMODE: u8 = 0x43;

/// EV1 personal-UID format selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ev1UidFormat {
    /// Format 0.
    Uidf0,
    /// Format 1.
    Uidf1,
    /// Format 2.
    Uidf2,
    /// Format 3.
    Uidf3,
}

impl Ev1UidFormat {
    /// The selector byte for this format.
    pub fn code(&self) -> u8 {
        match self {
            Self::Uidf0 => 0x00,
            Self::Uidf1 => 0x40,
            Self::Uidf2 => 0x20,
            Self::Uidf3 => 0x60,
        }
    }
}

/// Mifare 4-bit card answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardResponse {
    /// 1010 - ACK.
    Ack,
    /// 0100 - NACK, command not allowed.
    NackNotAllowed,
    /// 0101 - NACK, transmission error.
    NackTransmissionError,
}

impl CardResponse {
    /// The 4-bit answer value.
    pub fn code(&self) -> u8 {
        match self {
            Self::Ack => 0x0A,
            Self::NackNotAllowed => 0x04,
            Self::NackTransmissionError => 0x05,
        }
    }

    /// Reverse-map a 4-bit answer; unknown patterns map to `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x0A => Some(Self::Ack),
            0x04 => Some(Self::NackNotAllowed),
            0x05 => Some(Self::NackTransmissionError),
            _ => None,
        }
    }

    /// True only for ACK.
    pub fn is_ack(&self) -> bool {
        matches!(self, Self::Ack)
    }
}
