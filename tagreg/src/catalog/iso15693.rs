// tagreg-rs/tagreg/src/catalog/iso15693.rs

//! ISO15693 vicinity card commands, request/response flags, and the
//! response error-code table, plus the EM Microelectronic and NXP/Philips
//! custom command sets.

use super::CommandCode;

/// ISO15693 commands. Inventory and Stay Quiet are mandatory for all tags;
/// the rest are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iso15693Command {
    /// Mandatory.
    Inventory,
    /// Mandatory.
    StayQuiet,
    ReadBlock,
    WriteBlock,
    LockBlock,
    ReadMultiBlock,
    Select,
    ResetToReady,
    WriteAfi,
    LockAfi,
    WriteDsfid,
    LockDsfid,
    GetSystemInfo,
    /// Read multiple block security status.
    ReadMultiSecStatus,
}

impl CommandCode for Iso15693Command {
    fn code(&self) -> u8 {
        match self {
            Self::Inventory => 0x01,
            Self::StayQuiet => 0x02,
            Self::ReadBlock => 0x20,
            Self::WriteBlock => 0x21,
            Self::LockBlock => 0x22,
            Self::ReadMultiBlock => 0x23,
            Self::Select => 0x25,
            Self::ResetToReady => 0x26,
            Self::WriteAfi => 0x27,
            Self::LockAfi => 0x28,
            Self::WriteDsfid => 0x29,
            Self::LockDsfid => 0x2A,
            Self::GetSystemInfo => 0x2B,
            Self::ReadMultiSecStatus => 0x2C,
        }
    }
}

// Request flags.

/// Use two sub-carriers.
pub const REQ_SUBCARRIER_TWO: u8 = 1 << 0;
/// High data rate.
pub const REQ_DATARATE_HIGH: u8 = 1 << 1;
/// Inventory mode; changes the meaning of bits 4 and 5.
pub const REQ_INVENTORY: u8 = 1 << 2;
/// Protocol extension (RFU).
pub const REQ_PROTOCOL_EXT: u8 = 1 << 3;
/// Command-specific option selector.
pub const REQ_OPTION: u8 = 1 << 6;

// When REQ_INVENTORY is not set.

/// Only selected cards respond.
pub const REQ_SELECT: u8 = 1 << 4;
/// The request contains an address.
pub const REQ_ADDRESS: u8 = 1 << 5;

// When REQ_INVENTORY is set.

/// An AFI field is present.
pub const REQINV_AFI: u8 = 1 << 4;
/// One slot (16 slots if not set).
pub const REQINV_SLOT1: u8 = 1 << 5;

// Response flags.

/// The response carries an error code.
pub const RES_ERROR: u8 = 1 << 0;
/// Protocol extension.
pub const RES_EXT: u8 = 1 << 3;

/// ISO15693 response error codes, as carried in the first byte after an
/// error-flagged response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iso15693Status {
    /// No error.
    NoError,
    CmdNotSupported,
    /// Command not recognized, e.g. a parameter error.
    CmdNotRecognized,
    CmdOptionNotSupported,
    /// No additional info about this error.
    Generic,
    BlockUnavailable,
    /// The block is already locked and cannot be locked again.
    BlockAlreadyLocked,
    /// The block is locked and cannot be changed.
    BlockLocked,
    BlockWriteFailed,
    BlockLockFailed,
}

impl Iso15693Status {
    /// The wire error code.
    pub fn code(&self) -> u8 {
        match self {
            Self::NoError => 0x00,
            Self::CmdNotSupported => 0x01,
            Self::CmdNotRecognized => 0x02,
            Self::CmdOptionNotSupported => 0x03,
            Self::Generic => 0x0F,
            Self::BlockUnavailable => 0x10,
            Self::BlockAlreadyLocked => 0x11,
            Self::BlockLocked => 0x12,
            Self::BlockWriteFailed => 0x13,
            Self::BlockLockFailed => 0x14,
        }
    }

    /// Reverse-map a wire error code; unknown codes map to `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::NoError),
            0x01 => Some(Self::CmdNotSupported),
            0x02 => Some(Self::CmdNotRecognized),
            0x03 => Some(Self::CmdOptionNotSupported),
            0x0F => Some(Self::Generic),
            0x10 => Some(Self::BlockUnavailable),
            0x11 => Some(Self::BlockAlreadyLocked),
            0x12 => Some(Self::BlockLocked),
            0x13 => Some(Self::BlockWriteFailed),
            0x14 => Some(Self::BlockLockFailed),
            _ => None,
        }
    }

    /// Human-readable meaning, for display layers.
    pub fn description(&self) -> &'static str {
        match self {
            Self::NoError => "no error",
            Self::CmdNotSupported => "command not supported",
            Self::CmdNotRecognized => "command not recognized (e.g. parameter error)",
            Self::CmdOptionNotSupported => "command option not supported",
            Self::Generic => "error with no additional information",
            Self::BlockUnavailable => "block not available",
            Self::BlockAlreadyLocked => "block already locked",
            Self::BlockLocked => "block locked and cannot be changed",
            Self::BlockWriteFailed => "block write was unsuccessful",
            Self::BlockLockFailed => "block locking was unsuccessful",
        }
    }

    /// Everything except `NoError`.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::NoError)
    }
}

/// EM Microelectronic custom commands. Each is followed by the IC
/// manufacturer code byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmCustomCommand {
    /// Activate EAS (followed by the EAS type).
    ActivateEas,
    /// Write the EAS ID (followed by a 2-byte EAS value).
    WriteEasId,
    /// Get the protection status for a span of blocks.
    GetProtectionStatus,
    /// Login (followed by a 4-byte password).
    Login,
}

impl CommandCode for EmCustomCommand {
    fn code(&self) -> u8 {
        match self {
            Self::ActivateEas => 0xA5,
            Self::WriteEasId => 0xA7,
            Self::GetProtectionStatus => 0xB8,
            Self::Login => 0xE4,
        }
    }
}

/// NXP/Philips custom commands (I-Code SLI family).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NxpCustomCommand {
    InventoryRead,
    FastInventoryRead,
    SetEas,
    ResetEas,
    LockEas,
    EasAlarm,
    PasswordProtectEas,
    WriteEasId,
    ReadEpc,
    InventoryPageRead,
    FastInventoryPageRead,
    GetRandomNumber,
    SetPassword,
    WritePassword,
    LockPassword,
    BitPasswordProtection,
    LockPageProtectionCondition,
    GetMultipleBlockProtectionStatus,
    DestroySli,
    EnablePrivacy,
    /// 64-bit password protection.
    Password64Bit,
    /// Long range command (ISO/TR7003:1990).
    LongRange,
}

impl CommandCode for NxpCustomCommand {
    fn code(&self) -> u8 {
        match self {
            Self::InventoryRead => 0xA0,
            Self::FastInventoryRead => 0xA1,
            Self::SetEas => 0xA2,
            Self::ResetEas => 0xA3,
            Self::LockEas => 0xA4,
            Self::EasAlarm => 0xA5,
            Self::PasswordProtectEas => 0xA6,
            Self::WriteEasId => 0xA7,
            Self::ReadEpc => 0xA8,
            Self::InventoryPageRead => 0xB0,
            Self::FastInventoryPageRead => 0xB1,
            Self::GetRandomNumber => 0xB2,
            Self::SetPassword => 0xB3,
            Self::WritePassword => 0xB4,
            Self::LockPassword => 0xB5,
            Self::BitPasswordProtection => 0xB6,
            Self::LockPageProtectionCondition => 0xB7,
            Self::GetMultipleBlockProtectionStatus => 0xB8,
            Self::DestroySli => 0xB9,
            Self::EnablePrivacy => 0xBA,
            Self::Password64Bit => 0xBB,
            Self::LongRange => 0x40,
        }
    }
}
