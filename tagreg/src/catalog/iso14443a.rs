// tagreg-rs/tagreg/src/catalog/iso14443a.rs

//! ISO14443 type A framing commands.

use super::CommandCode;

/// ISO14443-A commands. REQA and WUPA are short frames (7 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iso14443aCommand {
    /// Request type A; answered with 2 bytes ATQA.
    Reqa,
    /// Wake-up type A; answered with 2 bytes ATQA.
    Wupa,
    /// Anticollision or select, cascade level 1 (followed by 0x20 or 0x70).
    AnticollOrSelect,
    /// Anticollision or select, cascade level 2.
    AnticollOrSelect2,
    /// Anticollision or select, cascade level 3.
    AnticollOrSelect3,
    /// Halt; no answer from the card.
    Halt,
    /// Request answer to select.
    Rats,
}

impl CommandCode for Iso14443aCommand {
    fn code(&self) -> u8 {
        match self {
            Self::Reqa => 0x26,
            Self::Wupa => 0x52,
            Self::AnticollOrSelect => 0x93,
            Self::AnticollOrSelect2 => 0x95,
            Self::AnticollOrSelect3 => 0x97,
            Self::Halt => 0x50,
            Self::Rats => 0xE0,
        }
    }

    fn bits(&self) -> u8 {
        match self {
            Self::Reqa | Self::Wupa => 7,
            _ => 8,
        }
    }
}
