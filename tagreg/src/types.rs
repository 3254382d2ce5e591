// tagreg-rs/tagreg/src/types.rs

use derive_more::Display;

/// Chip family owning a programmable configuration register layout.
///
/// Field names recur across families ("AOR", "bit rate") at different bit
/// offsets, so every codec operation and error is tagged with its family to
/// keep the layouts from being confused.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagFamily {
    /// Atmel T55x7 (T5557/T5567/T5577).
    #[display(fmt = "T55x7")]
    T55x7,
    /// Atmel T5555, also sold as the Q5.
    #[display(fmt = "T5555")]
    T5555,
    /// EM Microelectronic EM4x05/EM4x69.
    #[display(fmt = "EM4x05")]
    Em4x05,
}

/// Contactless protocol families covered by the opcode catalog.
///
/// The numeric discriminants are the protocol identifiers used on the wire
/// between client and reader firmware and must not be renumbered.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProtocolFamily {
    /// ISO14443 type A.
    #[display(fmt = "ISO14443A")]
    Iso14443a = 0,
    /// HID iClass / Picopass.
    #[display(fmt = "iClass")]
    Iclass = 1,
    /// ISO14443 type B.
    #[display(fmt = "ISO14443B")]
    Iso14443b = 2,
    /// Innovision Topaz (NFC type 1).
    #[display(fmt = "Topaz")]
    Topaz = 3,
    /// NXP Mifare family.
    #[display(fmt = "Mifare")]
    Mifare = 4,
    /// ISO7816-4 APDUs.
    #[display(fmt = "ISO7816-4")]
    Iso7816_4 = 5,
    /// ISO15693 vicinity cards.
    #[display(fmt = "ISO15693")]
    Iso15693 = 6,
    /// ISO14443-4 (T=CL).
    #[display(fmt = "ISO14443-4")]
    Iso14443_4 = 7,
}

impl ProtocolFamily {
    /// Look up a family by its wire identifier.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Iso14443a),
            1 => Some(Self::Iclass),
            2 => Some(Self::Iso14443b),
            3 => Some(Self::Topaz),
            4 => Some(Self::Mifare),
            5 => Some(Self::Iso7816_4),
            6 => Some(Self::Iso15693),
            7 => Some(Self::Iso14443_4),
            _ => None,
        }
    }

    /// The wire identifier for this family.
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}
