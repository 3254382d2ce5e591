// tagreg-rs/tagreg/src/config/em4x05.rs

//! EM4x05/EM4x69 configuration register codec (word 4).
//!
//! Two things set this family apart: the block count is stored with a bias
//! (the first user block is block 5, so `field = num_blocks + 5 - 1`), and
//! the access behavior is a group of seven independent single-bit flags.

use super::{PskCarrier, computed_rate_divisor, computed_rate_field};
use crate::types::TagFamily;
use crate::{Error, Result};
use derive_more::Display;
use log::debug;

const FAMILY: TagFamily = TagFamily::Em4x05;

// Word 4 bit assignments. The bit rate occupies bits 0..=5.
const BITRATE_MASK: u32 = 0x3F;
const MODULATION_SHIFT: u32 = 6;
const MODULATION_MASK: u32 = 0xF;
const PSK_SHIFT: u32 = 10;
const PSK_MASK: u32 = 0x3;
const MAXBLOCK_SHIFT: u32 = 14;
const MAXBLOCK_MASK: u32 = 0xF;
const READ_LOGIN_REQ: u32 = 1 << 18;
const READ_HK_LOGIN_REQ: u32 = 1 << 19;
const WRITE_LOGIN_REQ: u32 = 1 << 20;
const WRITE_HK_LOGIN_REQ: u32 = 1 << 21;
const READ_AFTER_WRITE: u32 = 1 << 22;
const DISABLE_ALLOWED: u32 = 1 << 23;
const READER_TALK_FIRST: u32 = 1 << 24;

/// First user-writable block; blocks 0..=4 are system blocks, which is why
/// the block-count field is biased.
pub const FIRST_USER_BLOCK: u32 = 5;

/// Largest `num_blocks` the biased 4-bit field can hold:
/// `11 + FIRST_USER_BLOCK - 1 = 15`.
pub const MAX_NUM_BLOCKS: u8 = 11;

/// EM4x05/EM4x69 modulation schemes. The discriminants are the raw 4-bit
/// field codes; code 7 and codes above FSK2 are unused by the chip.
#[repr(u32)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Em4x05Modulation {
    #[default]
    #[display(fmt = "NRZ")]
    Nrz = 0x0,
    Manchester = 0x1,
    Biphase = 0x2,
    /// Not supported by all 4x05/4x69 chips.
    Miller = 0x3,
    /// Not supported by all 4x05/4x69 chips.
    #[display(fmt = "PSK1")]
    Psk1 = 0x4,
    /// Not supported by all 4x05/4x69 chips.
    #[display(fmt = "PSK2")]
    Psk2 = 0x5,
    /// Not supported by all 4x05/4x69 chips.
    #[display(fmt = "PSK3")]
    Psk3 = 0x6,
    /// Not supported by all 4x05/4x69 chips.
    #[display(fmt = "FSK1")]
    Fsk1 = 0x8,
    /// Not supported by all 4x05/4x69 chips.
    #[display(fmt = "FSK2")]
    Fsk2 = 0x9,
}

impl Em4x05Modulation {
    /// The raw 4-bit field code, before shifting into position.
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Reverse-map a 4-bit field code; 0x7 and 0xA..=0xF map to `None`.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0x0 => Some(Self::Nrz),
            0x1 => Some(Self::Manchester),
            0x2 => Some(Self::Biphase),
            0x3 => Some(Self::Miller),
            0x4 => Some(Self::Psk1),
            0x5 => Some(Self::Psk2),
            0x6 => Some(Self::Psk3),
            0x8 => Some(Self::Fsk1),
            0x9 => Some(Self::Fsk2),
            _ => None,
        }
    }
}

/// Structured view of the EM4x05/EM4x69 configuration word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Em4x05Config {
    /// Modulation scheme.
    pub modulation: Em4x05Modulation,
    /// Carrier clock divisor; any even value in [2, 130].
    pub bit_rate: u32,
    /// PSK carrier frequency selector.
    pub psk_carrier: PskCarrier,
    /// Number of user blocks sent during default read mode
    /// (1..=[`MAX_NUM_BLOCKS`]; stored biased by the system blocks).
    pub num_blocks: u8,
    /// Login required before reads of user memory.
    pub read_login_required: bool,
    /// Login required before reads of housekeeping words.
    pub read_hk_login_required: bool,
    /// Login required before writes to user memory.
    pub write_login_required: bool,
    /// Login required before writes to housekeeping words.
    pub write_hk_login_required: bool,
    /// Tag sends the written word back after a write.
    pub read_after_write: bool,
    /// The disable command is honored.
    pub disable_allowed: bool,
    /// Reader-talks-first mode.
    pub reader_talk_first: bool,
}

impl Default for Em4x05Config {
    fn default() -> Self {
        Self {
            modulation: Em4x05Modulation::Nrz,
            bit_rate: 32,
            psk_carrier: PskCarrier::Rf2,
            num_blocks: 1,
            read_login_required: false,
            read_hk_login_required: false,
            write_login_required: false,
            write_hk_login_required: false,
            read_after_write: false,
            disable_allowed: false,
            reader_talk_first: false,
        }
    }
}

impl Em4x05Config {
    /// Pack the parameters into the 32-bit configuration word.
    ///
    /// The block count is validated against the biased 4-bit field before
    /// encoding. The seven behavior flags are independent single bits; no
    /// combination of them is invalid, so that group never fails.
    pub fn encode(&self) -> Result<u32> {
        if self.num_blocks < 1 || self.num_blocks > MAX_NUM_BLOCKS {
            return Err(Error::InvalidField {
                family: FAMILY,
                field: "num blocks",
                value: self.num_blocks.into(),
            });
        }

        let mut reg = computed_rate_field(FAMILY, self.bit_rate)?;
        reg |= self.modulation.code() << MODULATION_SHIFT;
        reg |= self.psk_carrier.code() << PSK_SHIFT;
        reg |= (u32::from(self.num_blocks) + FIRST_USER_BLOCK - 1) << MAXBLOCK_SHIFT;
        if self.read_login_required {
            reg |= READ_LOGIN_REQ;
        }
        if self.read_hk_login_required {
            reg |= READ_HK_LOGIN_REQ;
        }
        if self.write_login_required {
            reg |= WRITE_LOGIN_REQ;
        }
        if self.write_hk_login_required {
            reg |= WRITE_HK_LOGIN_REQ;
        }
        if self.read_after_write {
            reg |= READ_AFTER_WRITE;
        }
        if self.disable_allowed {
            reg |= DISABLE_ALLOWED;
        }
        if self.reader_talk_first {
            reg |= READER_TALK_FIRST;
        }
        Ok(reg)
    }

    /// Unpack a configuration word read back from a tag.
    ///
    /// Modulation codes the chip never uses, the reserved PSK carrier code,
    /// and block-count fields below the system-block bias all fail with
    /// [`Error::UnrecognizedField`].
    pub fn decode(register: u32) -> Result<Self> {
        let mod_bits = (register >> MODULATION_SHIFT) & MODULATION_MASK;
        let modulation = Em4x05Modulation::from_code(mod_bits).ok_or_else(|| {
            debug!("EM4x05 modulation bits {:#04x} match no known scheme", mod_bits);
            Error::UnrecognizedField {
                family: FAMILY,
                field: "modulation",
                bits: mod_bits,
            }
        })?;

        let cf_bits = (register >> PSK_SHIFT) & PSK_MASK;
        let psk_carrier = PskCarrier::from_code(cf_bits).ok_or_else(|| {
            debug!("EM4x05 PSK carrier bits {:#04x} are reserved", cf_bits);
            Error::UnrecognizedField {
                family: FAMILY,
                field: "psk carrier",
                bits: cf_bits,
            }
        })?;

        let block_bits = (register >> MAXBLOCK_SHIFT) & MAXBLOCK_MASK;
        if block_bits < FIRST_USER_BLOCK {
            // A field below the bias would decode to zero or a negative
            // block count.
            debug!("EM4x05 block count field {:#04x} is below the system-block bias", block_bits);
            return Err(Error::UnrecognizedField {
                family: FAMILY,
                field: "num blocks",
                bits: block_bits,
            });
        }

        Ok(Self {
            modulation,
            bit_rate: computed_rate_divisor(register & BITRATE_MASK),
            psk_carrier,
            num_blocks: (block_bits - FIRST_USER_BLOCK + 1) as u8,
            read_login_required: register & READ_LOGIN_REQ != 0,
            read_hk_login_required: register & READ_HK_LOGIN_REQ != 0,
            write_login_required: register & WRITE_LOGIN_REQ != 0,
            write_hk_login_required: register & WRITE_HK_LOGIN_REQ != 0,
            read_after_write: register & READ_AFTER_WRITE != 0,
            disable_allowed: register & DISABLE_ALLOWED != 0,
            reader_talk_first: register & READER_TALK_FIRST != 0,
        })
    }
}
