// tagreg-rs/tagreg/src/config/t55x7.rs

//! T55x7 configuration register codec (block 0, page 0).

use super::PskCarrier;
use crate::types::TagFamily;
use crate::{Error, Result};
use derive_more::Display;
use log::debug;

const FAMILY: TagFamily = TagFamily::T55x7;

// Block 0 bit assignments.
const POR_DELAY: u32 = 1 << 0;
const ST_TERMINATOR: u32 = 1 << 3;
const PWD: u32 = 1 << 4;
const MAXBLOCK_SHIFT: u32 = 5;
const MAXBLOCK_MASK: u32 = 0x7;
const AOR: u32 = 1 << 9;
const PSKCF_SHIFT: u32 = 10;
const PSKCF_MASK: u32 = 0x3;
const MODULATION_SHIFT: u32 = 12;
const MODULATION_MASK: u32 = 0x1F;
const X_MODE: u32 = 1 << 17;
const BITRATE_SHIFT: u32 = 18;
const BITRATE_MASK: u32 = 0x7;

/// The clock divisors the T55x7 bit-rate field can express, in field-code
/// order: `SUPPORTED_CLOCKS[n]` is the divisor encoded by field code `n`.
pub const SUPPORTED_CLOCKS: [u32; 8] = [8, 16, 32, 40, 50, 64, 100, 128];

/// Map a carrier clock divisor to its 3-bit bit-rate field code (0x0..0x7,
/// before shifting into position). The input set is closed: divisors outside
/// [`SUPPORTED_CLOCKS`] have no encoding and are rejected rather than
/// fabricated.
pub fn clock_code(divisor: u32) -> Result<u32> {
    SUPPORTED_CLOCKS
        .iter()
        .position(|&d| d == divisor)
        .map(|n| n as u32)
        .ok_or(Error::InvalidField {
            family: FAMILY,
            field: "clock divisor",
            value: divisor,
        })
}

/// Inverse of [`clock_code`]. Total over 3-bit codes, so decode never fails
/// on this field.
pub fn clock_divisor(code: u32) -> u32 {
    SUPPORTED_CLOCKS[(code & BITRATE_MASK) as usize]
}

/// The eleven modulation schemes a T55x7 can be programmed with. The
/// discriminants are the raw 5-bit field codes.
#[repr(u32)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum T55x7Modulation {
    /// Direct (NRZ) output, no modulation.
    #[default]
    Direct = 0x00,
    #[display(fmt = "PSK1")]
    Psk1 = 0x01,
    #[display(fmt = "PSK2")]
    Psk2 = 0x02,
    #[display(fmt = "PSK3")]
    Psk3 = 0x03,
    #[display(fmt = "FSK1")]
    Fsk1 = 0x04,
    #[display(fmt = "FSK2")]
    Fsk2 = 0x05,
    #[display(fmt = "FSK1a")]
    Fsk1a = 0x06,
    #[display(fmt = "FSK2a")]
    Fsk2a = 0x07,
    Manchester = 0x08,
    Biphase = 0x10,
    /// Biphase with inverted phase (also sold as "conditional dephase").
    Diphase = 0x18,
}

impl T55x7Modulation {
    /// The raw 5-bit field code, before shifting into position.
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Reverse-map a 5-bit field code; most of the 32 values are unused by
    /// the chip and map to `None`.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0x00 => Some(Self::Direct),
            0x01 => Some(Self::Psk1),
            0x02 => Some(Self::Psk2),
            0x03 => Some(Self::Psk3),
            0x04 => Some(Self::Fsk1),
            0x05 => Some(Self::Fsk2),
            0x06 => Some(Self::Fsk1a),
            0x07 => Some(Self::Fsk2a),
            0x08 => Some(Self::Manchester),
            0x10 => Some(Self::Biphase),
            0x18 => Some(Self::Diphase),
            _ => None,
        }
    }
}

/// Structured view of the T55x7 configuration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct T55x7Config {
    /// Modulation scheme.
    pub modulation: T55x7Modulation,
    /// Carrier clock divisor; must be one of [`SUPPORTED_CLOCKS`].
    pub bit_rate: u32,
    /// PSK carrier frequency selector (only meaningful for PSK schemes, but
    /// stored regardless).
    pub psk_carrier: PskCarrier,
    /// Highest block transmitted in default read mode (0..=7).
    pub max_block: u8,
    /// Password mode: block 7 holds a password required for writes.
    pub password_enabled: bool,
    /// Answer-on-request: the tag stays silent until addressed.
    pub aor: bool,
    /// Power-on-reset delay before the tag starts modulating.
    pub por_delay: bool,
    /// Transmit a sequence terminator after the data.
    pub sequence_terminator: bool,
    /// Extended mode (X-mode).
    pub x_mode: bool,
}

impl Default for T55x7Config {
    fn default() -> Self {
        Self {
            modulation: T55x7Modulation::Direct,
            bit_rate: 8,
            psk_carrier: PskCarrier::Rf2,
            max_block: 0,
            password_enabled: false,
            aor: false,
            por_delay: false,
            sequence_terminator: false,
            x_mode: false,
        }
    }
}

impl T55x7Config {
    /// Pack the parameters into the 32-bit configuration register.
    ///
    /// Each field is validated against its legal value set before being
    /// shifted into position; a value with no encoding fails with
    /// [`Error::InvalidField`].
    pub fn encode(&self) -> Result<u32> {
        if u32::from(self.max_block) > MAXBLOCK_MASK {
            return Err(Error::InvalidField {
                family: FAMILY,
                field: "max block",
                value: self.max_block.into(),
            });
        }

        let mut reg = self.modulation.code() << MODULATION_SHIFT;
        reg |= clock_code(self.bit_rate)? << BITRATE_SHIFT;
        reg |= self.psk_carrier.code() << PSKCF_SHIFT;
        reg |= u32::from(self.max_block) << MAXBLOCK_SHIFT;
        if self.password_enabled {
            reg |= PWD;
        }
        if self.aor {
            reg |= AOR;
        }
        if self.por_delay {
            reg |= POR_DELAY;
        }
        if self.sequence_terminator {
            reg |= ST_TERMINATOR;
        }
        if self.x_mode {
            reg |= X_MODE;
        }
        Ok(reg)
    }

    /// Unpack a configuration register read back from a tag.
    ///
    /// Fields whose bits match no known symbolic value fail with
    /// [`Error::UnrecognizedField`] carrying the raw bits.
    pub fn decode(register: u32) -> Result<Self> {
        let mod_bits = (register >> MODULATION_SHIFT) & MODULATION_MASK;
        let modulation = T55x7Modulation::from_code(mod_bits).ok_or_else(|| {
            debug!("T55x7 modulation bits {:#04x} match no known scheme", mod_bits);
            Error::UnrecognizedField {
                family: FAMILY,
                field: "modulation",
                bits: mod_bits,
            }
        })?;

        let cf_bits = (register >> PSKCF_SHIFT) & PSKCF_MASK;
        let psk_carrier = PskCarrier::from_code(cf_bits).ok_or_else(|| {
            debug!("T55x7 PSK carrier bits {:#04x} are reserved", cf_bits);
            Error::UnrecognizedField {
                family: FAMILY,
                field: "psk carrier",
                bits: cf_bits,
            }
        })?;

        Ok(Self {
            modulation,
            bit_rate: clock_divisor((register >> BITRATE_SHIFT) & BITRATE_MASK),
            psk_carrier,
            max_block: ((register >> MAXBLOCK_SHIFT) & MAXBLOCK_MASK) as u8,
            password_enabled: register & PWD != 0,
            aor: register & AOR != 0,
            por_delay: register & POR_DELAY != 0,
            sequence_terminator: register & ST_TERMINATOR != 0,
            x_mode: register & X_MODE != 0,
        })
    }
}
