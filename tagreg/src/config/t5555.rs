// tagreg-rs/tagreg/src/config/t5555.rs

//! T5555 (Q5) configuration register codec (page 0, block 0).
//!
//! The Q5 stores its bit rate as a computed field, `n = (RF - 2) / 2`,
//! rather than the T55x7's fixed divisor table. The field spans bits
//! 12..=17 and therefore shares bits 14 and 15 with the fast-write and
//! page-select flags; the register map defines both, and decode reports
//! each view of the shared bits independently.

use super::{PskCarrier, computed_rate_divisor, computed_rate_field};
use crate::types::TagFamily;
use crate::{Error, Result};
use derive_more::Display;
use log::debug;

const FAMILY: TagFamily = TagFamily::T5555;

// Page 0 block 0 bit assignments.
const ST_TERMINATOR: u32 = 1 << 0;
const MAXBLOCK_SHIFT: u32 = 1;
const MAXBLOCK_MASK: u32 = 0x7;
const MODULATION_SHIFT: u32 = 4;
const MODULATION_MASK: u32 = 0x7;
const INVERT_OUTPUT: u32 = 1 << 7;
const PSK_SHIFT: u32 = 8;
const PSK_MASK: u32 = 0x3;
const USE_PWD: u32 = 1 << 10;
const USE_AOR: u32 = 1 << 11;
const BITRATE_SHIFT: u32 = 12;
const BITRATE_MASK: u32 = 0x3F;
const FAST_WRITE: u32 = 1 << 14;
const PAGE_SELECT: u32 = 1 << 15;

/// The eight modulation schemes of the T5555. The 3-bit field is fully
/// populated, so decode of this field never fails.
#[repr(u32)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum T5555Modulation {
    #[default]
    Manchester = 0x0,
    #[display(fmt = "PSK1")]
    Psk1 = 0x1,
    #[display(fmt = "PSK2")]
    Psk2 = 0x2,
    #[display(fmt = "PSK3")]
    Psk3 = 0x3,
    #[display(fmt = "FSK1")]
    Fsk1 = 0x4,
    #[display(fmt = "FSK2")]
    Fsk2 = 0x5,
    Biphase = 0x6,
    /// Direct (NRZ) output, no modulation.
    Direct = 0x7,
}

impl T5555Modulation {
    /// The raw 3-bit field code, before shifting into position.
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Reverse-map a 3-bit field code. Total over the masked field.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0x0 => Some(Self::Manchester),
            0x1 => Some(Self::Psk1),
            0x2 => Some(Self::Psk2),
            0x3 => Some(Self::Psk3),
            0x4 => Some(Self::Fsk1),
            0x5 => Some(Self::Fsk2),
            0x6 => Some(Self::Biphase),
            0x7 => Some(Self::Direct),
            _ => None,
        }
    }
}

/// Structured view of the T5555 (Q5) configuration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct T5555Config {
    /// Modulation scheme.
    pub modulation: T5555Modulation,
    /// Carrier clock divisor; any even value in [2, 130].
    pub bit_rate: u32,
    /// PSK carrier frequency selector.
    pub psk_carrier: PskCarrier,
    /// Highest block transmitted in default read mode (0..=7).
    pub max_block: u8,
    /// Transmit a sequence terminator after the data.
    pub sequence_terminator: bool,
    /// Invert the modulated output.
    pub invert_output: bool,
    /// Password mode.
    pub password_enabled: bool,
    /// Answer-on-request.
    pub aor: bool,
    /// Fast-write mode. Shares bit 14 with the bit-rate field.
    pub fast_write: bool,
    /// Page-select. Shares bit 15 with the bit-rate field.
    pub page_select: bool,
}

impl Default for T5555Config {
    fn default() -> Self {
        Self {
            modulation: T5555Modulation::Manchester,
            bit_rate: 2,
            psk_carrier: PskCarrier::Rf2,
            max_block: 0,
            sequence_terminator: false,
            invert_output: false,
            password_enabled: false,
            aor: false,
            fast_write: false,
            page_select: false,
        }
    }
}

impl T5555Config {
    /// Pack the parameters into the 32-bit configuration register.
    ///
    /// The bit rate is computed, not table-looked-up: an odd or out-of-range
    /// divisor fails with [`Error::InvalidField`] before the forward formula
    /// can produce a wrong or overflowing field.
    pub fn encode(&self) -> Result<u32> {
        if u32::from(self.max_block) > MAXBLOCK_MASK {
            return Err(Error::InvalidField {
                family: FAMILY,
                field: "max block",
                value: self.max_block.into(),
            });
        }

        let mut reg = self.modulation.code() << MODULATION_SHIFT;
        reg |= computed_rate_field(FAMILY, self.bit_rate)? << BITRATE_SHIFT;
        reg |= self.psk_carrier.code() << PSK_SHIFT;
        reg |= u32::from(self.max_block) << MAXBLOCK_SHIFT;
        if self.sequence_terminator {
            reg |= ST_TERMINATOR;
        }
        if self.invert_output {
            reg |= INVERT_OUTPUT;
        }
        if self.password_enabled {
            reg |= USE_PWD;
        }
        if self.aor {
            reg |= USE_AOR;
        }
        if self.fast_write {
            reg |= FAST_WRITE;
        }
        if self.page_select {
            reg |= PAGE_SELECT;
        }
        Ok(reg)
    }

    /// Unpack a configuration register read back from a tag.
    ///
    /// The bit-rate decode is total: every 6-bit field value maps to a valid
    /// divisor under `RF = n * 2 + 2`. The asymmetry with encode (which
    /// validates) is intentional.
    pub fn decode(register: u32) -> Result<Self> {
        let cf_bits = (register >> PSK_SHIFT) & PSK_MASK;
        let psk_carrier = PskCarrier::from_code(cf_bits).ok_or_else(|| {
            debug!("T5555 PSK carrier bits {:#04x} are reserved", cf_bits);
            Error::UnrecognizedField {
                family: FAMILY,
                field: "psk carrier",
                bits: cf_bits,
            }
        })?;

        // The 3-bit modulation field is fully populated; from_code cannot
        // miss after masking.
        let modulation =
            T5555Modulation::from_code((register >> MODULATION_SHIFT) & MODULATION_MASK)
                .expect("3-bit T5555 modulation field is total");

        Ok(Self {
            modulation,
            bit_rate: computed_rate_divisor((register >> BITRATE_SHIFT) & BITRATE_MASK),
            psk_carrier,
            max_block: ((register >> MAXBLOCK_SHIFT) & MAXBLOCK_MASK) as u8,
            sequence_terminator: register & ST_TERMINATOR != 0,
            invert_output: register & INVERT_OUTPUT != 0,
            password_enabled: register & USE_PWD != 0,
            aor: register & USE_AOR != 0,
            fast_write: register & FAST_WRITE != 0,
            page_select: register & PAGE_SELECT != 0,
        })
    }
}
