// Sample configurations used across integration tests.

use tagreg::config::{
    Em4x05Config, PskCarrier, T5555Config, T5555Modulation, T55x7Config, T55x7Modulation,
};

/// The canonical T55x7 example: Manchester, RF/64, AOR. Packs to
/// 0x00148200.
pub fn manchester_rf64_aor() -> T55x7Config {
    T55x7Config {
        modulation: T55x7Modulation::Manchester,
        bit_rate: 64,
        aor: true,
        ..Default::default()
    }
}

/// A T5555 configuration whose bit-rate field keeps bits 14 and 15 clear,
/// so every field round-trips bit for bit.
pub fn q5_psk1_low_rate() -> T5555Config {
    T5555Config {
        modulation: T5555Modulation::Psk1,
        bit_rate: 8,
        psk_carrier: PskCarrier::Rf2,
        max_block: 2,
        ..Default::default()
    }
}

/// An EM4x05 configuration exercising the biased block count.
pub fn em4x05_ten_blocks() -> Em4x05Config {
    Em4x05Config {
        num_blocks: 10,
        ..Default::default()
    }
}
