// Property tests for the codec round-trip contracts: encode then decode
// reproduces the parameters, decode then encode reproduces the register,
// and decode never panics on arbitrary input.

use proptest::prelude::*;
use tagreg::config::{
    Em4x05Config, Em4x05Modulation, PskCarrier, T5555Config, T5555Modulation, T55x7Config,
    T55x7Modulation,
};
use tagreg::config::t55x7::SUPPORTED_CLOCKS;

fn psk_carriers() -> impl Strategy<Value = PskCarrier> {
    prop::sample::select(vec![PskCarrier::Rf2, PskCarrier::Rf4, PskCarrier::Rf8])
}

fn t55x7_modulations() -> impl Strategy<Value = T55x7Modulation> {
    prop::sample::select(vec![
        T55x7Modulation::Direct,
        T55x7Modulation::Psk1,
        T55x7Modulation::Psk2,
        T55x7Modulation::Psk3,
        T55x7Modulation::Fsk1,
        T55x7Modulation::Fsk2,
        T55x7Modulation::Fsk1a,
        T55x7Modulation::Fsk2a,
        T55x7Modulation::Manchester,
        T55x7Modulation::Biphase,
        T55x7Modulation::Diphase,
    ])
}

fn t5555_modulations() -> impl Strategy<Value = T5555Modulation> {
    prop::sample::select(vec![
        T5555Modulation::Manchester,
        T5555Modulation::Psk1,
        T5555Modulation::Psk2,
        T5555Modulation::Psk3,
        T5555Modulation::Fsk1,
        T5555Modulation::Fsk2,
        T5555Modulation::Biphase,
        T5555Modulation::Direct,
    ])
}

fn em4x05_modulations() -> impl Strategy<Value = Em4x05Modulation> {
    prop::sample::select(vec![
        Em4x05Modulation::Nrz,
        Em4x05Modulation::Manchester,
        Em4x05Modulation::Biphase,
        Em4x05Modulation::Miller,
        Em4x05Modulation::Psk1,
        Em4x05Modulation::Psk2,
        Em4x05Modulation::Psk3,
        Em4x05Modulation::Fsk1,
        Em4x05Modulation::Fsk2,
    ])
}

proptest! {
    #[test]
    fn t55x7_params_roundtrip(
        modulation in t55x7_modulations(),
        bit_rate in prop::sample::select(SUPPORTED_CLOCKS.to_vec()),
        psk_carrier in psk_carriers(),
        max_block in 0u8..=7,
        password_enabled in any::<bool>(),
        aor in any::<bool>(),
        por_delay in any::<bool>(),
        sequence_terminator in any::<bool>(),
        x_mode in any::<bool>(),
    ) {
        let cfg = T55x7Config {
            modulation,
            bit_rate,
            psk_carrier,
            max_block,
            password_enabled,
            aor,
            por_delay,
            sequence_terminator,
            x_mode,
        };
        let reg = cfg.encode().unwrap();
        prop_assert_eq!(T55x7Config::decode(reg).unwrap(), cfg);
    }

    // T5555: the bit-rate field shares bits 14 and 15 with the fast-write
    // and page-select flags, so a record only round-trips exactly when the
    // flags agree with bits 2 and 3 of the computed field. The generator
    // derives the flags from the divisor accordingly.
    #[test]
    fn t5555_params_roundtrip(
        modulation in t5555_modulations(),
        field in 0u32..64,
        psk_carrier in psk_carriers(),
        max_block in 0u8..=7,
        sequence_terminator in any::<bool>(),
        invert_output in any::<bool>(),
        password_enabled in any::<bool>(),
        aor in any::<bool>(),
    ) {
        let bit_rate = field * 2 + 2;
        let cfg = T5555Config {
            modulation,
            bit_rate,
            psk_carrier,
            max_block,
            sequence_terminator,
            invert_output,
            password_enabled,
            aor,
            fast_write: field & 0b0100 != 0,
            page_select: field & 0b1000 != 0,
        };
        let reg = cfg.encode().unwrap();
        prop_assert_eq!(T5555Config::decode(reg).unwrap(), cfg);
    }

    #[test]
    fn em4x05_params_roundtrip(
        modulation in em4x05_modulations(),
        field in 0u32..64,
        psk_carrier in psk_carriers(),
        num_blocks in 1u8..=11,
        flag_bits in 0u32..128,
    ) {
        let cfg = Em4x05Config {
            modulation,
            bit_rate: field * 2 + 2,
            psk_carrier,
            num_blocks,
            read_login_required: flag_bits & 1 != 0,
            read_hk_login_required: flag_bits & 2 != 0,
            write_login_required: flag_bits & 4 != 0,
            write_hk_login_required: flag_bits & 8 != 0,
            read_after_write: flag_bits & 16 != 0,
            disable_allowed: flag_bits & 32 != 0,
            reader_talk_first: flag_bits & 64 != 0,
        };
        let reg = cfg.encode().unwrap();
        prop_assert_eq!(Em4x05Config::decode(reg).unwrap(), cfg);
    }

    // Registers whose bits are entirely within legal field ranges survive
    // decode-then-encode bit for bit.
    #[test]
    fn t55x7_register_roundtrip(
        mod_code in prop::sample::select(vec![
            0x00u32, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x10, 0x18,
        ]),
        rate_code in 0u32..8,
        cf_code in 0u32..3,
        max_block in 0u32..8,
        flags in 0u32..32,
    ) {
        let mut reg = (mod_code << 12) | (rate_code << 18) | (cf_code << 10) | (max_block << 5);
        if flags & 1 != 0 { reg |= 1 << 0; }  // POR delay
        if flags & 2 != 0 { reg |= 1 << 3; }  // sequence terminator
        if flags & 4 != 0 { reg |= 1 << 4; }  // password
        if flags & 8 != 0 { reg |= 1 << 9; }  // AOR
        if flags & 16 != 0 { reg |= 1 << 17; } // X-mode
        let cfg = T55x7Config::decode(reg).unwrap();
        prop_assert_eq!(cfg.encode().unwrap(), reg);
    }

    #[test]
    fn t5555_register_roundtrip(
        low_bits in 0u32..256,
        cf_code in 0u32..3,
        pwd_aor in 0u32..4,
        rate_field in 0u32..64,
    ) {
        // Bits 0..=7 (ST, max block, modulation, invert) are all total.
        let reg = low_bits | (cf_code << 8) | (pwd_aor << 10) | (rate_field << 12);
        let cfg = T5555Config::decode(reg).unwrap();
        prop_assert_eq!(cfg.encode().unwrap(), reg);
    }

    #[test]
    fn em4x05_register_roundtrip(
        rate_field in 0u32..64,
        mod_code in prop::sample::select(vec![0x0u32, 0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x8, 0x9]),
        cf_code in 0u32..3,
        block_field in 5u32..16,
        flag_bits in 0u32..128,
    ) {
        let reg = rate_field
            | (mod_code << 6)
            | (cf_code << 10)
            | (block_field << 14)
            | (flag_bits << 18);
        let cfg = Em4x05Config::decode(reg).unwrap();
        prop_assert_eq!(cfg.encode().unwrap(), reg);
    }

    // Decoders may reject arbitrary registers but must never panic.
    #[test]
    fn decode_never_panics(reg in any::<u32>()) {
        let _ = T55x7Config::decode(reg);
        let _ = T5555Config::decode(reg);
        let _ = Em4x05Config::decode(reg);
    }
}
