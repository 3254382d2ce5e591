#[path = "../common/mod.rs"]
mod common;

use tagreg::Error;
use tagreg::config::T5555Config;

#[test]
fn rf64_encodes_field_31_and_decodes_back() {
    let cfg = T5555Config {
        bit_rate: 64,
        ..Default::default()
    };
    let reg = cfg.encode().unwrap();
    // field = (64 - 2) / 2 = 31, stored at bit 12
    assert_eq!((reg >> 12) & 0x3F, 31);
    // divisor = 31 * 2 + 2 = 64
    assert_eq!(T5555Config::decode(reg).unwrap().bit_rate, 64);
}

#[test]
fn odd_divisor_fails_invalid_field() {
    let cfg = T5555Config {
        bit_rate: 65,
        ..Default::default()
    };
    match cfg.encode() {
        Err(Error::InvalidField { field, value, .. }) => {
            assert_eq!(field, "clock divisor");
            assert_eq!(value, 65);
        }
        other => panic!("expected InvalidField, got: {:?}", other),
    }
}

#[test]
fn decode_of_any_bitrate_field_succeeds() {
    // Asymmetric validation: encode rejects out-of-domain divisors, but
    // every stored 6-bit field maps to a valid divisor on decode.
    for field in 0..64u32 {
        let reg = field << 12;
        let decoded = T5555Config::decode(reg).unwrap();
        assert_eq!(decoded.bit_rate, field * 2 + 2);
    }
}

#[test]
fn fixture_roundtrips_exactly() {
    let cfg = common::fixtures::q5_psk1_low_rate();
    let reg = cfg.encode().unwrap();
    assert_eq!(T5555Config::decode(reg).unwrap(), cfg);
}

#[test]
fn flags_and_fields_land_on_their_bits() {
    let cfg = T5555Config {
        invert_output: true,
        password_enabled: true,
        aor: true,
        ..Default::default()
    };
    let reg = cfg.encode().unwrap();
    assert_eq!(reg, (1 << 7) | (1 << 10) | (1 << 11));
}
