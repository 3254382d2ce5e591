// Response status tables: reverse lookups must be exact and unknown codes
// must miss rather than map to a guessed meaning.

use tagreg::catalog::iso15693::Iso15693Status;
use tagreg::catalog::iso7816::StatusWord;
use tagreg::catalog::mifare::CardResponse;

#[test]
fn iso15693_error_codes_roundtrip() {
    let table = [
        (0x00u8, Iso15693Status::NoError),
        (0x01, Iso15693Status::CmdNotSupported),
        (0x02, Iso15693Status::CmdNotRecognized),
        (0x03, Iso15693Status::CmdOptionNotSupported),
        (0x0F, Iso15693Status::Generic),
        (0x10, Iso15693Status::BlockUnavailable),
        (0x11, Iso15693Status::BlockAlreadyLocked),
        (0x12, Iso15693Status::BlockLocked),
        (0x13, Iso15693Status::BlockWriteFailed),
        (0x14, Iso15693Status::BlockLockFailed),
    ];
    for (code, status) in table {
        assert_eq!(Iso15693Status::from_code(code), Some(status));
        assert_eq!(status.code(), code);
        assert!(!status.description().is_empty());
    }
}

#[test]
fn iso15693_unknown_codes_miss() {
    for code in [0x04u8, 0x0E, 0x15, 0x80, 0xFF] {
        assert_eq!(Iso15693Status::from_code(code), None);
    }
}

#[test]
fn iso7816_status_word_classes() {
    assert!(StatusWord::new(0x9000).is_ok());
    assert!(StatusWord::from_bytes(0x6A, 0x82).is_error());
    assert!(!StatusWord::from_bytes(0x6A, 0x82).is_ok());
    assert!(!StatusWord::new(0x9100).is_error());
}

#[test]
fn mifare_card_answers() {
    assert!(CardResponse::from_code(0x0A).unwrap().is_ack());
    assert!(!CardResponse::from_code(0x04).unwrap().is_ack());
    assert!(!CardResponse::from_code(0x05).unwrap().is_ack());
    assert_eq!(CardResponse::from_code(0x0B), None);
}
