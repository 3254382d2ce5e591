// Spot checks of the opcode tables against the published command listings.

use tagreg::ProtocolFamily;
use tagreg::catalog::CommandCode;
use tagreg::catalog::hitag::{Hitag1Command, Hitag2Command};
use tagreg::catalog::iclass::IclassCommand;
use tagreg::catalog::iso14443a::Iso14443aCommand;
use tagreg::catalog::iso14443b::{Iso14443bCommand, Srix4kCommand};
use tagreg::catalog::iso15693::Iso15693Command;
use tagreg::catalog::iso7816::Iso7816Instruction;
use tagreg::catalog::mifare::MifareCommand;
use tagreg::catalog::topaz::TopazCommand;

#[test]
fn protocol_family_discriminants_match_the_wire() {
    assert_eq!(ProtocolFamily::Iso14443a.as_u8(), 0);
    assert_eq!(ProtocolFamily::Iclass.as_u8(), 1);
    assert_eq!(ProtocolFamily::Iso14443b.as_u8(), 2);
    assert_eq!(ProtocolFamily::Topaz.as_u8(), 3);
    assert_eq!(ProtocolFamily::Mifare.as_u8(), 4);
    assert_eq!(ProtocolFamily::Iso7816_4.as_u8(), 5);
    assert_eq!(ProtocolFamily::Iso15693.as_u8(), 6);
    assert_eq!(ProtocolFamily::Iso14443_4.as_u8(), 7);
}

#[test]
fn seven_bit_short_frames() {
    // REQA/WUPA-class commands are transmitted as 7-bit short frames.
    for (code, bits) in [
        (Iso14443aCommand::Reqa.code(), Iso14443aCommand::Reqa.bits()),
        (Iso14443aCommand::Wupa.code(), Iso14443aCommand::Wupa.bits()),
        (TopazCommand::Reqa.code(), TopazCommand::Reqa.bits()),
        (TopazCommand::Wupa.code(), TopazCommand::Wupa.bits()),
        (MifareCommand::MagicWupc1.code(), MifareCommand::MagicWupc1.bits()),
    ] {
        assert!(code == 0x26 || code == 0x52 || code == 0x40);
        assert_eq!(bits, 7);
    }
}

#[test]
fn one_opcode_per_family_spot_check() {
    assert_eq!(Iso14443aCommand::AnticollOrSelect.code(), 0x93);
    assert_eq!(Iso14443bCommand::Attrib.code(), 0x1D);
    assert_eq!(Srix4kCommand::Initiate.code(), 0x06);
    assert_eq!(Iso15693Command::Inventory.code(), 0x01);
    assert_eq!(IclassCommand::Pagesel.code(), 0x84);
    assert_eq!(TopazCommand::Rid.code(), 0x78);
    assert_eq!(MifareCommand::AuthKeyA.code(), 0x60);
    assert_eq!(Iso7816Instruction::SelectFile.code(), 0xA4);
    assert_eq!(Hitag1Command::ReadPlainPage.code(), 0xC0);
    assert_eq!(Hitag2Command::WritePage.code(), 0x82);
}

#[test]
fn hitag_sub_byte_lengths() {
    assert_eq!(Hitag1Command::Select.bits(), 5);
    assert_eq!(Hitag1Command::ReadPlainPage.bits(), 4);
    assert_eq!(Hitag2Command::StartAuth.bits(), 5);
}

#[test]
fn commands_can_be_dispatched_through_the_trait() {
    // The catalog is consumed by frame builders generic over CommandCode.
    fn frame_header(cmd: &dyn CommandCode) -> (u8, u8) {
        (cmd.code(), cmd.bits())
    }
    assert_eq!(frame_header(&Iso14443aCommand::Reqa), (0x26, 7));
    assert_eq!(frame_header(&Iso15693Command::ReadBlock), (0x20, 8));
    assert_eq!(frame_header(&Hitag1Command::Halt), (0x70, 4));
}
