#[path = "../common/mod.rs"]
mod common;

use nfca::protocol::{bcc, crc_a, uid_checksum, verify_identity_block, verify_uid};

#[test]
fn uid_checksum_accepts_then_rejects_one_bit_flip() {
    let uid = common::sample_uid4();
    let check = uid_checksum(&uid);
    assert!(verify_uid(&uid, check).is_ok());

    let mut flipped = uid;
    flipped[1] ^= 0x10;
    let verdict = verify_uid(&flipped, check);
    assert!(!verdict.is_ok());
    assert_eq!(verdict.actual, check);
}

#[test]
fn identity_block_from_fixture_bytes() {
    // 04 A1 B2 | BCC0 | C3 D4 E5 F6 | BCC1
    let mut area = hex::decode("04a1b200c3d4e5f600").unwrap();
    area[3] = 0x88 ^ 0x04 ^ 0xA1 ^ 0xB2;
    area[8] = bcc(&area[4..8]);
    let check = verify_identity_block(&area).unwrap();
    assert!(check.is_ok());
    assert_eq!(check.bcc0.expected, area[3]);
}

#[test]
fn crc_a_of_common_commands() {
    // HLTA as sent on the wire: 50 00 57 CD
    assert_eq!(crc_a(&[0x50, 0x00]), [0x57, 0xCD]);
    let framed = nfca::test_support::with_crc(&[0x30, 0x00]);
    assert_eq!(framed.len(), 4);
    assert_eq!(crc_a(&framed), [0x00, 0x00]);
}
