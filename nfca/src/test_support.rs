// nfca/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! Scripts below reproduce what a reader chip delivers for common tags:
//! responses read with inbound CRC disabled carry their CRC_A bytes, those
//! read after the framing switch arrive already stripped.
#![allow(dead_code)]

use crate::constants::{BLOCK_LEN, CASCADE_TAG, PAGE_LEN, SIMPLE_TAG_ATQA};
use crate::frontend::{FrontEnd, MockFrontEnd, MockReply};
use crate::protocol::{bcc, crc_a, uid_checksum};
use crate::session::{Initialized, Session};
use crate::Result;

/// Build a MockFrontEnd pre-seeded with the given responses and return it
/// boxed as a FrontEnd trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn FrontEnd> {
    let mock = MockFrontEnd::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Create and initialize a Session backed by a clone of `mock`, so the caller
/// keeps a probe on the same state.
#[doc(hidden)]
pub fn initialized_mock_session(mock: &MockFrontEnd) -> Result<Session<Initialized>> {
    Session::new_with_frontend(Box::new(mock.clone())).initialize()
}

/// Append `data` with its CRC_A, as received with inbound CRC disabled.
#[doc(hidden)]
pub fn with_crc(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    out.extend_from_slice(&crc_a(data));
    out
}

/// Tag with a 4-byte UID answering REQA, CL1, SELECT; HALT stays silent.
#[doc(hidden)]
pub fn single_cascade_script(atqa: [u8; 2], uid: [u8; 4], sak: u8) -> Vec<MockReply> {
    let mut cl1 = uid.to_vec();
    cl1.push(uid_checksum(&uid));
    vec![
        MockReply::Data(atqa.to_vec()),
        MockReply::Data(cl1),
        MockReply::Data(vec![sak]),
        MockReply::Silent,
    ]
}

/// Level-1 response of a 7-byte UID: cascade tag, three UID bytes, BCC.
#[doc(hidden)]
pub fn cascade_level1(uid: &[u8; 7]) -> Vec<u8> {
    let part = [CASCADE_TAG, uid[0], uid[1], uid[2]];
    let mut out = part.to_vec();
    out.push(bcc(&part));
    out
}

/// Level-2 response of a 7-byte UID: four UID bytes, BCC.
#[doc(hidden)]
pub fn cascade_level2(uid: &[u8; 7]) -> Vec<u8> {
    let mut out = uid[3..].to_vec();
    out.push(bcc(&uid[3..]));
    out
}

/// Tag with a 7-byte UID up to and including SELECT at level 2. Nothing is
/// scripted after SAK2.
#[doc(hidden)]
pub fn double_cascade_script(atqa: [u8; 2], uid: [u8; 7], sak1: u8, sak2: u8) -> Vec<MockReply> {
    vec![
        MockReply::Data(atqa.to_vec()),
        MockReply::Data(cascade_level1(&uid)),
        MockReply::Data(with_crc(&[sak1])),
        MockReply::Data(cascade_level2(&uid)),
        MockReply::Data(vec![sak2]),
    ]
}

/// First 16 bytes of a simple memory tag: identity area with valid BCC0 and
/// BCC1, then lock and capability bytes.
#[doc(hidden)]
pub fn simple_tag_memory(uid: &[u8; 7]) -> [u8; PAGE_LEN] {
    let mut mem = [0u8; PAGE_LEN];
    mem[..3].copy_from_slice(&uid[..3]);
    mem[3] = CASCADE_TAG ^ bcc(&uid[..3]);
    mem[4..8].copy_from_slice(&uid[3..]);
    mem[8] = bcc(&uid[3..]);
    mem[9] = 0x48;
    mem[12..].copy_from_slice(&[0xE1, 0x10, 0x06, 0x00]);
    mem
}

/// READ answer for `block`: 16 bytes starting at that block, zero past the
/// end of `mem`, CRC already stripped by the chip.
#[doc(hidden)]
pub fn read_response(mem: &[u8; PAGE_LEN], block: usize) -> Vec<u8> {
    let mut out = vec![0u8; PAGE_LEN];
    let start = block * BLOCK_LEN;
    let n = PAGE_LEN - start;
    out[..n].copy_from_slice(&mem[start..]);
    out
}

/// Full simple memory tag: double cascade with the simple-tag signature,
/// followed by the four block reads.
#[doc(hidden)]
pub fn simple_tag_script(uid: [u8; 7], mem: &[u8; PAGE_LEN]) -> Vec<MockReply> {
    let mut script = double_cascade_script(SIMPLE_TAG_ATQA, uid, 0x04, 0x00);
    for block in 0..PAGE_LEN / BLOCK_LEN {
        script.push(MockReply::Data(read_response(mem, block)));
    }
    script
}
