#[path = "../common/mod.rs"]
mod common;

use nfca::discovery::{DiscoveryTimings, discover};
use nfca::frontend::{MockFrontEnd, MockReply};
use nfca::test_support::{double_cascade_script, read_response, simple_tag_memory, simple_tag_script};

#[test]
fn simple_tag_reads_one_page_in_four_blocks() {
    common::init_logging();
    let uid = common::simple_tag_uid();
    let mem = simple_tag_memory(&uid);
    let mut mock = MockFrontEnd::new();
    let probe = mock.clone();
    mock.push_replies(simple_tag_script(uid, &mem));

    let out = discover(&mut mock, &DiscoveryTimings::default()).unwrap();
    let rec = out.tag().unwrap();
    assert!(rec.is_simple_memory_tag());

    let page = rec.memory.unwrap();
    assert!(page.is_complete());
    assert_eq!(page.as_bytes(), &mem[..]);
    assert!(page.identity_check().unwrap().is_ok());
    assert_eq!(page.identity_uid().unwrap(), uid);
    // Bulk read ends the attempt: no HALT
    assert!(rec.halt.is_none());

    let reads: Vec<_> = probe
        .sent()
        .into_iter()
        .filter(|f| f.data[0] == 0x30)
        .collect();
    assert_eq!(reads.len(), 4);
    for (i, f) in reads.iter().enumerate() {
        assert_eq!(f.data, vec![0x30, i as u8]);
        assert!(f.crc_on_tx);
        assert_eq!(f.timeout_ms, 20);
    }
}

#[test]
fn timeout_on_third_block_keeps_first_two() {
    let uid = common::simple_tag_uid();
    let mem = simple_tag_memory(&uid);
    let mut mock = MockFrontEnd::new();
    let probe = mock.clone();
    mock.push_replies(double_cascade_script([0x44, 0x00], uid, 0x04, 0x00));
    mock.push_response(read_response(&mem, 0));
    mock.push_response(read_response(&mem, 1));
    mock.push_silence();
    mock.push_response(read_response(&mem, 3));

    let out = discover(&mut mock, &DiscoveryTimings::default()).unwrap();
    let page = out.tag().unwrap().memory.unwrap();
    assert_eq!(page.len(), 8);
    assert_eq!(page.blocks(), 2);
    assert_eq!(page.as_bytes(), &mem[..8]);
    // 8 bytes cannot cover BCC1
    assert!(page.identity_check().is_none());
    // reading stopped at the silent block
    assert_eq!(probe.sent().iter().filter(|f| f.data[0] == 0x30).count(), 3);
    assert_eq!(mock.pending_responses(), 1);
}

#[test]
fn corrupted_identity_area_is_flagged_not_dropped() {
    let uid = common::simple_tag_uid();
    let mut mem = simple_tag_memory(&uid);
    mem[8] ^= 0xFF;
    let mut mock = MockFrontEnd::new();
    mock.push_replies(simple_tag_script(uid, &mem));

    let out = discover(&mut mock, &DiscoveryTimings::default()).unwrap();
    let rec = out.tag().unwrap();
    let check = rec.memory.unwrap().identity_check().unwrap();
    assert!(check.bcc0.is_ok());
    assert!(!check.bcc1.is_ok());
    assert!(rec.has_checksum_failure());
}

#[test]
fn sak2_high_byte_blocks_bulk_read() {
    let uid = common::simple_tag_uid();
    let mut mock = MockFrontEnd::new();
    let probe = mock.clone();
    let mut script = double_cascade_script([0x44, 0x00], uid, 0x04, 0x00);
    // SAK2 delivered with two trailing bytes: the second raw byte is non-zero
    script[4] = MockReply::Data(vec![0x00, 0x12, 0x34]);
    mock.push_replies(script);

    let out = discover(&mut mock, &DiscoveryTimings::default()).unwrap();
    let rec = out.tag().unwrap();
    assert!(rec.memory.is_none());
    assert!(rec.halt.is_some());
    assert_eq!(probe.sent().last().unwrap().data, vec![0x50, 0x00]);
}

#[test]
fn short_answer_on_second_block_stops_at_block_boundary() {
    let uid = common::simple_tag_uid();
    let mem = simple_tag_memory(&uid);
    let mut mock = MockFrontEnd::new();
    let probe = mock.clone();
    mock.push_replies(double_cascade_script([0x44, 0x00], uid, 0x04, 0x00));
    mock.push_response(read_response(&mem, 0));
    // 4-bit NAK delivered as a single byte
    mock.push_response(vec![0x00]);
    mock.push_response(read_response(&mem, 2));
    mock.push_response(read_response(&mem, 3));

    let out = discover(&mut mock, &DiscoveryTimings::default()).unwrap();
    let page = out.tag().unwrap().memory.unwrap();
    assert_eq!(page.len(), 4);
    assert_eq!(page.blocks(), 1);
    assert_eq!(page.as_bytes(), &mem[..4]);
    // too short for BCC1, so no false checksum failure
    assert!(page.identity_check().is_none());
    assert_eq!(probe.sent().iter().filter(|f| f.data[0] == 0x30).count(), 2);
    assert_eq!(mock.pending_responses(), 2);
}
