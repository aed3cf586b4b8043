#[path = "../common/mod.rs"]
mod common;

use nfca::discovery::{DiscoveryTimings, discover};
use nfca::frontend::MockFrontEnd;
use nfca::types::Framing;

#[test]
fn inbound_crc_switches_on_before_level2_select() {
    let mut mock = MockFrontEnd::new();
    mock.push_replies(nfca::test_support::double_cascade_script(
        common::double_uid_atqa(),
        common::sample_uid7(),
        0x04,
        0x00,
    ));

    discover(&mut mock, &DiscoveryTimings::default()).unwrap();

    // reset at start, switch once before the final select
    assert_eq!(
        mock.framings(),
        vec![Framing::ANTICOLLISION, Framing::CRC_ON_RECEIVE]
    );
    let rx_crc: Vec<(u8, bool)> = mock
        .sent()
        .iter()
        .map(|f| (f.data[0], f.crc_on_rx))
        .collect();
    assert_eq!(
        rx_crc,
        vec![
            (0x26, false),
            (0x93, false),
            (0x93, false),
            (0x95, false),
            (0x95, true),
            (0x50, true),
        ]
    );
}

#[test]
fn exchange_timeouts_follow_timings() {
    let mut mock = MockFrontEnd::new();
    mock.push_replies(nfca::test_support::single_cascade_script(
        [0x04, 0x00],
        common::sample_uid4(),
        0x08,
    ));
    let timings = DiscoveryTimings {
        request_ms: 3,
        anticoll_ms: 4,
        select_ms: 5,
        read_ms: 6,
        halt_ms: 7,
    };

    discover(&mut mock, &timings).unwrap();
    let timeouts: Vec<u64> = mock.sent().iter().map(|f| f.timeout_ms).collect();
    assert_eq!(timeouts, vec![3, 4, 5, 7]);
}
