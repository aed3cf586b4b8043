#[path = "../common/mod.rs"]
mod common;

use nfca::discovery::{DiscoveryOutcome, DiscoveryTimings, discover};
use nfca::frontend::MockFrontEnd;

#[test]
fn absent_tag_twice_is_no_response_twice() {
    let mut mock = MockFrontEnd::new();
    let timings = DiscoveryTimings::default();
    assert_eq!(discover(&mut mock, &timings).unwrap(), DiscoveryOutcome::NoResponse);
    assert_eq!(discover(&mut mock, &timings).unwrap(), DiscoveryOutcome::NoResponse);
    // one REQA plus one retry per attempt
    assert_eq!(mock.sent().len(), 4);
    assert_eq!(mock.field_log(), vec![true, false, true, false]);
}

#[test]
fn nothing_carries_over_between_attempts() {
    let mut mock = MockFrontEnd::new();
    let timings = DiscoveryTimings::default();
    mock.push_replies(nfca::test_support::single_cascade_script(
        [0x04, 0x00],
        common::sample_uid4(),
        0x08,
    ));
    assert!(discover(&mut mock, &timings).unwrap().tag().is_some());

    // Tag removed: the next attempt starts from scratch
    assert_eq!(discover(&mut mock, &timings).unwrap(), DiscoveryOutcome::NoResponse);
}

#[test]
fn session_discover_matches_free_function() {
    let (mock, session) = common::mock_session();
    assert!(session.discover().unwrap().is_no_response());
    assert!(session.discover().unwrap().is_no_response());
    assert_eq!(mock.sent().len(), 4);
}
