#[path = "../common/mod.rs"]
mod common;

use std::cell::Cell;

use nfca::frontend::MockReply;
use nfca::scan::{CollectingSink, RunMode, ScanController, ScanReport, TextSink};
use nfca::test_support::single_cascade_script;
use nfca::types::Technology;

#[test]
fn front_end_faults_never_abort_the_loop() {
    let (mock, session) = common::mock_session();
    mock.push_fault("spi timeout");
    mock.push_fault("spi timeout");
    mock.push_replies(single_cascade_script([0x04, 0x00], common::sample_uid4(), 0x08));

    let polls = Cell::new(0u32);
    let cancel = || {
        polls.set(polls.get() + 1);
        polls.get() >= 4
    };
    let mut ctl = ScanController::new(
        &session,
        CollectingSink::new(),
        RunMode::Continuous { period_ms: 1 },
    );
    let summary = ctl.run(&cancel);

    assert_eq!(summary.attempts, 4);
    assert_eq!(summary.errors, 2);
    assert_eq!(summary.tags_found, 1);
    let sink = ctl.into_sink();
    assert_eq!(sink.errors.len(), 2);
    assert_eq!(sink.records().count(), 1);
    assert!(!mock.is_field_on());
}

#[test]
fn text_sink_renders_banner_and_tag() {
    let (mock, session) = common::mock_session();
    mock.push_replies(single_cascade_script([0x04, 0x00], common::sample_uid4(), 0x08));

    let mut ctl = ScanController::new(
        &session,
        TextSink::new(Vec::new()),
        RunMode::Continuous { period_ms: 1000 },
    );
    assert_eq!(ctl.config().technology, Technology::All);
    ctl.run(&|| true);

    let text = String::from_utf8(ctl.into_sink().into_inner()).unwrap();
    let expected = format!(
        "Scanning NFC-ALL with 1000ms period\nATQA: 04 00\nSAK1: 08\nUID: DE AD BE EF (BCC {:02X} ok)\n",
        0xDE ^ 0xAD ^ 0xBE
    );
    assert_eq!(text, expected);
}

#[test]
fn aborted_attempt_is_reported_with_atqa() {
    let (mock, session) = common::mock_session();
    mock.push_replies(vec![MockReply::Data(vec![0x44, 0x00]), MockReply::Silent]);

    let mut ctl = ScanController::new(&session, CollectingSink::new(), RunMode::Single);
    ctl.run_once();
    match &ctl.sink().reports[0] {
        ScanReport::Discovery { outcome, .. } => {
            assert!(outcome.tag().is_none());
            assert!(!outcome.is_no_response());
        }
        other => panic!("unexpected report {other:?}"),
    }
}
