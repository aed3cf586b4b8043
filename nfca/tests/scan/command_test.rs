#[path = "../common/mod.rs"]
mod common;

use nfca::command::{Action, CommandRequest, CommandStatus, ShowTarget, execute};
use nfca::frontend::RegisterDump;
use nfca::scan::{CollectingSink, Never, ScanReport, TextSink};
use nfca::types::Technology;
use nfca::Error;

#[test]
fn every_placeholder_action_answers_not_implemented() {
    let (mock, mut session) = common::mock_session();
    let mut sink = CollectingSink::new();
    for action in [
        Action::ReadTag,
        Action::EmulateTag,
        Action::CloneTag,
        Action::SniffTraffic,
        Action::RawMode0,
        Action::RawMode1,
    ] {
        let status = execute(&mut session, &CommandRequest::new(action), &mut sink, &Never).unwrap();
        assert_eq!(status, CommandStatus::NotImplemented(action));
    }
    assert_eq!(sink.notices.len(), 6);
    assert_eq!(sink.notices[3], "sniff-traffic not implemented");
    assert!(mock.sent().is_empty());
}

#[test]
fn scan_with_unsupported_technology_reports_it() {
    let (mock, mut session) = common::mock_session();
    let mut sink = CollectingSink::new();
    let req = CommandRequest::new(Action::Scan)
        .with_technology(Technology::B)
        .continuous(10);

    let status = execute(&mut session, &req, &mut sink, &Never).unwrap();
    assert!(matches!(status, CommandStatus::Scanned(s) if s.attempts == 1));
    assert_eq!(sink.reports, vec![ScanReport::Unsupported(Technology::B)]);
    assert!(mock.sent().is_empty());
    assert!(matches!(
        session.discover(),
        Err(Error::UnsupportedTechnology(Technology::B))
    ));
}

#[test]
fn show_registers_renders_address_value_lines() {
    let (mock, mut session) = common::mock_session();
    mock.set_registers(RegisterDump::new(vec![0x21, 0x88], vec![0x3f]));
    let mut sink = TextSink::new(Vec::new());

    let req = CommandRequest::new(Action::Show(ShowTarget::Registers));
    execute(&mut session, &req, &mut sink, &Never).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(
        text,
        "Registers space A:\n0x00\t: 0x21\n0x01\t: 0x88\n\nRegisters space B:\n0x00\t: 0x3f\n"
    );
}

#[test]
fn show_registers_without_support_is_an_error() {
    let (_mock, mut session) = common::mock_session();
    let mut sink = CollectingSink::new();
    let req = CommandRequest::new(Action::Show(ShowTarget::Registers));
    assert!(matches!(
        execute(&mut session, &req, &mut sink, &Never),
        Err(Error::UnsupportedOperation(_))
    ));
}
