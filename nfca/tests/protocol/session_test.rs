#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nfca::frontend::MockFrontEnd;
use nfca::session::{Session, SessionBuilder};
use nfca::types::Technology;
use nfca::Error;

#[test]
fn init_failure_releases_partial_resources() {
    let mock = MockFrontEnd::new();
    mock.fail_init("oscillator did not start");
    let res = SessionBuilder::new()
        .with_frontend(Box::new(mock.clone()))
        .build();
    match res {
        Err(Error::FrontEndInit(msg)) => assert!(msg.contains("oscillator")),
        Err(other) => panic!("unexpected error {other:?}"),
        Ok(_) => panic!("initialization should fail"),
    }
    assert_eq!(mock.shutdown_count(), 1);
    assert!(!mock.is_initialized());
}

#[test]
fn event_line_lives_for_the_session_only() {
    let mock = MockFrontEnd::new();
    mock.set_events_per_exchange(1);
    let hits = Arc::new(AtomicUsize::new(0));
    let hits2 = hits.clone();
    let session = SessionBuilder::new()
        .with_frontend(Box::new(mock.clone()))
        .on_event(move || {
            hits2.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();
    assert_eq!(session.technology(), Technology::All);

    session.discover().unwrap();
    assert_eq!(session.event_count(), 2);
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    let line = session.events().clone();
    session.shutdown().unwrap();
    assert!(!line.is_armed());
    assert!(!mock.has_events());
}

#[test]
fn probe_detects_front_end() {
    let mut mock = MockFrontEnd::new();
    assert!(Session::probe(&mut mock));
    assert!(!mock.is_initialized());
}
