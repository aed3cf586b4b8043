#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use nfca::Error;
use serial_test::serial;

#[test]
#[serial]
fn second_discovery_while_one_is_in_flight_is_rejected() {
    let (mock, session) = common::mock_session();
    // Every exchange takes 100 ms; an absent tag costs two of them.
    mock.set_latency_ms(100);

    let (first, second) = std::thread::scope(|s| {
        let first = s.spawn(|| session.discover());
        std::thread::sleep(Duration::from_millis(50));
        let second = session.discover();
        (first.join().unwrap(), second)
    });

    assert!(first.unwrap().is_no_response());
    assert!(matches!(second, Err(Error::Busy)));
    // The rejected request never reached the radio
    assert_eq!(mock.sent().len(), 2);
}

#[test]
#[serial]
fn register_dump_is_rejected_while_busy() {
    let (mock, session) = common::mock_session();
    mock.set_latency_ms(100);

    let dump = std::thread::scope(|s| {
        let worker = s.spawn(|| session.discover());
        std::thread::sleep(Duration::from_millis(50));
        let dump = session.register_dump();
        let _ = worker.join();
        dump
    });
    assert!(matches!(dump, Err(Error::Busy)));
}
