#[path = "../common/mod.rs"]
mod common;

use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use nfca::scan::{CollectingSink, RunMode, ScanController};
use serial_test::serial;

#[test]
#[serial]
fn cancel_asserted_up_front_exits_within_one_period() {
    let (_mock, session) = common::mock_session();
    let cancel = AtomicBool::new(true);
    let mut ctl = ScanController::new(
        &session,
        CollectingSink::new(),
        RunMode::Continuous { period_ms: 50 },
    );

    let started = Instant::now();
    let summary = ctl.run(&cancel);
    let elapsed = started.elapsed();

    assert!(summary.attempts <= 1);
    assert!(elapsed < Duration::from_millis(50), "took {elapsed:?}");
}

#[test]
#[serial]
fn cancel_from_another_thread_stops_the_loop() {
    let (_mock, session) = common::mock_session();
    let cancel = AtomicBool::new(false);
    let mut ctl = ScanController::new(
        &session,
        CollectingSink::new(),
        RunMode::Continuous { period_ms: 10 },
    );

    let summary = std::thread::scope(|s| {
        s.spawn(|| {
            std::thread::sleep(Duration::from_millis(60));
            cancel.store(true, std::sync::atomic::Ordering::SeqCst);
        });
        ctl.run(&cancel)
    });

    assert!(summary.attempts >= 2);
    assert_eq!(summary.tags_found, 0);
    assert_eq!(ctl.sink().reports.len() as u64, summary.attempts);
}
