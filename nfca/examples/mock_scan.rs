// Continuous Type-A scan against the mock front-end
//
// Scripts a 7-byte UID memory tag, then a 4-byte UID tag, and runs the `scan`
// command in continuous mode until the stop flag is set. Run with
// `RUST_LOG=debug cargo run --example mock_scan` to see the state machine.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use nfca::prelude::*;
use nfca::test_support::{simple_tag_memory, simple_tag_script, single_cascade_script};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mock = MockFrontEnd::new();
    let uid = [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
    mock.push_replies(simple_tag_script(uid, &simple_tag_memory(&uid)));
    mock.push_replies(single_cascade_script([0x04, 0x00], [0xDE, 0xAD, 0xBE, 0xEF], 0x08));

    let mut session = SessionBuilder::new()
        .with_frontend(Box::new(mock))
        .on_event(|| log::trace!("front-end event"))
        .build()
        .context("bringing up the mock front-end")?;

    let stop = Arc::new(AtomicBool::new(false));
    let stopper = stop.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(1500));
        stopper.store(true, Ordering::SeqCst);
    });

    let request = CommandRequest::new(Action::Scan)
        .with_technology(Technology::A)
        .continuous(250);
    let mut sink = TextSink::new(std::io::stdout());
    let status = execute(&mut session, &request, &mut sink, &stop)?;
    println!("{:?}", status);

    for name in ["show", "clone-tag"] {
        let action: Action = name.parse()?;
        execute(&mut session, &CommandRequest::new(action), &mut sink, &stop)?;
    }

    session.shutdown()?;
    Ok(())
}
