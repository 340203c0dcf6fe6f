//! Lesson 1b: Generators that terminate
//!
//! Run with: cargo run --bin channels_hardened

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use idiom_lessons::pipeline::{
    drain_framed, generate, generate_cancellable, generate_closing, generate_framed, recv_or_cancel,
    Cancel,
};
use idiom_lessons::{logging, LessonError};

const VALUES: [i32; 3] = [1, 2, 3];
const DELAY: Duration = Duration::from_millis(200);

fn main() -> anyhow::Result<()> {
    logging::init();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "=== End-of-stream frame ===")?;
    let producer = generate_framed(VALUES.to_vec(), DELAY)?;
    let values = drain_framed(producer.receiver())?;
    writeln!(out, "  received {:?}, then EndOfStream", values)?;
    producer.join().context("framed producer")?;

    writeln!(out, "\n=== Closed channel ===")?;
    let producer = generate_closing(VALUES.to_vec(), DELAY)?;
    for value in producer.receiver().iter() {
        writeln!(out, "  {}", value)?;
    }
    writeln!(out, "  channel closed, loop ended")?;
    producer.join().context("closing producer")?;

    writeln!(out, "\n=== Receive with timeout ===")?;
    let stream = generate(VALUES.to_vec(), DELAY)?;
    for _ in 0..VALUES.len() + 1 {
        match stream.recv_timeout(DELAY * 3) {
            Some(value) => writeln!(out, "  {}", value)?,
            None => writeln!(out, "  {}", LessonError::Timeout(DELAY * 3))?,
        }
    }

    writeln!(out, "\n=== Cancellation ===")?;
    let mut cancel = Cancel::new();
    let token = cancel.token();
    let producer = generate_cancellable(VALUES.to_vec(), DELAY, cancel.token())?;
    writeln!(out, "  {}", recv_or_cancel(producer.receiver(), &token)?)?;
    cancel.cancel();
    match recv_or_cancel(producer.receiver(), &token) {
        Ok(value) => writeln!(out, "  {}", value)?,
        Err(err) => writeln!(out, "  {}", err)?,
    }
    producer.join().context("cancellable producer")?;

    writeln!(out, "\n=== Key Points ===")?;
    writeln!(out, "1. A blocking receive with no live sender never returns")?;
    writeln!(out, "2. Send an explicit end frame, or close the channel")?;
    writeln!(out, "3. Bound waits with a timeout, or select over a cancel signal")?;
    Ok(())
}
