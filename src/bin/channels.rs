//! Lesson 1: Generator on a rendezvous channel
//!
//! Run with: cargo run --bin channels
//!
//! Prints 1, 2 and 3, then blocks forever on a fourth receive: the producer
//! has exited without ever signalling end of stream. Stop it with Ctrl-C.

use anyhow::Context;
use idiom_lessons::pipeline::{consume, generate};
use idiom_lessons::{logging, PipelineConfig};

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = PipelineConfig::default();
    let stream =
        generate(config.values.clone(), config.delay()).context("failed to start producer")?;

    if config.stalls() {
        tracing::warn!(
            values = config.values.len(),
            receives = config.receives,
            "consumer will wait forever on its last receive"
        );
    }

    let stdout = std::io::stdout();
    consume(&stream, config.receives, &mut stdout.lock()).context("failed to write value")?;
    Ok(())
}
