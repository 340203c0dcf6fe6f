//! Lesson 2: Error handling reference
//!
//! Run with: cargo run --bin error_handling

use anyhow::Context;
use idiom_lessons::errors::catalogue;
use idiom_lessons::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    let stdout = std::io::stdout();
    catalogue::run(&mut stdout.lock()).context("failed to print catalogue")?;
    Ok(())
}
