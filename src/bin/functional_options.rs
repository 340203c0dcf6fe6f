//! Lesson 3: Functional options
//!
//! Run with: cargo run --bin functional_options

use idiom_lessons::options::Server;
use idiom_lessons::{logging, ServerConfig};

fn main() -> anyhow::Result<()> {
    logging::init();

    let server = Server::new(ServerConfig::default().into_options());
    server.start(&mut std::io::stdout().lock())?;
    Ok(())
}
