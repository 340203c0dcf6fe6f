//! # Idiom Lessons
//!
//! Small, self-contained lessons on concurrency and error-handling idioms.
//! Each lesson is a library module with a matching binary under `src/bin`.
//!
//! ## Lessons Covered
//!
//! 1. **Channels** - A generator on a rendezvous channel that stalls forever
//!    when the consumer asks for one value too many, plus the usual fixes
//! 2. **Error Handling** - Sentinel kinds, wrapping, chain-aware identity and
//!    type search, aggregation, panic recovery
//! 3. **Functional Options** - Constructing a value from configuration closures
//! 4. **Generics** - A generic minimum over ordered types
//!
//! ## Running Lessons
//!
//! ```bash
//! # Lesson 1: Channels (hangs after printing 3 values, stop with Ctrl-C)
//! cargo run --bin channels
//! cargo run --bin channels_hardened
//!
//! # Lesson 2: Error Handling
//! cargo run --bin error_handling
//!
//! # Lesson 3: Functional Options
//! cargo run --bin functional_options
//!
//! # Lesson 4: Generics
//! cargo run --bin generics
//! ```
//!
//! Set `RUST_LOG=debug` to see the producer and option tracing on stderr.

pub mod config;
pub mod error;
pub mod errors;
pub mod generics;
pub mod logging;
pub mod options;
pub mod pipeline;

pub use config::{Config, PipelineConfig, ServerConfig};
pub use error::{LessonError, Result};
