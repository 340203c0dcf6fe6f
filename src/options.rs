//! Functional options: a constructor that takes a list of closures, each
//! mutating the value under construction.
//!
//! Compared with the consuming builder, options are plain values, so they
//! can be collected, filtered, or produced from config before the
//! constructor ever runs.

use std::fmt;
use std::io::{self, Write};

/// A configuration step applied by [`Server::new`].
pub type ServerOption = Box<dyn FnOnce(&mut Server) + Send>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Server {
    config_a: String,
    config_b: String,
    config_c: String,
}

impl Server {
    /// Start from the defaults and apply each option in order.
    ///
    /// Later options overwrite earlier ones that touch the same field.
    pub fn new(options: impl IntoIterator<Item = ServerOption>) -> Self {
        let mut server = Server::default();
        for option in options {
            option(&mut server);
        }
        tracing::debug!(server = ?server, "server constructed");
        server
    }

    pub fn config_a(&self) -> &str {
        &self.config_a
    }

    pub fn config_b(&self) -> &str {
        &self.config_b
    }

    pub fn config_c(&self) -> &str {
        &self.config_c
    }

    /// Print the three settings separated by spaces.
    pub fn start(&self, out: &mut impl Write) -> io::Result<()> {
        tracing::info!("server starting");
        writeln!(out, "{}", self)
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.config_a, self.config_b, self.config_c)
    }
}

pub fn with_config_a(config_a: impl Into<String>) -> ServerOption {
    let config_a = config_a.into();
    Box::new(move |server: &mut Server| server.config_a = config_a)
}

pub fn with_config_b(config_b: impl Into<String>) -> ServerOption {
    let config_b = config_b.into();
    Box::new(move |server: &mut Server| server.config_b = config_b)
}

pub fn with_config_c(config_c: impl Into<String>) -> ServerOption {
    let config_c = config_c.into();
    Box::new(move |server: &mut Server| server.config_c = config_c)
}
