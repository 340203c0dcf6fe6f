use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::errors::PanicError;

/// Operational errors raised by the lesson plumbing itself.
#[derive(Error, Debug)]
pub enum LessonError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("no value received within {0:?}")]
    Timeout(Duration),

    #[error("producer disconnected")]
    Disconnected,

    #[error("receive cancelled")]
    Cancelled,

    #[error("task panicked: {0}")]
    Panicked(#[from] PanicError),
}

pub type Result<T> = std::result::Result<T, LessonError>;
