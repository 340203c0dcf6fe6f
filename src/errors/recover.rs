//! Turning panics into error values at a defined boundary.

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use thiserror::Error;

use super::wrapped::Error;

/// What a recovered panic carried.
#[derive(Error, Debug)]
pub enum PanicError {
    /// `panic!("...")` with a string message.
    #[error("{0}")]
    Message(String),

    /// `panic_any(Error)`: the payload already was an error value.
    #[error("{0}")]
    Error(#[source] Error),

    /// Any other payload type.
    #[error("panicked with a non-error payload")]
    Opaque,
}

impl PanicError {
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Error>() {
            Ok(err) => return PanicError::Error(*err),
            Err(payload) => payload,
        };
        if let Some(message) = payload.downcast_ref::<&'static str>() {
            PanicError::Message((*message).to_string())
        } else if let Some(message) = payload.downcast_ref::<String>() {
            PanicError::Message(message.clone())
        } else {
            PanicError::Opaque
        }
    }

    /// True when the payload was an error value rather than a message.
    pub fn is_error(&self) -> bool {
        matches!(self, PanicError::Error(_))
    }
}

/// Run `f`, converting a panic into `Err` instead of unwinding further.
pub fn guard<T, F>(f: F) -> Result<T, PanicError>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let err = PanicError::from_payload(payload);
        tracing::warn!(error = %err, "recovered from panic");
        err
    })
}

/// Spawn a named thread whose body runs under [`guard`].
///
/// Joining yields the body's value or the recovered panic, so the thread
/// boundary never carries an unwinding panic.
pub fn spawn_guarded<T, F>(name: &str, f: F) -> io::Result<JoinHandle<Result<T, PanicError>>>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    thread::Builder::new()
        .name(name.to_string())
        .spawn(move || guard(f))
}
