//! Generators whose consumers can always tell when to stop.
//!
//! Each variant fixes the stall in [`generate`](super::generate) a different
//! way: an explicit end-of-stream frame, closing the channel, a receive
//! deadline, or a cancellation signal the consumer selects over.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{bounded, select, Receiver, RecvTimeoutError, Sender, TryRecvError};

use crate::error::{LessonError, Result};
use crate::errors::{spawn_guarded, PanicError};

/// Message on a framed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Value(i32),
    EndOfStream,
}

/// A producer thread and the receiving end of its channel.
///
/// The body runs under [`spawn_guarded`], so a panicking producer closes the
/// channel and reports the panic through [`Producer::join`].
pub struct Producer<T> {
    rx: Receiver<T>,
    handle: JoinHandle<std::result::Result<(), PanicError>>,
}

impl<T: Send + 'static> Producer<T> {
    /// Spawn `body` on a named thread with a channel of `capacity` slots
    /// (zero for a rendezvous).
    pub fn spawn<F>(name: &str, capacity: usize, body: F) -> Result<Self>
    where
        F: FnOnce(Sender<T>) + Send + 'static,
    {
        let (tx, rx) = bounded(capacity);
        let handle = spawn_guarded(name, move || body(tx))?;
        Ok(Producer { rx, handle })
    }

    pub fn receiver(&self) -> &Receiver<T> {
        &self.rx
    }

    /// Wait for the producer thread and surface a panic as an error.
    pub fn join(self) -> Result<()> {
        drop(self.rx);
        match self.handle.join() {
            Ok(result) => Ok(result?),
            Err(payload) => Err(PanicError::from_payload(payload).into()),
        }
    }
}

/// Send every value, then a final [`Frame::EndOfStream`].
pub fn generate_framed(values: Vec<i32>, delay: Duration) -> Result<Producer<Frame>> {
    Producer::spawn("framed-generator", 0, move |tx| {
        for value in values {
            if tx.send(Frame::Value(value)).is_err() {
                return;
            }
            thread::sleep(delay);
        }
        let _ = tx.send(Frame::EndOfStream);
        tracing::debug!("sent end of stream");
    })
}

/// Receive until [`Frame::EndOfStream`].
///
/// A disconnect before the end frame means the producer died early.
pub fn drain_framed(rx: &Receiver<Frame>) -> Result<Vec<i32>> {
    let mut values = Vec::new();
    loop {
        match rx.recv() {
            Ok(Frame::Value(value)) => values.push(value),
            Ok(Frame::EndOfStream) => return Ok(values),
            Err(_) => return Err(LessonError::Disconnected),
        }
    }
}

/// Send every value, then drop the sender so receivers see a disconnect.
pub fn generate_closing(values: Vec<i32>, delay: Duration) -> Result<Producer<i32>> {
    Producer::spawn("closing-generator", 0, move |tx| {
        for value in values {
            if tx.send(value).is_err() {
                return;
            }
            thread::sleep(delay);
        }
        tracing::debug!("closing channel");
    })
}

/// Receive one value or give up after `timeout`.
pub fn recv_timeout<T>(rx: &Receiver<T>, timeout: Duration) -> Result<T> {
    rx.recv_timeout(timeout).map_err(|err| match err {
        RecvTimeoutError::Timeout => LessonError::Timeout(timeout),
        RecvTimeoutError::Disconnected => LessonError::Disconnected,
    })
}

/// Owner of a cancellation signal.
///
/// Cancelling closes a channel nobody ever sends on; every token observes
/// the close at once, however many there are. Dropping the `Cancel` closes
/// it as well, so keep the owner alive for as long as tokens should stay
/// live.
pub struct Cancel {
    tx: Option<Sender<()>>,
    rx: Receiver<()>,
}

/// Cheap, cloneable view of a [`Cancel`].
#[derive(Clone)]
pub struct CancelToken {
    rx: Receiver<()>,
}

impl Cancel {
    pub fn new() -> Self {
        let (tx, rx) = bounded(0);
        Cancel { tx: Some(tx), rx }
    }

    pub fn token(&self) -> CancelToken {
        CancelToken { rx: self.rx.clone() }
    }

    pub fn cancel(&mut self) {
        if self.tx.take().is_some() {
            tracing::debug!("cancelled");
        }
    }
}

impl Default for Cancel {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        matches!(self.rx.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Sleep for `delay`, returning early with `false` if cancelled.
    fn sleep(&self, delay: Duration) -> bool {
        matches!(self.rx.recv_timeout(delay), Err(RecvTimeoutError::Timeout))
    }
}

/// Send values until they run out or `token` is cancelled.
pub fn generate_cancellable(
    values: Vec<i32>,
    delay: Duration,
    token: CancelToken,
) -> Result<Producer<i32>> {
    Producer::spawn("cancellable-generator", 0, move |tx| {
        for value in values {
            select! {
                send(tx, value) -> sent => {
                    if sent.is_err() {
                        return;
                    }
                }
                recv(token.rx) -> _ => {
                    tracing::debug!("producer cancelled before send");
                    return;
                }
            }
            if !token.sleep(delay) {
                tracing::debug!("producer cancelled while paused");
                return;
            }
        }
    })
}

/// Receive one value unless `token` is cancelled first.
///
/// An already-cancelled token wins even if a value or a disconnect is ready.
pub fn recv_or_cancel<T>(rx: &Receiver<T>, token: &CancelToken) -> Result<T> {
    if token.is_cancelled() {
        return Err(LessonError::Cancelled);
    }
    select! {
        recv(rx) -> msg => msg.map_err(|_| LessonError::Disconnected),
        recv(token.rx) -> _ => Err(LessonError::Cancelled),
    }
}
