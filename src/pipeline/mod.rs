//! Generator pipelines over rendezvous channels.
//!
//! [`generate`] reproduces the classic mistake: the producer stops without
//! saying so, and a consumer that asks for one more value waits forever.
//! [`hardened`] holds the ways out.

mod generator;
pub mod hardened;

pub use generator::{consume, consume_with, generate, Stream};
pub use hardened::{
    drain_framed, generate_cancellable, generate_closing, generate_framed, recv_or_cancel,
    recv_timeout, Cancel, CancelToken, Frame, Producer,
};
