//! Error-wrapping idioms.
//!
//! Two primitives do all the inspection work and stay independent of each
//! other:
//!
//! - [`is`] answers "is this sentinel (or this exact value) anywhere in the
//!   chain?"
//! - [`find`] answers "is there an error of type `T` anywhere in the chain?"
//!
//! [`catalogue`] walks through every idiom and prints what it does.

pub mod catalogue;
mod chain;
mod kind;
mod multi;
mod recover;
mod types;
mod wrapped;

pub use chain::{chain, find, is, render, type_label, Chain, Sentinel};
pub use kind::ErrorKind;
pub use multi::{join, MultiError};
pub use recover::{guard, spawn_guarded, PanicError};
pub use types::{BoxError, DatabaseError, HttpError, ValidationError};
pub use wrapped::{Cause, Error};
