use std::error::Error as StdError;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::chain::render;
use super::kind::ErrorKind;

/// A shared, type-erased cause.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// General-purpose error: an optional sentinel kind, a message, and an
/// optional cause.
///
/// Every constructor hands out a fresh identity. Clones keep it, so a clone
/// stored deep inside a chain is still recognised by
/// [`is`](super::chain::is) as the original value.
///
/// `Display` shows this layer only; use [`render`] for the whole chain.
#[derive(Debug, Clone)]
pub struct Error {
    id: u64,
    kind: Option<ErrorKind>,
    message: String,
    cause: Option<Cause>,
}

impl Error {
    /// A standalone error with its own identity.
    pub fn new(message: impl Into<String>) -> Self {
        Error {
            id: next_id(),
            kind: None,
            message: message.into(),
            cause: None,
        }
    }

    /// An error tagged with a sentinel kind.
    pub fn with_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error {
            kind: Some(kind),
            ..Error::new(message)
        }
    }

    /// Add a layer of context, keeping `cause` inspectable.
    pub fn wrap(context: impl Into<String>, cause: impl StdError + Send + Sync + 'static) -> Self {
        Self::wrap_shared(context, Arc::new(cause))
    }

    pub fn wrap_shared(context: impl Into<String>, cause: Cause) -> Self {
        Error {
            cause: Some(cause),
            ..Error::new(context)
        }
    }

    /// Add a layer of context by copying the cause's text.
    ///
    /// The cause itself is dropped, so nothing below this layer can be found
    /// by identity or type any more.
    pub fn opaque(context: impl Into<String>, cause: &(dyn StdError + 'static)) -> Self {
        Error::new(format!("{}: {}", context.into(), render(cause)))
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Peel off exactly one layer.
    pub fn unwrap(&self) -> Option<&(dyn StdError + 'static)> {
        self.source()
    }

    /// Identity comparison: true only for this value and its clones.
    pub fn same_as(&self, other: &Error) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::with_kind(kind, kind.to_string())
    }
}
