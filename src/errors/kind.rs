use thiserror::Error;

/// Sentinel error categories, known at compile time and compared by value.
///
/// A kind is itself an error, so it can sit at the bottom of a chain, and an
/// [`Error`](super::Error) can also be tagged with one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("resource not found")]
    NotFound,

    #[error("unauthorized access")]
    Unauthorized,

    #[error("invalid input")]
    InvalidInput,

    #[error("operation timed out")]
    Timeout,

    /// Not a failure so much as an expected end of input.
    #[error("EOF")]
    EndOfStream,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::NotFound,
        ErrorKind::Unauthorized,
        ErrorKind::InvalidInput,
        ErrorKind::Timeout,
        ErrorKind::EndOfStream,
    ];
}
