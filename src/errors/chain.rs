//! Chain-aware inspection.
//!
//! `std::error::Error::source` gives a single cause per layer. An aggregate
//! ([`MultiError`]) has many, so traversal here is depth-first over a tree:
//! a node's children are the members of an aggregate, or its `source`
//! otherwise.

use std::error::Error as StdError;
use std::io;
use std::num::ParseIntError;

use super::kind::ErrorKind;
use super::multi::MultiError;
use super::types::{DatabaseError, HttpError, ValidationError};
use super::wrapped::Error;
use super::PanicError;

/// Something an error in a chain can be compared against by identity.
pub trait Sentinel {
    /// Compare against a single node, without looking at its causes.
    fn matches(&self, err: &(dyn StdError + 'static)) -> bool;
}

impl Sentinel for ErrorKind {
    fn matches(&self, err: &(dyn StdError + 'static)) -> bool {
        if let Some(kind) = err.downcast_ref::<ErrorKind>() {
            return kind == self;
        }
        err.downcast_ref::<Error>()
            .and_then(Error::kind)
            .is_some_and(|kind| kind == *self)
    }
}

impl Sentinel for Error {
    fn matches(&self, err: &(dyn StdError + 'static)) -> bool {
        err.downcast_ref::<Error>()
            .is_some_and(|candidate| candidate.same_as(self))
    }
}

impl Sentinel for io::ErrorKind {
    fn matches(&self, err: &(dyn StdError + 'static)) -> bool {
        err.downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == *self)
    }
}

fn children<'a>(err: &'a (dyn StdError + 'static)) -> Vec<&'a (dyn StdError + 'static)> {
    match err.downcast_ref::<MultiError>() {
        Some(multi) => multi
            .iter()
            .map(|member| member as &(dyn StdError + 'static))
            .collect(),
        None => err.source().into_iter().collect(),
    }
}

/// True if `target` matches `err` or anything reachable below it.
pub fn is<S>(err: &(dyn StdError + 'static), target: &S) -> bool
where
    S: Sentinel + ?Sized,
{
    target.matches(err) || children(err).into_iter().any(|child| is(child, target))
}

/// First error of type `T` found depth-first below (and including) `err`.
pub fn find<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    if let Some(found) = err.downcast_ref::<T>() {
        return Some(found);
    }
    children(err).into_iter().find_map(find::<T>)
}

/// Iterator over `err` and its single-cause `source` chain.
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Every layer's message joined with `": "`, outermost first.
pub fn render(err: &(dyn StdError + 'static)) -> String {
    chain(err)
        .map(|layer| layer.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

/// Short name of the concrete type behind `err`, for diagnostics.
pub fn type_label(err: &(dyn StdError + 'static)) -> &'static str {
    if err.is::<Error>() {
        "Error"
    } else if err.is::<ErrorKind>() {
        "ErrorKind"
    } else if err.is::<ValidationError>() {
        "ValidationError"
    } else if err.is::<DatabaseError>() {
        "DatabaseError"
    } else if err.is::<HttpError>() {
        "HttpError"
    } else if err.is::<MultiError>() {
        "MultiError"
    } else if err.is::<PanicError>() {
        "PanicError"
    } else if err.is::<io::Error>() {
        "io::Error"
    } else if err.is::<ParseIntError>() {
        "ParseIntError"
    } else {
        "dyn Error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn wrap_n(base: Error, layers: usize) -> Error {
        (0..layers).fold(base, |err, depth| Error::wrap(format!("layer {depth}"), err))
    }

    #[test]
    fn test_is_through_wrapping() {
        let double = Error::wrap(
            "API call failed",
            Error::wrap("failed to get user", Error::from(ErrorKind::NotFound)),
        );
        assert!(is(&double, &ErrorKind::NotFound));
        assert!(!is(&double, &ErrorKind::Timeout));
        assert!(!ErrorKind::NotFound.matches(&double));
    }

    #[test]
    fn test_is_bare_kind_in_chain() {
        let err = Error::wrap("failed to get user", ErrorKind::NotFound);
        assert!(is(&err, &ErrorKind::NotFound));
        assert!(is(&ErrorKind::NotFound, &ErrorKind::NotFound));
    }

    #[test]
    fn test_opaque_wrap_breaks_identity() {
        let with_wrap = Error::wrap("failed to find user", ErrorKind::NotFound);
        let with_text = Error::opaque("failed to find user", &ErrorKind::NotFound);
        assert!(is(&with_wrap, &ErrorKind::NotFound));
        assert!(!is(&with_text, &ErrorKind::NotFound));
        assert_eq!(render(&with_wrap), render(&with_text));
    }

    #[test]
    fn test_is_io_kind() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = Error::wrap("file does not exist", io_err);
        assert!(is(&err, &io::ErrorKind::NotFound));
        assert!(!is(&err, &io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_find_through_structured_layers() {
        let base = Error::new("network timeout");
        let db = DatabaseError::new("select", "users", base.clone());
        let http = HttpError::new(500, "POST", "/api/data", db);
        let top = Error::wrap("request failed", http);

        let found = find::<DatabaseError>(&top).unwrap();
        assert_eq!(found.operation, "select");
        assert!(found.is_retryable());
        assert_eq!(find::<HttpError>(&top).unwrap().status, 500);
        assert!(find::<ValidationError>(&top).is_none());
        assert!(is(&top, &base));
    }

    #[test]
    fn test_chain_and_render() {
        let err = Error::wrap("level 2", Error::wrap("level 1", Error::new("base error")));
        let layers: Vec<String> = chain(&err).map(|e| e.to_string()).collect();
        assert_eq!(layers, ["level 2", "level 1", "base error"]);
        assert_eq!(render(&err), "level 2: level 1: base error");
        assert!(chain(&err).all(|e| type_label(e) == "Error"));
    }

    #[test]
    fn test_type_label() {
        assert_eq!(type_label(&ErrorKind::Timeout), "ErrorKind");
        assert_eq!(type_label(&io::Error::other("x")), "io::Error");
        let parse = "x".parse::<i32>().unwrap_err();
        assert_eq!(type_label(&parse), "ParseIntError");
    }

    proptest! {
        #[test]
        fn test_identity_survives_any_depth(layers in 0usize..32) {
            let sentinel = Error::from(ErrorKind::Unauthorized);
            let wrapped = wrap_n(sentinel.clone(), layers);

            prop_assert!(is(&wrapped, &ErrorKind::Unauthorized));
            prop_assert!(is(&wrapped, &sentinel));
            prop_assert_eq!(sentinel.matches(&wrapped), layers == 0);
            prop_assert_eq!(ErrorKind::Unauthorized.matches(&wrapped), layers == 0);
        }

        #[test]
        fn test_find_recovers_fields_at_any_depth(
            layers in 0usize..32,
            field in "[a-z]{1,12}",
            value in any::<i64>(),
            message in ".{0,40}",
        ) {
            let original = ValidationError::new(field.clone(), json!(value), message.clone());
            let wrapped = (0..layers).fold(
                Error::wrap("user processing failed", original.clone()),
                |err, depth| Error::wrap(format!("layer {depth}"), err),
            );

            let found = find::<ValidationError>(&wrapped).unwrap();
            prop_assert_eq!(found, &original);
            prop_assert_eq!(&found.field, &field);
            prop_assert_eq!(&found.value, &json!(value));
            prop_assert_eq!(&found.message, &message);
        }
    }
}
