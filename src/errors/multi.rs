use std::error::Error as StdError;

use thiserror::Error;

use super::chain::render;
use super::types::BoxError;

fn join_messages(errors: &[BoxError]) -> String {
    errors
        .iter()
        .map(|err| render(&**err))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Aggregates several independent errors into one.
///
/// `Display` prints each member's full chain on its own line. Chain-aware
/// inspection ([`is`](super::is), [`find`](super::find)) visits every member.
#[derive(Error, Debug, Default)]
#[error("{}", join_messages(.errors))]
pub struct MultiError {
    errors: Vec<BoxError>,
}

impl MultiError {
    pub fn new() -> Self {
        MultiError { errors: Vec::new() }
    }

    pub fn add(&mut self, error: impl StdError + Send + Sync + 'static) {
        self.errors.push(Box::new(error));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// One-line count, independent of the members' text.
    pub fn summary(&self) -> String {
        format!("multiple errors occurred: {} errors", self.errors.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn StdError + Send + Sync + 'static)> {
        self.errors.iter().map(|err| &**err)
    }
}

impl<E> FromIterator<E> for MultiError
where
    E: StdError + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        MultiError {
            errors: iter.into_iter().map(|err| Box::new(err) as BoxError).collect(),
        }
    }
}

/// Aggregate the errors that are present, skipping `None`s.
///
/// Returns `None` when nothing failed.
pub fn join<E, I>(results: I) -> Option<MultiError>
where
    E: StdError + Send + Sync + 'static,
    I: IntoIterator<Item = Option<E>>,
{
    let multi: MultiError = results.into_iter().flatten().collect();
    if multi.is_empty() {
        None
    } else {
        Some(multi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{find, is, Error, ErrorKind, ValidationError};

    #[test]
    fn test_join_keeps_identity_of_each_member() {
        let err1 = Error::new("error one");
        let err2 = Error::new("error two");
        let err3 = Error::new("error three");
        let outsider = Error::new("error one");

        let combined: MultiError = [err1.clone(), err2.clone(), err3.clone()]
            .into_iter()
            .collect();

        assert_eq!(combined.len(), 3);
        assert_eq!(combined.to_string(), "error one\nerror two\nerror three");
        assert!(is(&combined, &err1));
        assert!(is(&combined, &err2));
        assert!(is(&combined, &err3));
        assert!(!is(&combined, &outsider));
    }

    #[test]
    fn test_join_skips_none() {
        let joined = join([
            Some(Error::new("failed to validate input")),
            None,
            Some(Error::new("failed to send notification")),
        ])
        .unwrap();
        assert_eq!(joined.len(), 2);
        assert!(join(Vec::<Option<Error>>::new()).is_none());
        assert!(join([None::<Error>, None]).is_none());
    }

    #[test]
    fn test_summary_and_sentinel_member() {
        let mut multi = MultiError::new();
        multi.add(Error::new("first problem"));
        multi.add(Error::new("second problem"));
        multi.add(ErrorKind::Timeout);

        assert_eq!(multi.summary(), "multiple errors occurred: 3 errors");
        assert!(is(&multi, &ErrorKind::Timeout));
        assert!(!is(&multi, &ErrorKind::NotFound));
    }

    #[test]
    fn test_nested_aggregate_inside_wrap() {
        let mut multi = MultiError::new();
        multi.add(ValidationError::new("email", "nope", "must contain @"));
        let wrapped = Error::wrap("batch failed", multi);

        assert_eq!(find::<ValidationError>(&wrapped).unwrap().field, "email");
    }

    #[test]
    fn test_display_renders_each_member_chain() {
        let mut multi = MultiError::new();
        assert!(multi.is_empty());
        multi.add(Error::wrap("name", Error::new("cannot be empty")));
        multi.add(ErrorKind::InvalidInput);

        assert_eq!(multi.len(), 2);
        assert_eq!(multi.iter().count(), 2);
        let expected = format!("name: cannot be empty\n{}", ErrorKind::InvalidInput);
        assert_eq!(multi.to_string(), expected);
    }
}
