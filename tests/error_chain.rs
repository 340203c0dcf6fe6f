use idiom_lessons::errors::{
    find, is, join, render, DatabaseError, Error, ErrorKind, HttpError, MultiError, Sentinel,
    ValidationError,
};
use idiom_lessons::LessonError;
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ErrorKind> {
    prop::sample::select(ErrorKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_kind_identity_through_mixed_layers(kind in kind_strategy(), layers in 1usize..12) {
        let mut err = Error::wrap("base", kind);
        for depth in 0..layers {
            err = if depth % 2 == 0 {
                Error::wrap(format!("layer {depth}"), err)
            } else {
                Error::wrap(format!("layer {depth}"), DatabaseError::new("read", "t", err))
            };
        }

        prop_assert!(is(&err, &kind));
        prop_assert!(!kind.matches(&err));
        for other in ErrorKind::ALL.into_iter().filter(|k| *k != kind) {
            prop_assert!(!is(&err, &other));
        }
    }

    #[test]
    fn test_join_of_three_keeps_each_identity(
        a in ".{1,20}",
        b in ".{1,20}",
        c in ".{1,20}",
    ) {
        let originals = [Error::new(a), Error::new(b), Error::new(c)];
        let combined = join(originals.iter().cloned().map(Some)).unwrap();

        for original in &originals {
            prop_assert!(is(&combined, original));
        }
        prop_assert!(!is(&combined, &Error::new("unrelated")));
    }
}

#[test]
fn test_aggregate_wrapped_inside_http_error() {
    let multi: MultiError = [Error::from(ErrorKind::Unauthorized), Error::new("quota exceeded")]
        .into_iter()
        .collect();
    let http = HttpError::new(403, "GET", "/admin", multi);
    let top = Error::wrap("dashboard failed", http);

    assert!(is(&top, &ErrorKind::Unauthorized));
    assert_eq!(find::<HttpError>(&top).unwrap().status, 403);
    assert!(find::<ValidationError>(&top).is_none());
    assert_eq!(
        render(&top),
        "dashboard failed: HTTP 403 error on GET /admin: unauthorized access\nquota exceeded"
    );
}

#[test]
fn test_lesson_error_wraps_into_chain() {
    let err = Error::wrap("pipeline stopped", LessonError::Disconnected);
    assert!(find::<LessonError>(&err).is_some());
    assert_eq!(render(&err), "pipeline stopped: producer disconnected");
}
