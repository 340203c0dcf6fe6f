//! Printed tour of the error idioms, one numbered section at a time.
//!
//! Everything writes to a caller-supplied writer so the binary can print to
//! stdout and tests can capture the text.

use std::error::Error as StdError;
use std::fs::File;
use std::io::{self, Write};
use std::num::ParseIntError;
use std::panic;

use super::{
    chain, find, guard, is, join, render, type_label, DatabaseError, Error, ErrorKind, HttpError,
    MultiError, PanicError, Sentinel, ValidationError,
};
use super::types::value_text;

/// Run every section in order, followed by the summary.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Error Handling - Complete Reference ===\n")?;

    basic_creation(out)?;
    formatted_creation(out)?;
    sentinel_kinds(out)?;
    custom_types(out)?;
    wrapping(out)?;
    identity_through_wrapping(out)?;
    type_search(out)?;
    joining(out)?;
    custom_multi_error(out)?;
    presence_checks(out)?;
    panic_recovery(out)?;
    opaque_vs_wrap(out)?;
    practical_file_open(out, "/nonexistent/file.txt")?;

    let base = Error::new("base error");
    let wrapped_twice = Error::wrap("level 2", Error::wrap("level 1", base));
    inspect_chain(out, &wrapped_twice)?;

    http_error(out)?;
    parse_error(out)?;
    end_of_stream(out)?;
    complex_chain(out)?;
    annotation_on_exit(out)?;
    aggregation(out)?;

    summary(out)
}

fn basic_creation(out: &mut impl Write) -> io::Result<()> {
    let err = Error::new("this is a basic error");
    writeln!(out, "1. Basic error: {}", err)?;
    writeln!(out, "   Error type: {}\n", type_label(&err))
}

fn formatted_creation(out: &mut impl Write) -> io::Result<()> {
    let name = "Alice";
    let age = 25;
    let err = Error::new(format!("user {name} with age {age} is invalid"));
    writeln!(out, "2. Formatted error: {}\n", err)
}

fn sentinel_kinds(out: &mut impl Write) -> io::Result<()> {
    let err = ErrorKind::NotFound;

    if err == ErrorKind::NotFound {
        writeln!(out, "3. Sentinel error detected: {}", err)?;
    }
    if is(&err, &ErrorKind::NotFound) {
        writeln!(out, "   is() also works: true\n")?;
    }
    Ok(())
}

fn custom_types(out: &mut impl Write) -> io::Result<()> {
    let validation =
        ValidationError::new("email", "invalid-email", "must be a valid email address");
    writeln!(out, "4. Custom validation error: {}", validation)?;

    let database = DatabaseError::new("insert", "users", Error::new("duplicate key violation"));
    writeln!(out, "   Custom database error: {}", render(&database))?;
    writeln!(out, "   Is retryable: {}\n", database.is_retryable())
}

fn inner_operation() -> Result<(), Error> {
    Err(Error::new("low-level file system error"))
}

fn middle_operation() -> Result<(), Error> {
    inner_operation().map_err(|err| Error::wrap("middle layer failed", err))
}

fn outer_operation() -> Result<(), Error> {
    middle_operation().map_err(|err| Error::wrap("outer layer failed", err))
}

fn wrapping(out: &mut impl Write) -> io::Result<()> {
    let Err(err) = outer_operation() else {
        return Ok(());
    };
    writeln!(out, "5. Wrapped error: {}", render(&err))?;

    let first = err.unwrap();
    if let Some(first) = first {
        writeln!(out, "   First unwrap: {}", render(first))?;
    }
    if let Some(second) = first.and_then(|e| e.source()) {
        writeln!(out, "   Second unwrap: {}", render(second))?;
    }
    writeln!(out)
}

fn identity_through_wrapping(out: &mut impl Write) -> io::Result<()> {
    let wrapped = Error::wrap("failed to get user", ErrorKind::NotFound);
    let double_wrapped = Error::wrap("API call failed", wrapped);

    writeln!(out, "6. is() - checking error identity through wrapping:")?;
    writeln!(
        out,
        "   is(double_wrapped, NotFound): {}",
        is(&double_wrapped, &ErrorKind::NotFound)
    )?;
    writeln!(
        out,
        "   Direct comparison (double_wrapped == NotFound): {}\n",
        ErrorKind::NotFound.matches(&double_wrapped)
    )
}

fn process_user() -> Result<(), ValidationError> {
    Err(ValidationError::new("age", -5, "must be positive"))
}

fn handle_user() -> Result<(), Error> {
    process_user().map_err(|err| Error::wrap("user processing failed", err))
}

fn type_search(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "7. find() - type search through wrapping:")?;

    if let Err(err) = handle_user() {
        if let Some(validation) = find::<ValidationError>(&err) {
            writeln!(out, "   Found ValidationError in chain")?;
            writeln!(
                out,
                "   Field: {}, Value: {}, Message: {}",
                validation.field,
                value_text(&validation.value),
                validation.message
            )?;
        }
    }
    writeln!(out)
}

fn joining(out: &mut impl Write) -> io::Result<()> {
    let err1 = Error::new("error one");
    let err2 = Error::new("error two");
    let err3 = Error::new("error three");

    let combined: MultiError = [err1.clone(), err2.clone(), err3].into_iter().collect();

    writeln!(out, "8. Multiple errors (joined):")?;
    writeln!(out, "   Combined: {}", combined)?;
    writeln!(out, "   Contains err1: {}", is(&combined, &err1))?;
    writeln!(out, "   Contains err2: {}\n", is(&combined, &err2))
}

fn custom_multi_error(out: &mut impl Write) -> io::Result<()> {
    let mut multi = MultiError::new();
    multi.add(Error::new("first problem"));
    multi.add(Error::new("second problem"));
    multi.add(ErrorKind::Timeout);

    writeln!(out, "9. Custom multi-error type: {}", multi.summary())?;
    writeln!(out, "   Contains Timeout: {}\n", is(&multi, &ErrorKind::Timeout))
}

fn presence_checks(out: &mut impl Write) -> io::Result<()> {
    let mut err: Option<Error> = None;

    writeln!(out, "10. Error presence:")?;
    writeln!(out, "    None error is_none: {}", err.is_none())?;

    err = Some(Error::new("some error"));
    writeln!(out, "    Some error is_none: {}", err.is_none())?;
    writeln!(out, "    Some error is_some: {}\n", err.is_some())
}

fn panic_recovery(out: &mut impl Write) -> io::Result<()> {
    let result = guard::<(), _>(|| panic::panic_any(Error::new("something went terribly wrong")));

    if let Err(recovered) = result {
        writeln!(out, "11. Recovered from panic: {}", recovered)?;
        match &recovered {
            PanicError::Error(err) => writeln!(out, "    Panic was an error type: {}\n", err)?,
            other => writeln!(out, "    Panic was not an error type: {}\n", other)?,
        }
    }
    Ok(())
}

fn opaque_vs_wrap(out: &mut impl Write) -> io::Result<()> {
    let with_text = Error::opaque("failed to find user", &ErrorKind::NotFound);
    let with_wrap = Error::wrap("failed to find user", ErrorKind::NotFound);

    writeln!(out, "12. Error::opaque vs Error::wrap:")?;
    writeln!(out, "    is(opaque, NotFound): {}", is(&with_text, &ErrorKind::NotFound))?;
    writeln!(out, "    is(wrap, NotFound): {}\n", is(&with_wrap, &ErrorKind::NotFound))
}

fn open_file(path: &str) -> Result<File, Error> {
    File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::wrap("file does not exist", err),
        io::ErrorKind::PermissionDenied => Error::wrap("permission denied", err),
        _ => Error::wrap("failed to open file", err),
    })
}

fn practical_file_open(out: &mut impl Write, path: &str) -> io::Result<()> {
    writeln!(out, "13. Practical error handling:")?;
    if let Err(err) = open_file(path) {
        writeln!(out, "    Error: {}", render(&err))?;
        if is(&err, &io::ErrorKind::NotFound) {
            writeln!(out, "    Specific handling: file not found")?;
        }
    }
    writeln!(out)
}

/// Print every layer of `err` with its depth and concrete type.
pub fn inspect_chain(out: &mut impl Write, err: &(dyn StdError + 'static)) -> io::Result<()> {
    writeln!(out, "14. Error chain inspection:")?;
    writeln!(out, "    Full error: {}", render(err))?;
    for (depth, layer) in chain(err).enumerate() {
        writeln!(out, "    [{}] {} (type: {})", depth, render(layer), type_label(layer))?;
    }
    writeln!(out)
}

fn http_error(out: &mut impl Write) -> io::Result<()> {
    let err = HttpError::new(404, "GET", "/api/users/123", ErrorKind::NotFound);

    writeln!(out, "15. HTTP error with context: {}", render(&err))?;
    writeln!(out, "    Contains NotFound: {}\n", is(&err, &ErrorKind::NotFound))
}

fn parse_error(out: &mut impl Write) -> io::Result<()> {
    let input = "not-a-number";
    let Err(err) = input
        .parse::<i32>()
        .map_err(|err| Error::wrap(format!("parsing {input:?}"), err))
    else {
        return Ok(());
    };

    writeln!(out, "16. Error from the standard library (str::parse):")?;
    writeln!(out, "    Error: {}", render(&err))?;
    writeln!(out, "    Type: {}", type_label(&err))?;
    if let Some(parse) = find::<ParseIntError>(&err) {
        writeln!(out, "    Invalid value: {}", input)?;
        writeln!(out, "    Underlying kind: {:?}\n", parse.kind())?;
    }
    Ok(())
}

fn end_of_stream(out: &mut impl Write) -> io::Result<()> {
    let err = ErrorKind::EndOfStream;

    writeln!(out, "17. Special errors (end of stream):")?;
    writeln!(out, "    EOF error: {}", err)?;
    writeln!(out, "    Is EOF: {}", is(&err, &ErrorKind::EndOfStream))?;
    writeln!(out, "    EOF is often not an error but an expected condition\n")
}

fn complex_chain(out: &mut impl Write) -> io::Result<()> {
    let base = Error::new("network timeout");
    let database = DatabaseError::new("select", "users", base);
    let http = HttpError::new(500, "POST", "/api/data", database);
    let top = Error::wrap("request failed", http);

    writeln!(out, "18. Complex error chain:")?;
    inspect_chain(out, &top)?;

    let database = find::<DatabaseError>(&top);
    writeln!(out, "    Contains DatabaseError: {}", database.is_some())?;
    writeln!(out, "    Contains HttpError: {}", find::<HttpError>(&top).is_some())?;
    if let Some(database) = database {
        writeln!(out, "    Database operation: {}", database.operation)?;
        writeln!(out, "    Is retryable: {}\n", database.is_retryable())?;
    }
    Ok(())
}

/// Annotate whatever error the body produced, on the way out.
fn annotated_on_exit() -> Result<(), Error> {
    let body = || -> Result<(), Error> { Err(Error::new("original error")) };
    body().map_err(|err| Error::wrap("annotated_on_exit", err))
}

fn annotation_on_exit(out: &mut impl Write) -> io::Result<()> {
    if let Err(err) = annotated_on_exit() {
        writeln!(out, "19. Annotation on exit: {}\n", render(&err))?;
    }
    Ok(())
}

fn collect_errors() -> Option<MultiError> {
    let outcomes = vec![
        Some(Error::new("failed to validate input")),
        Some(Error::new("failed to connect to database")),
        None,
        Some(Error::new("failed to send notification")),
    ];
    join(outcomes)
}

fn aggregation(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "20. Error aggregation:")?;
    match collect_errors() {
        Some(errors) => writeln!(out, "    Aggregated errors: {}\n", errors)?,
        None => writeln!(out, "    No errors\n")?,
    }
    Ok(())
}

fn summary(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Summary of Key Concepts ===")?;
    writeln!(out, "1. Basic creation: Error::new(), format!() for the message")?;
    writeln!(out, "2. Sentinel errors: a closed ErrorKind enum")?;
    writeln!(out, "3. Custom types: derive thiserror::Error on a struct")?;
    writeln!(out, "4. Wrapping: Error::wrap() keeps the chain, Error::opaque() flattens it")?;
    writeln!(out, "5. Unwrapping: Error::source() peels one layer")?;
    writeln!(out, "6. Inspection: is() for identity, find() for types")?;
    writeln!(out, "7. Multiple errors: MultiError and join()")?;
    writeln!(out, "8. Panic recovery: guard() turns a panic into an Err")?;
    writeln!(out, "9. Always check: match on Result, propagate with ?")?;
    writeln!(out, "10. Add context: wrap errors as they bubble up")
}
