//! Structured error types carrying their own context fields.

use serde_json::Value;
use thiserror::Error;

/// Boxed cause used by the structured types below.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A single field that failed validation. Leaf error, no cause.
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "validation failed for field '{field}' (value: {shown}): {message}",
    shown = value_text(.value)
)]
pub struct ValidationError {
    pub field: String,
    pub value: Value,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        value: impl Into<Value>,
        message: impl Into<String>,
    ) -> Self {
        ValidationError {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}

/// Strings print bare, everything else as JSON.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Failure of a database operation on a table.
#[derive(Error, Debug)]
#[error("database error during {operation} on table {table}")]
pub struct DatabaseError {
    pub operation: String,
    pub table: String,
    #[source]
    pub source: BoxError,
}

impl DatabaseError {
    pub fn new(
        operation: impl Into<String>,
        table: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        DatabaseError {
            operation: operation.into(),
            table: table.into(),
            source: source.into(),
        }
    }

    /// Reads can be retried safely; writes cannot.
    pub fn is_retryable(&self) -> bool {
        matches!(self.operation.as_str(), "select" | "read")
    }
}

/// HTTP failure with the request that caused it.
#[derive(Error, Debug)]
#[error("HTTP {status} error on {method} {url}")]
pub struct HttpError {
    pub status: u16,
    pub method: String,
    pub url: String,
    #[source]
    pub source: BoxError,
}

impl HttpError {
    pub fn new(
        status: u16,
        method: impl Into<String>,
        url: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        HttpError {
            status,
            method: method.into(),
            url: url.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{is, render, Error, ErrorKind};

    #[test]
    fn test_validation_display() {
        let err = ValidationError::new("age", -5, "must be positive");
        assert_eq!(
            err.to_string(),
            "validation failed for field 'age' (value: -5): must be positive"
        );
    }

    #[test]
    fn test_validation_display_string_value_unquoted() {
        let err = ValidationError::new("email", "invalid-email", "must be a valid email address");
        assert_eq!(
            err.to_string(),
            "validation failed for field 'email' (value: invalid-email): \
             must be a valid email address"
        );
        assert_eq!(value_text(&Value::from(true)), "true");
        assert_eq!(value_text(&serde_json::json!(["a"])), r#"["a"]"#);
    }

    #[test]
    fn test_database_error_renders_cause() {
        let err = DatabaseError::new("insert", "users", Error::new("duplicate key violation"));
        assert_eq!(
            render(&err),
            "database error during insert on table users: duplicate key violation"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_retryable_operations() {
        let cases = [("select", true), ("read", true), ("insert", false), ("update", false)];
        for (op, expected) in cases {
            let err = DatabaseError::new(op, "users", ErrorKind::Timeout);
            assert_eq!(err.is_retryable(), expected, "operation {op}");
        }
    }

    #[test]
    fn test_http_error_contains_sentinel() {
        let err = HttpError::new(404, "GET", "/api/users/123", ErrorKind::NotFound);
        assert_eq!(render(&err), "HTTP 404 error on GET /api/users/123: resource not found");
        assert!(is(&err, &ErrorKind::NotFound));
    }
}
