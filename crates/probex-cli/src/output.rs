//! Result and error rendering
//!
//! Results go to stdout as JSON. Errors go to stderr as
//! `{"code", "status", "detail"}` and pick the process exit code.

use probex_core::{ExError, ExErrorKind};
use serde::Serialize;
use serde_json::json;

/// Exit code for an error kind
pub fn exit_code(kind: ExErrorKind) -> i32 {
    match kind {
        ExErrorKind::InvalidInput => 2,
        ExErrorKind::NotFound => 3,
        ExErrorKind::BoundaryViolation => 4,
        _ => 1,
    }
}

pub fn error_body(err: &ExError) -> serde_json::Value {
    json!({
        "code": err.code(),
        "status": err.status(),
        "detail": err.message(),
    })
}

pub fn print_success<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => {
            println!("{}", rendered);
            0
        }
        Err(e) => print_error(
            &ExError::new(ExErrorKind::Serialization).with_message(e.to_string()),
        ),
    }
}

pub fn print_error(err: &ExError) -> i32 {
    eprintln!("{}", error_body(err));
    exit_code(err.kind())
}
