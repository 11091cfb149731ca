//! Structured logging facility for Probex
//!
//! One initialization point, three operation macros, and an in-memory
//! capture layer for tests:
//!
//! - `init(profile)` installs the global subscriber once per process
//! - `log_op_start!`, `log_op_end!`, `log_op_error!` emit the canonical
//!   `component`/`op`/`event` fields
//! - `init_test_capture()` records events for assertions
//!
//! Only the engine emits operation lifecycle events. The kernel and the
//! store log at `debug` level without the `event` field, so a single move
//! produces exactly one start and one end.
//!
//! # Usage
//!
//! ```rust
//! use probex_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
