//! Structured log vocabulary
//!
//! Field names and event values shared by the logging macros, the engine
//! handlers and the test capture layer. `tracing` macros need field names
//! as identifiers, so emitters spell them out; these constants are what
//! readers of the log stream match against.

/// Module path of the emitting code
pub const FIELD_COMPONENT: &str = "component";
/// Operation name, e.g. `probe_move`
pub const FIELD_OP: &str = "op";
/// One of [`LIFECYCLE_EVENTS`]
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

pub const FIELD_PROBE_ID: &str = "probe_id";
/// Length of the raw command string of a move
pub const FIELD_COMMAND_LEN: &str = "command_len";

/// `ExErrorKind` in Debug form
pub const FIELD_ERR_KIND: &str = "err.kind";
/// Stable `ERR_*` code
pub const FIELD_ERR_CODE: &str = "err.code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

/// Every value `event` may take, in the order an operation emits them
pub const LIFECYCLE_EVENTS: [&str; 3] = [EVENT_START, EVENT_END, EVENT_END_ERROR];
