//! Operation lifecycle macros
//!
//! Callers need `tracing` as a direct dependency; field names and event
//! values come from `probex_core_types::schema`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use probex_core::log_op_start;
/// log_op_start!("move_probe");
/// log_op_start!("move_probe", probe_id = "p1", command_len = 9);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use probex_core::log_op_end;
/// log_op_end!("list_probes", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a failed operation
///
/// `$err` is anything convertible into `ExError`. Rejections (4xx) are
/// logged at `warn`, system failures at `error`.
///
/// # Example
///
/// ```
/// # use probex_core::{log_op_error, ProbeError};
/// log_op_error!("move_probe", ProbeError::EmptyCommands, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = ::std::convert::From::from($err);
        if ex_err.kind().is_rejection() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = $crate::core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err.kind = ?ex_err.kind(),
                err.code = ex_err.code(),
                $($field)*
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = $crate::core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err.kind = ?ex_err.kind(),
                err.code = ex_err.code(),
                $($field)*
            );
        }
    }};
}
