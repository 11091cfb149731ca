//! Probe command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for probe operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

use std::time::Instant;

use probex_core::coordinator::{self, NewProbe};
use probex_core::errors::ExError;
use probex_core::{log_op_end, log_op_error, log_op_start, ProbeList, ProbeView};
use probex_store::errors::Result;
use probex_store::SqliteProbeStore;
use rusqlite::Connection;

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Launch a probe at the origin of a new grid
///
/// ## Errors
///
/// - `InvalidInput`: negative extent or unknown direction; nothing is stored
/// - `Persistence`: database error
pub fn probe_create(request: &NewProbe, conn: &mut Connection) -> Result<ProbeView> {
    log_op_start!("probe_create", size_x = request.x, size_y = request.y);
    let start = Instant::now();

    let mut store = SqliteProbeStore::new(conn);
    let probe = coordinator::create_probe(&mut store, request).map_err(|e| {
        log_op_error!("probe_create", e.clone(), duration_ms = elapsed_ms(start));
        ExError::from(e)
    })?;

    log_op_end!(
        "probe_create",
        duration_ms = elapsed_ms(start),
        probe_id = %probe.id
    );

    Ok(probe.view())
}

/// List all probes in creation order
///
/// ## Errors
///
/// - `Persistence`: database error
pub fn probe_list(conn: &mut Connection) -> Result<ProbeList> {
    log_op_start!("probe_list");
    let start = Instant::now();

    let store = SqliteProbeStore::new(conn);
    let probes = coordinator::list_probes(&store).map_err(|e| {
        log_op_error!("probe_list", e.clone(), duration_ms = elapsed_ms(start));
        ExError::from(e)
    })?;

    log_op_end!(
        "probe_list",
        duration_ms = elapsed_ms(start),
        count = probes.len()
    );

    Ok(ProbeList::from(probes.as_slice()))
}

/// Apply a command string to a probe, all or nothing
///
/// ## Errors
///
/// - `InvalidInput`: malformed id, empty command string, or a character
///   outside `M`/`L`/`R`
/// - `NotFound`: no probe with that id
/// - `BoundaryViolation`: some `M` would leave the grid; carries the step
/// - `Persistence`: database error
pub fn probe_move(probe_id: &str, commands: &str, conn: &mut Connection) -> Result<ProbeView> {
    log_op_start!("probe_move", probe_id = probe_id, command_len = commands.len());
    let start = Instant::now();

    let mut store = SqliteProbeStore::new(conn);
    let probe = coordinator::move_probe(&mut store, probe_id, commands).map_err(|e| {
        log_op_error!(
            "probe_move",
            e.clone(),
            duration_ms = elapsed_ms(start),
            probe_id = probe_id
        );
        let err = ExError::from(e);
        if err.entity_id().is_some() {
            err
        } else {
            err.with_entity_id(probe_id)
        }
    })?;

    log_op_end!(
        "probe_move",
        duration_ms = elapsed_ms(start),
        probe_id = probe_id,
        x = probe.x,
        y = probe.y,
        direction = probe.direction.as_str()
    );

    Ok(probe.view())
}
