//! Engine-level probe commands.
//!
//! `apply_engine_command` is the single entry point a transport calls: it
//! opens a span carrying the request's correlation ids, dispatches to the
//! handler, and stamps any error with the same ids.

use probex_core::coordinator::NewProbe;
use probex_core::{ProbeList, ProbeView};
use probex_core_types::RequestContext;
use probex_store::errors::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::commands::probe::{probe_create, probe_list, probe_move};

/// Engine-level commands that require the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Launch a probe on an `x` by `y` grid.
    ProbeCreate { x: i64, y: i64, direction: String },
    /// List every probe.
    ProbeList,
    /// Run a command string against one probe.
    ProbeMove { probe_id: String, commands: String },
}

impl EngineCommand {
    pub fn op_name(&self) -> &'static str {
        match self {
            EngineCommand::ProbeCreate { .. } => "probe_create",
            EngineCommand::ProbeList => "probe_list",
            EngineCommand::ProbeMove { .. } => "probe_move",
        }
    }
}

/// Result of applying an engine command.
///
/// Serializes to the external JSON shape of the command: a probe view for
/// create and move, `{"probes": [...]}` for list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EngineCommandResult {
    ProbeCreated(ProbeView),
    ProbeListed(ProbeList),
    ProbeMoved(ProbeView),
}

/// Apply an engine command within a request context.
pub fn apply_engine_command(
    cmd: EngineCommand,
    conn: &mut Connection,
    ctx: &RequestContext,
) -> Result<EngineCommandResult> {
    let span = tracing::info_span!(
        "engine_command",
        op = cmd.op_name(),
        request_id = %ctx.request_id,
        trace_id = ctx.trace_id.as_ref().map(|t| t.as_str()),
    );
    let _guard = span.enter();

    let result = match cmd {
        EngineCommand::ProbeCreate { x, y, direction } => {
            probe_create(&NewProbe::new(x, y, direction), conn).map(EngineCommandResult::ProbeCreated)
        }
        EngineCommand::ProbeList => probe_list(conn).map(EngineCommandResult::ProbeListed),
        EngineCommand::ProbeMove { probe_id, commands } => {
            probe_move(&probe_id, &commands, conn).map(EngineCommandResult::ProbeMoved)
        }
    };

    result.map_err(|err| {
        let err = err.with_request_id(ctx.request_id.clone());
        match &ctx.trace_id {
            Some(trace_id) => err.with_trace_id(trace_id.clone()),
            None => err,
        }
    })
}
