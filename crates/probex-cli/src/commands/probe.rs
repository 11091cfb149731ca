//! Probe commands

use clap::Args;
use probex_core_types::RequestContext;
use probex_engine::{apply_engine_command, EngineCommand, EngineCommandResult};
use probex_store::errors::Result;
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Grid extent along X (cells 0..=X)
    #[arg(long, allow_negative_numbers = true)]
    pub x: i64,

    /// Grid extent along Y (cells 0..=Y)
    #[arg(long, allow_negative_numbers = true)]
    pub y: i64,

    /// Initial heading: NORTH, EAST, SOUTH or WEST
    #[arg(long)]
    pub direction: String,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Probe id as printed by `create` or `list`
    pub probe_id: String,

    /// Command string, e.g. LMLMRM
    pub commands: String,
}

pub fn create(
    args: CreateArgs,
    conn: &mut Connection,
    ctx: &RequestContext,
) -> Result<EngineCommandResult> {
    let cmd = EngineCommand::ProbeCreate {
        x: args.x,
        y: args.y,
        direction: args.direction,
    };
    apply_engine_command(cmd, conn, ctx)
}

pub fn list(conn: &mut Connection, ctx: &RequestContext) -> Result<EngineCommandResult> {
    apply_engine_command(EngineCommand::ProbeList, conn, ctx)
}

pub fn move_probe(
    args: MoveArgs,
    conn: &mut Connection,
    ctx: &RequestContext,
) -> Result<EngineCommandResult> {
    let cmd = EngineCommand::ProbeMove {
        probe_id: args.probe_id,
        commands: args.commands,
    };
    apply_engine_command(cmd, conn, ctx)
}
