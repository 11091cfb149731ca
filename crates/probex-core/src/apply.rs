//! Functional-boundary apply function
//!
//! `apply()` is the entry point for mutating an in-memory fleet in the
//! functional-boundary style.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: either the command succeeds and a new state is
//!   returned, or it fails and the state the caller cloned from is untouched
//! - **No panics**: invalid input returns typed errors
//!
//! ## Example
//!
//! ```
//! use probex_core::{apply, MemoryStore, NewProbe, ProbeCommand, ProbeCommandOutput};
//!
//! let state = MemoryStore::new();
//! let (state, output) = apply(state, ProbeCommand::Create(NewProbe::new(5, 5, "NORTH"))).unwrap();
//! let ProbeCommandOutput::Created(probe) = output else { unreachable!() };
//!
//! let cmd = ProbeCommand::Move {
//!     probe_id: probe.id.to_string(),
//!     commands: "LRMRMMRRM".to_string(),
//! };
//! let (_state, output) = apply(state, cmd).unwrap();
//! let ProbeCommandOutput::Moved(probe) = output else { unreachable!() };
//! assert_eq!((probe.x, probe.y, probe.direction.as_str()), (1, 1, "WEST"));
//! ```

use crate::commands::{ProbeCommand, ProbeCommandOutput};
use crate::coordinator;
use crate::errors::Result;
use crate::ops::MemoryStore;

/// Apply a command to a store, returning the new store state and output
///
/// # Errors
///
/// Returns the coordinator's error for the command; see `ProbeError` for
/// the taxonomy. The consumed state is dropped in that case, so callers
/// that need it afterwards pass a clone.
pub fn apply(mut state: MemoryStore, cmd: ProbeCommand) -> Result<(MemoryStore, ProbeCommandOutput)> {
    let output = match cmd {
        ProbeCommand::Create(request) => {
            ProbeCommandOutput::Created(coordinator::create_probe(&mut state, &request)?)
        }

        ProbeCommand::List => ProbeCommandOutput::Listed(coordinator::list_probes(&state)?),

        ProbeCommand::Move { probe_id, commands } => {
            ProbeCommandOutput::Moved(coordinator::move_probe(&mut state, &probe_id, &commands)?)
        }
    };

    Ok((state, output))
}
