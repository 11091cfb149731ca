//! Command types for the three probe verbs
//!
//! Commands are processed by the `apply()` function, which takes ownership
//! of the current state, executes the command, and returns the new state
//! together with the command's output.

use crate::coordinator::NewProbe;
use crate::model::{Probe, ProbeList, ProbeView};

/// Probe verbs: create, list, move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeCommand {
    /// Launch a probe on an `x` by `y` grid facing `direction`
    Create(NewProbe),

    /// List every probe
    List,

    /// Run a command string against one probe
    Move { probe_id: String, commands: String },
}

impl ProbeCommand {
    /// Stable operation name used in logs and error context
    pub fn op_name(&self) -> &'static str {
        match self {
            ProbeCommand::Create(_) => "create_probe",
            ProbeCommand::List => "list_probes",
            ProbeCommand::Move { .. } => "move_probe",
        }
    }
}

/// Output of a successfully applied command
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeCommandOutput {
    Created(Probe),
    Listed(Vec<Probe>),
    Moved(Probe),
}

impl ProbeCommandOutput {
    /// External JSON shape of the output
    ///
    /// # Errors
    ///
    /// Returns a serde error if the view cannot be encoded.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            ProbeCommandOutput::Created(probe) | ProbeCommandOutput::Moved(probe) => {
                serde_json::to_value(ProbeView::from(probe))
            }
            ProbeCommandOutput::Listed(probes) => {
                serde_json::to_value(ProbeList::from(probes.as_slice()))
            }
        }
    }
}
