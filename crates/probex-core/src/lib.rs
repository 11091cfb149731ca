//! Probex Core - grid-bounded probe kernel
//!
//! This crate provides the domain model and the command-execution engine:
//! - Probe, Grid, Direction and ProbeState models
//! - The command interpreter (`M`, `L`, `R` over a working copy)
//! - The probe state coordinator (speculative apply, commit on success)
//! - The `ProbeStore` seam with an in-memory implementation
//! - The error facility and structured logging facility

pub mod apply;
pub mod commands;
pub mod coordinator;
pub mod errors;
pub mod interpreter;
pub mod logging_facility;
pub mod model;
pub mod ops;

// Used by the logging macros so callers don't need a direct dependency
pub use probex_core_types as core_types;

// Re-export commonly used types
pub use apply::apply;
pub use commands::{ProbeCommand, ProbeCommandOutput};
pub use coordinator::NewProbe;
pub use errors::{ExError, ExErrorKind, ProbeError, Result};
pub use interpreter::{CommandSequence, Instruction};
pub use model::{Axis, Direction, Grid, Probe, ProbeId, ProbeList, ProbeState, ProbeView};
pub use ops::{MemoryStore, ProbeStore};
