pub mod direction;
pub mod probe;

pub use direction::Direction;
pub use probe::{Axis, Grid, Probe, ProbeId, ProbeList, ProbeState, ProbeView};
