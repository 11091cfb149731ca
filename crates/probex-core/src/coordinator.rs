//! Probe state coordinator
//!
//! Owns the atomic-apply contract for probe operations. A move is
//! validated up front (identifier, then command string), evaluated by the
//! interpreter against a snapshot of the stored state, and written back by
//! the store only if the whole sequence succeeded.
//!
//! Lifecycle logging belongs to the engine; this layer only emits
//! `tracing::debug!` details.

use crate::errors::{ProbeError, Result};
use crate::interpreter;
use crate::model::{Axis, Direction, Grid, Probe, ProbeId};
use crate::ops::ProbeStore;

/// Raw create request as received from a caller
///
/// Extents are signed so that negative input can be rejected with a
/// precise message instead of failing to parse upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProbe {
    /// Grid extent along X
    pub x: i64,
    /// Grid extent along Y
    pub y: i64,
    pub direction: String,
}

impl NewProbe {
    pub fn new(x: i64, y: i64, direction: impl Into<String>) -> Self {
        Self {
            x,
            y,
            direction: direction.into(),
        }
    }

    /// Check the request, in field order
    ///
    /// # Errors
    ///
    /// * `InvalidGridSize` - an extent is negative or exceeds `u32::MAX`
    /// * `InvalidDirection` - the heading is not an exact compass name
    pub fn validate(&self) -> Result<(Grid, Direction)> {
        let size_x = extent(Axis::X, self.x)?;
        let size_y = extent(Axis::Y, self.y)?;
        let direction = self.direction.parse::<Direction>()?;
        Ok((Grid::new(size_x, size_y), direction))
    }
}

fn extent(axis: Axis, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ProbeError::InvalidGridSize { axis, value })
}

/// Launch a new probe at the origin of its grid
///
/// # Errors
///
/// Any validation error from [`NewProbe::validate`] (nothing is stored), or
/// a store error.
pub fn create_probe(store: &mut dyn ProbeStore, request: &NewProbe) -> Result<Probe> {
    let (grid, direction) = request.validate()?;
    let probe = Probe::new(ProbeId::new(), grid, direction);

    store.insert(probe.clone())?;
    tracing::debug!(probe_id = %probe.id, size_x = grid.size_x, size_y = grid.size_y, "probe created");

    Ok(probe)
}

/// List every probe in creation order
///
/// # Errors
///
/// Returns a store error if the backend fails.
pub fn list_probes(store: &dyn ProbeStore) -> Result<Vec<Probe>> {
    store.list()
}

/// Fetch one probe by its caller-supplied identifier
///
/// # Errors
///
/// * `InvalidProbeId` - `raw_id` is not a UUID
/// * `ProbeNotFound` - no probe has that id
pub fn get_probe(store: &dyn ProbeStore, raw_id: &str) -> Result<Probe> {
    let id = ProbeId::parse(raw_id)?;
    store.get(&id)?.ok_or_else(|| ProbeError::ProbeNotFound {
        probe_id: id.to_string(),
    })
}

/// Apply a command string to a stored probe, all or nothing
///
/// Checks run in this order, and each failure leaves the stored probe
/// untouched:
///
/// 1. identifier format (`InvalidProbeId`)
/// 2. command string (`EmptyCommands`, `InvalidCommand`) - storage is not read
/// 3. lookup (`ProbeNotFound`)
/// 4. speculative execution on a copy (`OutOfBounds`)
///
/// # Errors
///
/// Any of the above, or a store error.
pub fn move_probe(store: &mut dyn ProbeStore, raw_id: &str, commands: &str) -> Result<Probe> {
    let id = ProbeId::parse(raw_id)?;
    let sequence = interpreter::parse_commands(commands)?;

    let result = store.update_atomically(&id, &mut |current: &Probe| {
        interpreter::execute(current.state(), current.grid(), &sequence)
    });

    match &result {
        Ok(probe) => tracing::debug!(
            probe_id = %id,
            steps = sequence.len(),
            x = probe.x,
            y = probe.y,
            direction = %probe.direction,
            "move committed"
        ),
        Err(err) => tracing::debug!(probe_id = %id, steps = sequence.len(), error = %err, "move rejected"),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProbeState;
    use crate::ops::MemoryStore;

    fn store_with(direction: &str, x: i64, y: i64) -> (MemoryStore, Probe) {
        let mut store = MemoryStore::new();
        let probe = create_probe(&mut store, &NewProbe::new(x, y, direction)).unwrap();
        (store, probe)
    }

    #[test]
    fn test_create_probe_at_origin() {
        let (store, probe) = store_with("NORTH", 5, 5);

        assert_eq!(probe.state(), ProbeState::origin(Direction::North));
        assert_eq!(probe.grid(), Grid::new(5, 5));
        assert_eq!(store.get(&probe.id).unwrap(), Some(probe));
    }

    #[test]
    fn test_create_probe_validation() {
        let cases = [
            (NewProbe::new(-1, 5, "NORTH"), "X must be a non-negative integer"),
            (NewProbe::new(5, -2, "EAST"), "Y must be a non-negative integer"),
            (
                NewProbe::new(5, 5, "UP"),
                "Direction must be one of ['NORTH', 'EAST', 'SOUTH', 'WEST']",
            ),
            (
                NewProbe::new(i64::from(u32::MAX) + 1, 5, "NORTH"),
                "X must be a non-negative integer",
            ),
        ];

        for (request, expected) in cases {
            let mut store = MemoryStore::new();
            let err = create_probe(&mut store, &request).unwrap_err();
            assert_eq!(err.to_string(), expected);
            assert!(store.is_empty(), "nothing may be persisted");
        }
    }

    #[test]
    fn test_move_probe_commits_full_sequence() {
        let (mut store, probe) = store_with("NORTH", 5, 5);

        let moved = move_probe(&mut store, &probe.id.to_string(), "LRMRMMRRM").unwrap();

        assert_eq!(moved.state(), ProbeState::new(1, 1, Direction::West));
        assert_eq!(store.probe(&probe.id).unwrap().state(), moved.state());
    }

    #[test]
    fn test_move_probe_partial_sequence_not_applied() {
        let (mut store, probe) = store_with("EAST", 2, 2);

        let err = move_probe(&mut store, &probe.id.to_string(), "MMM").unwrap_err();

        assert!(matches!(err, ProbeError::OutOfBounds { step: 3, .. }));
        assert_eq!(store.probe(&probe.id), Some(&probe));
    }

    #[test]
    fn test_move_probe_invalid_id_checked_first() {
        let mut store = MemoryStore::new();
        let err = move_probe(&mut store, "bla-bla", "").unwrap_err();
        assert!(matches!(err, ProbeError::InvalidProbeId { .. }));
    }

    #[test]
    fn test_move_probe_commands_checked_before_lookup() {
        let mut store = MemoryStore::new();
        let unknown = ProbeId::new().to_string();

        assert_eq!(
            move_probe(&mut store, &unknown, "  "),
            Err(ProbeError::EmptyCommands)
        );
        assert!(matches!(
            move_probe(&mut store, &unknown, "MXR"),
            Err(ProbeError::InvalidCommand { found: 'X', .. })
        ));
        assert!(matches!(
            move_probe(&mut store, &unknown, "M"),
            Err(ProbeError::ProbeNotFound { .. })
        ));
    }

    #[test]
    fn test_get_probe() {
        let (store, probe) = store_with("WEST", 1, 1);

        assert_eq!(get_probe(&store, &probe.id.to_string()).unwrap(), probe);
        assert!(matches!(
            get_probe(&store, &ProbeId::new().to_string()),
            Err(ProbeError::ProbeNotFound { .. })
        ));
    }
}
