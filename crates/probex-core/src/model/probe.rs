use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::direction::Direction;
use crate::errors::{ProbeError, Result};

/// Unique, immutable probe identifier (UUID, generated as v7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbeId(Uuid);

impl ProbeId {
    /// Generate a new time-ordered identifier
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parse a caller-supplied identifier
    ///
    /// # Errors
    ///
    /// Returns `InvalidProbeId` if `raw` is not a well-formed UUID.
    pub fn parse(raw: &str) -> Result<Self> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| ProbeError::InvalidProbeId {
                raw: raw.to_string(),
            })
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProbeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProbeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ProbeId {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Grid axis, used to name the offending field in validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

/// Inclusive grid extents: valid cells are `0..=size_x` by `0..=size_y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub size_x: u32,
    pub size_y: u32,
}

impl Grid {
    pub fn new(size_x: u32, size_y: u32) -> Self {
        Self { size_x, size_y }
    }

    /// Check that a cell lies within the grid
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x <= self.size_x && y <= self.size_y
    }
}

/// The mutable part of a probe: position and heading
///
/// This is a plain `Copy` value so the interpreter can work on a
/// stack-local copy and hand back a complete replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeState {
    pub x: u32,
    pub y: u32,
    pub direction: Direction,
}

impl ProbeState {
    pub fn new(x: u32, y: u32, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    /// Launch state: the grid origin facing `direction`
    pub fn origin(direction: Direction) -> Self {
        Self::new(0, 0, direction)
    }
}

/// Probe - a rover launched onto a bounded grid
///
/// `size_x`/`size_y` are fixed at creation. `x`, `y` and `direction`
/// change only when a whole command sequence commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Probe {
    /// Unique identifier for this probe (UUID v7)
    pub id: ProbeId,

    /// Grid extent along X
    pub size_x: u32,

    /// Grid extent along Y
    pub size_y: u32,

    pub x: u32,
    pub y: u32,
    pub direction: Direction,

    /// Timestamp when this probe was launched
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last committed move
    pub updated_at: DateTime<Utc>,
}

impl Probe {
    /// Create a probe at the origin of `grid`, facing `direction`
    pub fn new(id: ProbeId, grid: Grid, direction: Direction) -> Self {
        let now = Utc::now();
        let origin = ProbeState::origin(direction);
        Self {
            id,
            size_x: grid.size_x,
            size_y: grid.size_y,
            x: origin.x,
            y: origin.y,
            direction: origin.direction,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.size_x, self.size_y)
    }

    /// Snapshot of the mutable state
    pub fn state(&self) -> ProbeState {
        ProbeState::new(self.x, self.y, self.direction)
    }

    /// Check the bounds invariant against this probe's own grid
    pub fn is_within_grid(&self) -> bool {
        self.grid().contains(self.x, self.y)
    }

    /// Replace position and heading with a committed result
    pub fn commit_state(&mut self, state: ProbeState) {
        self.x = state.x;
        self.y = state.y;
        self.direction = state.direction;
        self.updated_at = Utc::now();
    }

    pub fn view(&self) -> ProbeView {
        ProbeView::from(self)
    }
}

/// External representation of a probe: `{id, x, y, direction}`
///
/// Grid extents are deliberately not echoed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeView {
    pub id: ProbeId,
    pub x: u32,
    pub y: u32,
    pub direction: Direction,
}

impl From<&Probe> for ProbeView {
    fn from(probe: &Probe) -> Self {
        Self {
            id: probe.id,
            x: probe.x,
            y: probe.y,
            direction: probe.direction,
        }
    }
}

/// External representation of the list verb: `{"probes": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProbeList {
    pub probes: Vec<ProbeView>,
}

impl From<&[Probe]> for ProbeList {
    fn from(probes: &[Probe]) -> Self {
        Self {
            probes: probes.iter().map(ProbeView::from).collect(),
        }
    }
}
