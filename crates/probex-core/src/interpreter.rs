//! Command interpreter
//!
//! Pure evaluation of a command string against a probe's state and grid.
//! Nothing here touches storage: the caller passes a `ProbeState` by value
//! and gets back either the full result or the reason the sequence was
//! rejected.
//!
//! ## Validation order
//!
//! 1. The whole string is checked before any instruction runs: an empty or
//!    whitespace-only string, or any character outside `M`/`L`/`R`, rejects
//!    the entire sequence.
//! 2. Instructions run left to right on a working copy. Every `M` is bounds
//!    checked against the running position; the first violation aborts.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ProbeError, Result};
use crate::model::{Grid, ProbeState};

/// A single movement instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `L` - rotate counter-clockwise
    Left,
    /// `R` - rotate clockwise
    Right,
    /// `M` - advance one unit along the current heading
    Move,
}

impl Instruction {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Instruction::Left),
            'R' => Some(Instruction::Right),
            'M' => Some(Instruction::Move),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Instruction::Left => 'L',
            Instruction::Right => 'R',
            Instruction::Move => 'M',
        }
    }
}

/// A validated, non-empty sequence of instructions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSequence(Vec<Instruction>);

impl CommandSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed sequence; present for API symmetry
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Instruction] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a CommandSequence {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CommandSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|i| write!(f, "{}", i.as_char()))
    }
}

impl FromStr for CommandSequence {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_commands(s)
    }
}

/// Validate a raw command string as a whole
///
/// # Errors
///
/// * `EmptyCommands` - if the string is empty or whitespace-only
/// * `InvalidCommand` - if any character is not `M`, `L` or `R`; carries the
///   first offending character and its position
pub fn parse_commands(input: &str) -> Result<CommandSequence> {
    if input.trim().is_empty() {
        return Err(ProbeError::EmptyCommands);
    }

    input
        .chars()
        .enumerate()
        .map(|(index, found)| {
            Instruction::from_char(found).ok_or(ProbeError::InvalidCommand { found, index })
        })
        .collect::<Result<Vec<_>>>()
        .map(CommandSequence)
}

/// Apply one instruction to a state
///
/// `step` is the 1-based position of the instruction in its sequence and is
/// only used to report where a boundary violation happened.
///
/// # Errors
///
/// Returns `OutOfBounds` if a `Move` would leave the grid. Turns never fail.
pub fn step(state: ProbeState, grid: Grid, instruction: Instruction, step: usize) -> Result<ProbeState> {
    match instruction {
        Instruction::Left => Ok(ProbeState {
            direction: state.direction.turn_left(),
            ..state
        }),
        Instruction::Right => Ok(ProbeState {
            direction: state.direction.turn_right(),
            ..state
        }),
        Instruction::Move => advance(state, grid, step),
    }
}

fn advance(state: ProbeState, grid: Grid, step: usize) -> Result<ProbeState> {
    let (dx, dy) = state.direction.offset();
    let target_x = i64::from(state.x) + dx;
    let target_y = i64::from(state.y) + dy;

    // Negative targets fail the conversion, so underflow is a violation too
    match (u32::try_from(target_x), u32::try_from(target_y)) {
        (Ok(x), Ok(y)) if grid.contains(x, y) => Ok(ProbeState { x, y, ..state }),
        _ => Err(ProbeError::OutOfBounds {
            step,
            direction: state.direction,
            x: target_x,
            y: target_y,
        }),
    }
}

/// Run a validated sequence against a starting state
///
/// `start` is taken by value; the caller's copy is never modified, so an
/// error leaves whatever the caller holds exactly as it was.
///
/// # Errors
///
/// * `OutOfBounds` - the first `M` that would leave the grid
/// * `Internal` - `start` itself lies outside `grid`
pub fn execute(start: ProbeState, grid: Grid, commands: &CommandSequence) -> Result<ProbeState> {
    if !grid.contains(start.x, start.y) {
        return Err(ProbeError::Internal {
            message: format!(
                "probe state ({}, {}) lies outside its {}x{} grid",
                start.x, start.y, grid.size_x, grid.size_y
            ),
        });
    }

    commands
        .iter()
        .enumerate()
        .try_fold(start, |working, (i, instruction)| {
            step(working, grid, *instruction, i + 1)
        })
}

/// Validate and run a raw command string
///
/// # Errors
///
/// Any error from [`parse_commands`] or [`execute`].
pub fn run(start: ProbeState, grid: Grid, commands: &str) -> Result<ProbeState> {
    let sequence = parse_commands(commands)?;
    execute(start, grid, &sequence)
}
