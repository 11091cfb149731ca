//! Apply Atomicity Tests
//!
//! Functional-boundary guarantees of `apply()`:
//!
//! 1. A successful command returns the new state and its output
//! 2. A failed command leaves a cloned pre-state untouched
//! 3. Invalid input surfaces typed errors, never panics

#![allow(clippy::unwrap_used, clippy::expect_used)]

use probex_core::{
    apply, Direction, MemoryStore, NewProbe, Probe, ProbeCommand, ProbeCommandOutput, ProbeError,
};

fn create(state: MemoryStore, x: i64, y: i64, direction: &str) -> (MemoryStore, Probe) {
    let (state, output) =
        apply(state, ProbeCommand::Create(NewProbe::new(x, y, direction))).unwrap();
    match output {
        ProbeCommandOutput::Created(probe) => (state, probe),
        other => panic!("Expected Created, got {:?}", other),
    }
}

fn move_cmd(probe: &Probe, commands: &str) -> ProbeCommand {
    ProbeCommand::Move {
        probe_id: probe.id.to_string(),
        commands: commands.to_string(),
    }
}

#[test]
fn test_apply_returns_new_state_on_success() {
    // GIVEN a store with one probe
    let (state, probe) = create(MemoryStore::new(), 5, 5, "NORTH");

    // WHEN a valid move is applied
    let (state, output) = apply(state, move_cmd(&probe, "MMR")).unwrap();

    // THEN the output and the new state agree
    let ProbeCommandOutput::Moved(moved) = output else {
        panic!("Expected Moved");
    };
    assert_eq!((moved.x, moved.y, moved.direction), (0, 2, Direction::East));
    assert_eq!(state.probe(&probe.id), Some(&moved));
}

#[test]
fn test_apply_fails_without_partial_mutation() {
    // GIVEN a store with a probe on a 2x2 grid
    let (state, probe) = create(MemoryStore::new(), 2, 2, "NORTH");
    let snapshot = state.clone();

    // WHEN a sequence that turns, moves, then leaves the grid is applied
    let result = apply(state, move_cmd(&probe, "RMMMM"));

    // THEN it fails and the snapshot still holds the launch state
    assert!(matches!(result, Err(ProbeError::OutOfBounds { step: 4, .. })));
    assert_eq!(snapshot.probe(&probe.id), Some(&probe));
}

#[test]
fn test_apply_surfaces_typed_errors() {
    let (state, probe) = create(MemoryStore::new(), 2, 2, "NORTH");

    let cases = [
        (
            ProbeCommand::Create(NewProbe::new(-1, 2, "NORTH")),
            "X must be a non-negative integer",
        ),
        (
            ProbeCommand::Create(NewProbe::new(1, 2, "north")),
            "Direction must be one of",
        ),
        (
            move_cmd(&probe, ""),
            "Field 'commands' is required",
        ),
        (
            move_cmd(&probe, "MQ"),
            "Invalid command sequence",
        ),
        (
            ProbeCommand::Move {
                probe_id: "bla-bla".to_string(),
                commands: "M".to_string(),
            },
            "Invalid probe ID format",
        ),
    ];

    for (cmd, expected) in cases {
        let op = cmd.op_name();
        let err = apply(state.clone(), cmd).unwrap_err();
        assert!(
            err.to_string().starts_with(expected),
            "{}: unexpected {:?}",
            op,
            err
        );
    }
}

#[test]
fn test_apply_list_output_shape() {
    let (state, _) = create(MemoryStore::new(), 5, 5, "NORTH");
    let (state, _) = create(state, 3, 3, "SOUTH");

    let (_, output) = apply(state, ProbeCommand::List).unwrap();
    let json = output.to_json().unwrap();

    let probes = json["probes"].as_array().unwrap();
    assert_eq!(probes.len(), 2);
    assert_eq!(probes[1]["direction"], "SOUTH");
    assert_eq!(probes[1]["x"], 0);
}
