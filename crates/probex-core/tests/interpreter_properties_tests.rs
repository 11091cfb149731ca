//! Interpreter Property Tests
//!
//! Randomized checks of the movement laws:
//!
//! 1. A successful run always ends inside the grid
//! 2. A rejected move leaves the stored probe exactly as it was
//! 3. Four turns in one direction, or a turn followed by its opposite,
//!    never change the heading or position

use probex_core::interpreter::{parse_commands, run};
use probex_core::{
    coordinator, Direction, Grid, MemoryStore, NewProbe, ProbeError, ProbeState, ProbeStore,
};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn commands() -> impl Strategy<Value = String> {
    "[MLR]{1,40}"
}

proptest! {
    #[test]
    fn successful_run_stays_within_grid(
        size_x in 0u32..8,
        size_y in 0u32..8,
        heading in direction(),
        cmds in commands(),
    ) {
        let grid = Grid::new(size_x, size_y);
        if let Ok(end) = run(ProbeState::origin(heading), grid, &cmds) {
            prop_assert!(grid.contains(end.x, end.y));
        }
    }

    #[test]
    fn rejected_move_leaves_probe_unchanged(
        size_x in 0i64..6,
        size_y in 0i64..6,
        heading in direction(),
        cmds in commands(),
    ) {
        let mut store = MemoryStore::new();
        let probe = coordinator::create_probe(
            &mut store,
            &NewProbe::new(size_x, size_y, heading.as_str()),
        )
        .unwrap();

        match coordinator::move_probe(&mut store, &probe.id.to_string(), &cmds) {
            Ok(moved) => prop_assert!(moved.is_within_grid()),
            Err(err) => {
                prop_assert!(matches!(err, ProbeError::OutOfBounds { .. }), "{:?}", err);
                let stored = store.get(&probe.id).unwrap().unwrap();
                prop_assert_eq!(stored.state(), probe.state());
            }
        }
    }

    #[test]
    fn turn_identities_hold(
        x in 0u32..5,
        y in 0u32..5,
        heading in direction(),
        cmds in prop::sample::select(vec!["RRRR", "LLLL", "LR", "RL", "LLRR"]),
    ) {
        let start = ProbeState::new(x, y, heading);
        let end = run(start, Grid::new(5, 5), cmds).unwrap();
        prop_assert_eq!(end, start);
    }

    #[test]
    fn any_foreign_character_rejects_whole_string(
        prefix in "[MLR]{0,10}",
        bad in "[^MLR]",
        suffix in "[MLR]{0,10}",
    ) {
        let input = format!("{}{}{}", prefix, bad, suffix);
        let err = parse_commands(&input).unwrap_err();
        prop_assert!(
            matches!(err, ProbeError::InvalidCommand { .. } | ProbeError::EmptyCommands),
            "{:?}",
            err
        );
    }
}
