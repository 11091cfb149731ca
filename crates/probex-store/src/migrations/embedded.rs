//! Migrations compiled into the binary

/// An embedded migration
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[
    Migration {
        id: "001_probes",
        sql: include_str!("../../migrations/001_probes.sql"),
    },
    Migration {
        id: "002_position_within_grid",
        sql: include_str!("../../migrations/002_position_within_grid.sql"),
    },
];

/// All embedded migrations in application order
pub fn get_migrations() -> &'static [Migration] {
    MIGRATIONS
}
