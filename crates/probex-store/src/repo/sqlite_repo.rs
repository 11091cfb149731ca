//! SQLite implementation of `ProbeStore`
//!
//! Every move runs in a `BEGIN IMMEDIATE` transaction: the write lock is
//! taken before the probe is read, so two connections moving the same probe
//! are serialized and the second one computes from the first one's result.
//! A failed computation drops the transaction, which rolls it back.

use probex_core::{Probe, ProbeError, ProbeId, ProbeState, ProbeStore, Result};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::rows::{encode_timestamp, ProbeRow, SELECT_PROBE};
use crate::errors::is_constraint_violation;

fn storage(op: &'static str) -> impl Fn(rusqlite::Error) -> ProbeError {
    move |err| ProbeError::Storage {
        op: op.to_string(),
        message: err.to_string(),
    }
}

fn select_probe(conn: &Connection, id: &ProbeId) -> Result<Option<Probe>> {
    let sql = format!("{} WHERE id = ?1", SELECT_PROBE);
    let row = conn
        .query_row(&sql, [id.to_string()], ProbeRow::from_row)
        .optional()
        .map_err(storage("get"))?;

    row.map(Probe::try_from).transpose()
}

/// Durable probe store over a borrowed, migrated connection
pub struct SqliteProbeStore<'c> {
    conn: &'c mut Connection,
}

impl<'c> SqliteProbeStore<'c> {
    pub fn new(conn: &'c mut Connection) -> Self {
        Self { conn }
    }
}

impl ProbeStore for SqliteProbeStore<'_> {
    fn insert(&mut self, probe: Probe) -> Result<()> {
        let result = self.conn.execute(
            "INSERT INTO probes (id, size_x, size_y, x, y, direction, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                probe.id.to_string(),
                probe.size_x,
                probe.size_y,
                probe.x,
                probe.y,
                probe.direction.as_str(),
                encode_timestamp(&probe.created_at),
                encode_timestamp(&probe.updated_at),
            ],
        );

        match result {
            Ok(_) => {
                tracing::debug!(probe_id = %probe.id, "probe row inserted");
                Ok(())
            }
            Err(err) if is_constraint_violation(&err) => match self.get(&probe.id)? {
                Some(_) => Err(ProbeError::AlreadyExists {
                    probe_id: probe.id.to_string(),
                }),
                None => Err(storage("insert")(err)),
            },
            Err(err) => Err(storage("insert")(err)),
        }
    }

    fn get(&self, id: &ProbeId) -> Result<Option<Probe>> {
        select_probe(&*self.conn, id)
    }

    fn list(&self) -> Result<Vec<Probe>> {
        let sql = format!("{} ORDER BY created_at, id", SELECT_PROBE);
        let mut stmt = self.conn.prepare(&sql).map_err(storage("list"))?;

        let rows = stmt
            .query_map([], ProbeRow::from_row)
            .map_err(storage("list"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(storage("list"))?;

        rows.into_iter().map(Probe::try_from).collect()
    }

    fn update_atomically(
        &mut self,
        id: &ProbeId,
        compute: &mut dyn FnMut(&Probe) -> Result<ProbeState>,
    ) -> Result<Probe> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(storage("update_atomically"))?;

        let current = select_probe(&tx, id)?.ok_or_else(|| ProbeError::ProbeNotFound {
            probe_id: id.to_string(),
        })?;

        let next = match compute(&current) {
            Ok(next) => next,
            Err(err) => {
                tracing::debug!(probe_id = %id, "update rolled back");
                return Err(err);
            }
        };

        let mut updated = current;
        updated.commit_state(next);

        tx.execute(
            "UPDATE probes SET x = ?1, y = ?2, direction = ?3, updated_at = ?4 WHERE id = ?5",
            params![
                updated.x,
                updated.y,
                updated.direction.as_str(),
                encode_timestamp(&updated.updated_at),
                id.to_string(),
            ],
        )
        .map_err(storage("update_atomically"))?;

        tx.commit().map_err(storage("update_atomically"))?;
        tracing::debug!(probe_id = %id, x = updated.x, y = updated.y, "update committed");

        Ok(updated)
    }
}
