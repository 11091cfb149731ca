use std::collections::BTreeMap;

use crate::errors::{ProbeError, Result};
use crate::model::{Probe, ProbeId, ProbeState};

/// Persistence seam consumed by the coordinator
///
/// Implementations must make `update_atomically` a single serialized
/// read-modify-write for the given probe: no other update of the same probe
/// may interleave between the read handed to `compute` and the write of its
/// result.
pub trait ProbeStore {
    /// Insert a newly created probe
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the id is taken, or `Storage` on backend failure.
    fn insert(&mut self, probe: Probe) -> Result<()>;

    /// Fetch a probe by id, `None` if absent
    fn get(&self, id: &ProbeId) -> Result<Option<Probe>>;

    /// Every probe, in creation order
    fn list(&self) -> Result<Vec<Probe>>;

    /// Read the probe, compute its next state, and write it only on success
    ///
    /// If `compute` returns an error nothing is written and the error is
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ProbeNotFound` if the id is absent, any error from
    /// `compute`, or `Storage` on backend failure.
    fn update_atomically(
        &mut self,
        id: &ProbeId,
        compute: &mut dyn FnMut(&Probe) -> Result<ProbeState>,
    ) -> Result<Probe>;
}

/// In-memory store for probes
///
/// A `BTreeMap` keyed by id. Not thread-safe on its own; exclusive `&mut`
/// access is what serializes updates.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    probes: BTreeMap<ProbeId, Probe>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            probes: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Borrow a probe without cloning it
    pub fn probe(&self, id: &ProbeId) -> Option<&Probe> {
        self.probes.get(id)
    }
}

impl ProbeStore for MemoryStore {
    fn insert(&mut self, probe: Probe) -> Result<()> {
        if self.probes.contains_key(&probe.id) {
            return Err(ProbeError::AlreadyExists {
                probe_id: probe.id.to_string(),
            });
        }
        self.probes.insert(probe.id, probe);
        Ok(())
    }

    fn get(&self, id: &ProbeId) -> Result<Option<Probe>> {
        Ok(self.probes.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Probe>> {
        let mut probes: Vec<Probe> = self.probes.values().cloned().collect();
        probes.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(probes)
    }

    fn update_atomically(
        &mut self,
        id: &ProbeId,
        compute: &mut dyn FnMut(&Probe) -> Result<ProbeState>,
    ) -> Result<Probe> {
        let probe = self
            .probes
            .get_mut(id)
            .ok_or_else(|| ProbeError::ProbeNotFound {
                probe_id: id.to_string(),
            })?;

        let next = compute(probe)?;
        probe.commit_state(next);
        Ok(probe.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Direction, Grid};

    fn probe(direction: Direction) -> Probe {
        Probe::new(ProbeId::new(), Grid::new(5, 5), direction)
    }

    #[test]
    fn test_new_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = MemoryStore::new();
        let p = probe(Direction::North);
        store.insert(p.clone()).unwrap();

        assert_eq!(store.get(&p.id).unwrap(), Some(p));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_duplicate_id() {
        let mut store = MemoryStore::new();
        let p = probe(Direction::North);
        store.insert(p.clone()).unwrap();

        let result = store.insert(p);
        assert!(matches!(result, Err(ProbeError::AlreadyExists { .. })));
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get(&ProbeId::new()).unwrap(), None);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = MemoryStore::new();
        let result = store.update_atomically(&ProbeId::new(), &mut |p: &Probe| Ok(p.state()));
        assert!(matches!(result, Err(ProbeError::ProbeNotFound { .. })));
    }

    #[test]
    fn test_update_error_writes_nothing() {
        let mut store = MemoryStore::new();
        let p = probe(Direction::East);
        store.insert(p.clone()).unwrap();

        let result = store.update_atomically(&p.id, &mut |_: &Probe| {
            Err(ProbeError::Internal {
                message: "boom".to_string(),
            })
        });

        assert!(result.is_err());
        assert_eq!(store.probe(&p.id), Some(&p));
    }

    #[test]
    fn test_list_in_creation_order() {
        let mut store = MemoryStore::new();
        let first = probe(Direction::North);
        let second = probe(Direction::South);
        store.insert(second.clone()).unwrap();
        store.insert(first.clone()).unwrap();

        let ids: Vec<_> = store.list().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }
}
