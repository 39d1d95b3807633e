//! Reconciliation store
//!
//! Owns the authoritative set of live organisms and the staged "next"
//! update set. Rendering always interpolates from the last fully-merged
//! state toward the currently staged one, so an update is folded into the
//! live set only when the *following* update arrives. This one-update lag
//! is deliberate: folding updates immediately would destroy the previous
//! interpolation endpoint and make organisms jump instead of glide.

use crate::CadenceEstimator;
use indexmap::IndexMap;
use tracing::{debug, trace, warn};
use vivarium_core::{EntryMap, Organism, OrganismId, OrganismRecord};

/// Double-buffered store of live organisms and staged updates
#[derive(Debug, Default)]
pub struct ReconciliationStore {
    /// Last fully-merged state per organism, in insertion order
    live: IndexMap<OrganismId, Organism>,
    /// Most recent raw update per organism, not yet folded into `live`
    staged: EntryMap,
    /// Rolling estimate of the server update cadence
    cadence: CadenceEstimator,
    /// Timestamp of the last reconciliation point, in milliseconds
    marked_at: Option<u64>,
}

impl ReconciliationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire known organism set from a full snapshot
    ///
    /// Clears both buffers, then constructs an organism per entry.
    /// Entries already in the terminal state are never materialized;
    /// malformed entries are logged and dropped while the rest of the
    /// snapshot is processed.
    pub fn reset_from_snapshot(&mut self, entries: EntryMap, now_ms: u64) {
        self.live.clear();
        self.staged.clear();
        for (id, record) in &entries {
            if record.is_dead() {
                trace!(%id, "skipping dead snapshot entry");
                continue;
            }
            match Organism::from_record(record) {
                Ok(organism) => {
                    self.live.insert(*id, organism);
                }
                Err(err) => warn!(%id, %err, "dropping malformed snapshot entry"),
            }
        }
        self.marked_at = Some(now_ms);
        debug!(live = self.live.len(), "snapshot reset");
    }

    /// Fold the previously staged updates into the live set and stage new ones
    ///
    /// For every entry staged by the prior call: an unseen, non-dead id is
    /// created at its first known pose (no interpolation from nothing); a
    /// known id is merged in place and removed once it merges to the
    /// terminal state; an unseen, dead id is a no-op. The new `entries`
    /// then become the interpolation targets, and the elapsed interval is
    /// fed to the cadence estimator.
    pub fn apply_update(&mut self, entries: EntryMap, now_ms: u64) {
        let staged = std::mem::replace(&mut self.staged, entries);
        for (id, record) in &staged {
            match self.live.get_mut(id) {
                None => {
                    if record.is_dead() {
                        // never seen alive, nothing to remove
                        trace!(%id, "ignoring dead update for unknown organism");
                        continue;
                    }
                    match Organism::from_record(record) {
                        Ok(organism) => {
                            self.live.insert(*id, organism);
                        }
                        Err(err) => warn!(%id, %err, "dropping malformed update entry"),
                    }
                }
                Some(organism) => {
                    organism.merge_update(record);
                    if organism.is_dead() {
                        trace!(%id, "removing dead organism");
                        self.live.shift_remove(id);
                    }
                }
            }
        }

        if let Some(t0) = self.marked_at {
            self.cadence.record_interval(now_ms.saturating_sub(t0));
        }
        self.marked_at = Some(now_ms);
    }

    /// Reset to an empty population, as on disconnect
    pub fn clear(&mut self, now_ms: u64) {
        self.reset_from_snapshot(EntryMap::new(), now_ms);
    }

    /// Iterate over `(id, organism, staged record)` triples
    ///
    /// One triple per live organism, in live-set insertion order. The
    /// staged record is absent when no update has arrived for the
    /// organism since the last reconciliation pass.
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (OrganismId, &Organism, Option<&OrganismRecord>)> {
        self.live
            .iter()
            .map(|(id, organism)| (*id, organism, self.staged.get(id)))
    }

    /// Compute the interpolation fraction for a frame at `now_ms`
    ///
    /// Progress through the current inter-update interval, normalized by
    /// the cadence estimate and clamped to [0, 1]. Saturates at 1 when
    /// updates stop arriving, freezing organisms at the staged pose
    /// rather than extrapolating. Returns 0 before the first snapshot.
    pub fn fraction_at(&self, now_ms: u64) -> f32 {
        let Some(t0) = self.marked_at else {
            return 0.0;
        };
        let delta = now_ms.saturating_sub(t0) as f32;
        (delta / self.cadence.estimate_ms()).clamp(0.0, 1.0)
    }

    /// Get a live organism by id
    pub fn get(&self, id: OrganismId) -> Option<&Organism> {
        self.live.get(&id)
    }

    /// Check if an organism is in the live set
    pub fn contains(&self, id: OrganismId) -> bool {
        self.live.contains_key(&id)
    }

    /// Get the number of live organisms
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Check if the live set is empty
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Get the cadence estimator
    pub fn cadence(&self) -> &CadenceEstimator {
        &self.cadence
    }

    /// Get the timestamp of the last reconciliation point
    pub fn marked_at(&self) -> Option<u64> {
        self.marked_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use vivarium_core::{StateKind, StateRecord};

    fn record(id: u32, kind: StateKind, position: [f32; 3]) -> OrganismRecord {
        OrganismRecord {
            id: OrganismId::new(id),
            state: Some(StateRecord {
                kind: Some(kind),
                target: None,
                position: Some(position),
            }),
            attributes: None,
            rotation: None,
        }
    }

    fn entry_map(records: Vec<OrganismRecord>) -> EntryMap {
        records.into_iter().map(|r| (r.id, r)).collect()
    }

    #[test]
    fn test_snapshot_reset() {
        let mut store = ReconciliationStore::new();
        store.reset_from_snapshot(
            entry_map(vec![
                record(1, StateKind::Alive, [0.1, 0.1, 0.0]),
                record(2, StateKind::Seeking, [0.2, 0.2, 0.0]),
            ]),
            0,
        );
        assert_eq!(store.len(), 2);
        assert!(store.contains(OrganismId::new(1)));
        assert_eq!(store.marked_at(), Some(0));
    }

    #[test]
    fn test_snapshot_idempotent() {
        let snapshot = entry_map(vec![
            record(1, StateKind::Alive, [0.1, 0.1, 0.0]),
            record(2, StateKind::Fleeing, [0.2, 0.2, 0.0]),
        ]);

        let mut store = ReconciliationStore::new();
        store.reset_from_snapshot(snapshot.clone(), 0);
        let first: Vec<_> = store.entries().map(|(id, o, _)| (id, o.clone())).collect();

        store.reset_from_snapshot(snapshot, 100);
        let second: Vec<_> = store.entries().map(|(id, o, _)| (id, o.clone())).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshot_skips_dead_entries() {
        let mut store = ReconciliationStore::new();
        store.reset_from_snapshot(
            entry_map(vec![
                record(1, StateKind::Alive, [0.1, 0.1, 0.0]),
                record(2, StateKind::Dead, [0.2, 0.2, 0.0]),
            ]),
            0,
        );
        assert_eq!(store.len(), 1);
        assert!(!store.contains(OrganismId::new(2)));
    }

    #[test]
    fn test_snapshot_drops_malformed_entry_keeps_rest() {
        let mut store = ReconciliationStore::new();
        store.reset_from_snapshot(
            entry_map(vec![
                OrganismRecord::new(OrganismId::new(1)),
                record(2, StateKind::Alive, [0.2, 0.2, 0.0]),
            ]),
            0,
        );
        assert_eq!(store.len(), 1);
        assert!(store.contains(OrganismId::new(2)));
    }

    #[test]
    fn test_one_update_lag() {
        let mut store = ReconciliationStore::new();
        store.reset_from_snapshot(entry_map(vec![record(1, StateKind::Alive, [0.0; 3])]), 0);

        // first update is staged, not folded in
        store.apply_update(
            entry_map(vec![record(1, StateKind::Alive, [1.0, 0.0, 0.0])]),
            100,
        );
        let organism = store.get(OrganismId::new(1)).unwrap();
        assert_eq!(organism.pose().position, Vec3::ZERO);
        let (_, _, staged) = store.entries().next().unwrap();
        assert!(staged.is_some());

        // second update folds the first into the live set
        store.apply_update(
            entry_map(vec![record(1, StateKind::Alive, [2.0, 0.0, 0.0])]),
            200,
        );
        let organism = store.get(OrganismId::new(1)).unwrap();
        assert_eq!(organism.pose().position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_death_removes_after_one_cycle() {
        let mut store = ReconciliationStore::new();
        store.reset_from_snapshot(entry_map(vec![record(1, StateKind::Alive, [0.0; 3])]), 0);

        store.apply_update(entry_map(vec![record(1, StateKind::Dead, [0.0; 3])]), 100);
        // still live while the death update is only staged
        assert!(store.contains(OrganismId::new(1)));

        store.apply_update(EntryMap::new(), 200);
        assert!(!store.contains(OrganismId::new(1)));
    }

    #[test]
    fn test_newly_seen_organism_appears_fully_formed() {
        let mut store = ReconciliationStore::new();
        store.reset_from_snapshot(EntryMap::new(), 0);

        store.apply_update(
            entry_map(vec![record(2, StateKind::Alive, [0.3, 0.4, 0.0])]),
            100,
        );
        assert!(!store.contains(OrganismId::new(2)));

        store.apply_update(EntryMap::new(), 200);
        let organism = store.get(OrganismId::new(2)).unwrap();
        assert_eq!(organism.pose().position, Vec3::new(0.3, 0.4, 0.0));
    }

    #[test]
    fn test_unknown_dead_update_is_noop() {
        let mut store = ReconciliationStore::new();
        store.reset_from_snapshot(EntryMap::new(), 0);

        store.apply_update(entry_map(vec![record(5, StateKind::Dead, [0.0; 3])]), 100);
        store.apply_update(EntryMap::new(), 200);
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_feeds_cadence() {
        let mut store = ReconciliationStore::new();
        store.reset_from_snapshot(EntryMap::new(), 0);
        assert!(store.cadence().is_empty());

        store.apply_update(EntryMap::new(), 100);
        store.apply_update(EntryMap::new(), 200);
        assert_eq!(store.cadence().len(), 2);
        assert_eq!(store.cadence().estimate_ms(), 100.0);
    }

    #[test]
    fn test_fraction_at() {
        let mut store = ReconciliationStore::new();
        // no reconciliation point yet
        assert_eq!(store.fraction_at(1000), 0.0);

        store.reset_from_snapshot(EntryMap::new(), 0);
        store.apply_update(EntryMap::new(), 100);
        // estimate is now 100ms, halfway through the next interval
        assert_eq!(store.fraction_at(150), 0.5);
        // saturates when updates stop arriving
        assert_eq!(store.fraction_at(10_000), 1.0);
        // never negative
        assert_eq!(store.fraction_at(50), 0.0);
    }

    #[test]
    fn test_clear() {
        let mut store = ReconciliationStore::new();
        store.reset_from_snapshot(entry_map(vec![record(1, StateKind::Alive, [0.0; 3])]), 0);
        store.apply_update(
            entry_map(vec![record(2, StateKind::Alive, [0.5, 0.5, 0.0])]),
            100,
        );

        store.clear(200);
        assert!(store.is_empty());
        assert_eq!(store.entries().count(), 0);
        assert_eq!(store.marked_at(), Some(200));
    }
}
