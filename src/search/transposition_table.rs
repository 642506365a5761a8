//! Transposition table keyed by the pair of occupancy masks.
//!
//! The table is an explicit object owned by the caller of a search, never
//! shared ambient state, so independent searches cannot contaminate each
//! other. Replacement is depth-preferred with a preference for exact entries.

use std::collections::HashMap;

use crate::board::board_types::MoveMask;
use crate::board::position::PositionKey;

/// How a stored score relates to the true value of the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone)]
pub struct TTEntry {
    pub score: i32,
    pub principal_variation: Vec<MoveMask>,
    pub depth: u8,
    pub bound: Bound,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<PositionKey, TTEntry>,
    stats: TTStats,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = TTStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    /// Look up an entry usable for a query at the given remaining depth.
    ///
    /// An entry computed at a shallower depth would pollute a deeper query,
    /// so only entries with recorded depth >= the requested depth are hits.
    pub fn probe(&mut self, key: &PositionKey, depth: u8) -> Option<&TTEntry> {
        self.stats.probes += 1;
        let usable = self
            .entries
            .get(key)
            .map_or(false, |entry| entry.depth >= depth);
        if !usable {
            return None;
        }
        self.stats.hits += 1;
        self.entries.get(key)
    }

    /// Store an entry, keeping whichever of the old and new entries is
    /// searched deeper; at equal depth an exact entry is never displaced by
    /// a bound-only one.
    pub fn store(&mut self, key: PositionKey, entry: TTEntry) {
        self.stats.stores += 1;
        match self.entries.get(&key) {
            Some(existing)
                if existing.depth > entry.depth
                    || (existing.depth == entry.depth
                        && existing.bound == Bound::Exact
                        && entry.bound != Bound::Exact) => {}
            _ => {
                self.entries.insert(key, entry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(yellow: u64, red: u64) -> PositionKey {
        PositionKey { yellow, red }
    }

    fn entry(score: i32, depth: u8, bound: Bound) -> TTEntry {
        TTEntry {
            score,
            principal_variation: vec![1 << 22],
            depth,
            bound,
        }
    }

    #[test]
    fn store_and_probe_round_trip() {
        let mut table = TranspositionTable::new();
        table.store(key(3, 5), entry(42, 4, Bound::Exact));

        let got = table.probe(&key(3, 5), 4).expect("entry should exist");
        assert_eq!(got.score, 42);
        assert_eq!(got.depth, 4);
        assert_eq!(got.principal_variation, vec![1 << 22]);
        assert_eq!(table.stats().hits, 1);
    }

    #[test]
    fn shallow_entries_never_answer_deeper_queries() {
        let mut table = TranspositionTable::new();
        table.store(key(3, 5), entry(42, 2, Bound::Exact));

        assert!(table.probe(&key(3, 5), 5).is_none());
        assert!(table.probe(&key(3, 5), 2).is_some());
        assert!(table.probe(&key(3, 5), 1).is_some());
    }

    #[test]
    fn deeper_entries_replace_shallower_ones() {
        let mut table = TranspositionTable::new();
        table.store(key(1, 0), entry(10, 2, Bound::Exact));
        table.store(key(1, 0), entry(99, 1, Bound::Exact));
        assert_eq!(table.probe(&key(1, 0), 1).expect("exists").score, 10);

        table.store(key(1, 0), entry(7, 6, Bound::Lower));
        let got = table.probe(&key(1, 0), 3).expect("exists");
        assert_eq!(got.score, 7);
        assert_eq!(got.depth, 6);
    }

    #[test]
    fn exact_entries_survive_bound_entries_of_equal_depth() {
        let mut table = TranspositionTable::new();
        table.store(key(1, 2), entry(10, 3, Bound::Exact));
        table.store(key(1, 2), entry(50, 3, Bound::Lower));
        let got = table.probe(&key(1, 2), 3).expect("exists");
        assert_eq!(got.score, 10);
        assert_eq!(got.bound, Bound::Exact);
    }

    #[test]
    fn clear_resets_entries_and_stats() {
        let mut table = TranspositionTable::new();
        table.store(key(1, 2), entry(10, 3, Bound::Exact));
        let _ = table.probe(&key(1, 2), 1);
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.stats().probes, 0);
        assert!(table.probe(&key(1, 2), 1).is_none());
    }
}
