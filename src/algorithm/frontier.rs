//! Ordered open set with a deterministic expansion order
//!
//! Cells are ranked by total estimate `f`, then by heuristic `h` (prefer the
//! cell closer to the target), then by row, then by column. The ranking is a
//! total order over distinct cells, so the expansion sequence of a run never
//! depends on insertion order or hashing.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use crate::spatial::cell::{Coord, Costs};

/// Ranking key of a frontier entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    /// Total estimate `g + h`
    pub f: u32,
    /// Remaining-cost estimate
    pub h: u32,
    /// Cell the key belongs to
    pub coord: Coord,
}

impl FrontierKey {
    /// Build the key for a cell with the given costs
    pub const fn new(coord: Coord, costs: Costs) -> Self {
        Self {
            f: costs.f,
            h: costs.h,
            coord,
        }
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .cmp(&other.f)
            .then(self.h.cmp(&other.h))
            .then(self.coord.cmp(&other.coord))
    }
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Set of discovered cells waiting for expansion
///
/// Holds at most one entry per coordinate. Re-inserting a coordinate moves it
/// to the rank given by its new costs.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    ranked: BTreeSet<FrontierKey>,
    members: HashMap<Coord, FrontierKey>,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell, or reposition it if already present
    pub fn upsert(&mut self, coord: Coord, costs: Costs) {
        let key = FrontierKey::new(coord, costs);
        if let Some(previous) = self.members.insert(coord, key) {
            self.ranked.remove(&previous);
        }
        self.ranked.insert(key);
    }

    /// Remove and return the best-ranked entry
    pub fn pop_best(&mut self) -> Option<FrontierKey> {
        let best = self.ranked.pop_first()?;
        self.members.remove(&best.coord);
        Some(best)
    }

    /// Best-ranked entry without removing it
    pub fn peek_best(&self) -> Option<&FrontierKey> {
        self.ranked.first()
    }

    /// Whether a cell is waiting in the frontier
    pub fn contains(&self, coord: Coord) -> bool {
        self.members.contains_key(&coord)
    }

    /// Number of waiting cells
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Whether no cells are waiting
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.ranked.clear();
        self.members.clear();
    }

    /// Entries in expansion order
    pub fn iter(&self) -> impl Iterator<Item = &FrontierKey> {
        self.ranked.iter()
    }
}

impl<'a> IntoIterator for &'a Frontier {
    type Item = &'a FrontierKey;
    type IntoIter = std::collections::btree_set::Iter<'a, FrontierKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranked.iter()
    }
}
