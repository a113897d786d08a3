use std::cmp::{max, min};

use ndarray::Array2;
use unordered_pair::UnorderedPair;

use crate::names::NodeNum;

/// An edge cost. Absent edges read as [`f64::INFINITY`] when queried, so
/// any real edge beats a missing one under minimization.
pub type Cost = f64;

/// Dense symmetric cost matrix. Each unordered pair owns exactly one slot,
/// addressed by its (lower, upper) handles; both directions of input land
/// in the same slot.
pub(crate) struct EdgeTable {
    costs: Array2<Option<Cost>>,
}

impl EdgeTable {
    pub(crate) fn with_capacity(max_nodes: usize) -> Self {
        Self {
            costs: Array2::from_elem((max_nodes, max_nodes), None),
        }
    }

    fn slot(pair: UnorderedPair<NodeNum>) -> (usize, usize) {
        (min(pair.0, pair.1), max(pair.0, pair.1))
    }

    pub(crate) fn set(&mut self, pair: UnorderedPair<NodeNum>, cost: Cost) {
        self.costs[Self::slot(pair)] = Some(cost);
    }

    /// Adds `delta` to the pair's cost. This is the one place an absent
    /// edge counts as 0 rather than infinity.
    pub(crate) fn increment(&mut self, pair: UnorderedPair<NodeNum>, delta: Cost) {
        let slot = &mut self.costs[Self::slot(pair)];
        *slot = Some(slot.unwrap_or(0.0) + delta);
    }

    pub(crate) fn get(&self, pair: UnorderedPair<NodeNum>) -> Option<Cost> {
        self.costs[Self::slot(pair)]
    }

    pub(crate) fn cost(&self, pair: UnorderedPair<NodeNum>) -> Cost {
        self.get(pair).unwrap_or(Cost::INFINITY)
    }
}
