use std::collections::HashMap;

use strum::VariantArray;
use tracing::{debug, trace};
use unordered_pair::UnorderedPair;

use crate::edges::{Cost, EdgeTable};
use crate::names::NodeNum;
use crate::set::NodeSet;

/// Whether a tour minimizes or maximizes its total edge cost.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, VariantArray)]
pub enum Objective {
    /// Fold with `min`; an absent edge reads as [`f64::INFINITY`].
    Shortest,
    /// Fold with `max`; an absent edge reads as [`f64::NEG_INFINITY`].
    Longest,
}

impl Objective {
    /// The fold identity. Also what an absent edge reads as during search,
    /// so a missing edge always loses to any real one.
    pub(crate) fn no_edge(self) -> Cost {
        match self {
            Self::Shortest => Cost::INFINITY,
            Self::Longest => Cost::NEG_INFINITY,
        }
    }

    pub(crate) fn better(self, a: Cost, b: Cost) -> Cost {
        match self {
            Self::Shortest => a.min(b),
            Self::Longest => a.max(b),
        }
    }
}

/// Whether a tour ends where it started.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, VariantArray)]
pub enum TourKind {
    /// The tour ends at its last node.
    Open,
    /// The tour also pays the edge from its last node back to its start.
    Closed,
}

/// One best-tour query against a populated [`EdgeTable`]. Holds the memo
/// for the subset recursion, so states reached from several starts or ends
/// are evaluated once.
pub(crate) struct TourSearch<'a> {
    edges: &'a EdgeTable,
    num_nodes: usize,
    objective: Objective,
    memo: HashMap<(NodeNum, NodeNum, NodeSet), Cost>,
    // evaluations counted after canonicalization; memo hits excluded
    calls: usize,
}

impl<'a> TourSearch<'a> {
    pub(crate) fn new(edges: &'a EdgeTable, num_nodes: usize, objective: Objective) -> Self {
        Self {
            edges,
            num_nodes,
            objective,
            memo: HashMap::new(),
            calls: 0,
        }
    }

    fn edge(&self, a: NodeNum, b: NodeNum) -> Cost {
        self.edges.get(UnorderedPair(a, b)).unwrap_or_else(|| self.objective.no_edge())
    }

    /// Best tour cost over every possible starting node.
    pub(crate) fn best(&mut self, kind: TourKind) -> Cost {
        let mut cost = self.objective.no_edge();

        for start in 0..self.num_nodes {
            trace!(start, "enumerating tours");
            let from_start = self.best_from(start, kind);
            cost = self.objective.better(cost, from_start);
        }

        debug!(calls = self.calls, "search finished");
        cost
    }

    /// Best tour cost starting at `start`, taken over every choice of final
    /// node.
    pub(crate) fn best_from(&mut self, start: NodeNum, kind: TourKind) -> Cost {
        let mut cost = self.objective.no_edge();

        for end in 0..self.num_nodes {
            if end == start {
                continue;
            }

            let mut tour_cost = self.tour_cost(start, end, NodeSet::full(self.num_nodes));
            if kind == TourKind::Closed {
                tour_cost += self.edge(end, start);
            }

            cost = self.objective.better(cost, tour_cost);
        }

        cost
    }

    /// Best cost of a path from `start` to `current` visiting exactly the
    /// members of `visited`, which must include both endpoints.
    fn tour_cost(&mut self, start: NodeNum, current: NodeNum, mut visited: NodeSet) -> Cost {
        trace!(start, current, set = %visited, "tour_cost");

        // Asking how to get from a node to itself means the top-level
        // enumeration went wrong.
        debug_assert_ne!(start, current);
        debug_assert!(visited.contains(start));
        debug_assert!(visited.contains(current));

        // Swapping the endpoints of a path over the same interior traverses
        // the same edges, so canonicalize to start < current and halve the
        // state space.
        if start > current {
            return self.tour_cost(current, start, visited);
        }

        let key = (start, current, visited.clone());
        if let Some(&cost) = self.memo.get(&key) {
            return cost;
        }

        self.calls += 1;

        // Drop ourselves from the set; what remains is how we got here.
        visited.remove(current);

        if visited.is_only_member(start) {
            let cost = self.edge(start, current);
            self.memo.insert(key, cost);
            return cost;
        }

        let mut cost = self.objective.no_edge();
        for prev in visited.members().collect::<Vec<_>>() {
            // The start can only be reached directly once nothing else is
            // left, and the base case took care of that.
            if prev == start {
                continue;
            }

            let step = self.edge(prev, current);
            let rest = self.tour_cost(start, prev, visited.clone());
            trace!(prev, current, cost = step + rest, "candidate");

            cost = self.objective.better(cost, step + rest);
        }

        self.memo.insert(key, cost);
        cost
    }
}
