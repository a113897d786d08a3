use std::fmt::{Display, Formatter};

use unordered_pair::UnorderedPair;

use crate::edges::{Cost, EdgeTable};
use crate::error::GraphError;
use crate::names::{NameTable, NodeNum};
use crate::search::{Objective, TourKind, TourSearch};

/// A symmetric cost graph over named nodes, queried for the best total cost
/// of a tour visiting every node exactly once.
///
/// Build one with [`Graph::with_capacity`], feed it `(from, to, cost)`
/// triples with [`add_named_edge`](Graph::add_named_edge) or
/// [`increment_named_edge`](Graph::increment_named_edge), then ask for
/// [`best_tour_cost`](Graph::best_tour_cost). Nodes spring into existence
/// the first time an edge mentions their name; a pair never mentioned has
/// infinite cost and will not be chosen while any all-real-edge tour
/// exists.
pub struct Graph {
    pub(crate) names: NameTable,
    pub(crate) edges: EdgeTable,
}

impl Default for Graph {
    /// A graph with room for 20 nodes, plenty for the puzzle inputs this
    /// crate is built around.
    fn default() -> Self {
        Self::with_capacity(20)
    }
}

impl Graph {
    /// A graph with room for at most `max_nodes` distinct names. Naming a
    /// node past that is a [`GraphError::GraphFull`].
    pub fn with_capacity(max_nodes: usize) -> Self {
        Self {
            names: NameTable::with_capacity(max_nodes),
            edges: EdgeTable::with_capacity(max_nodes),
        }
    }

    fn resolve(&mut self, from: &str, to: &str) -> Result<UnorderedPair<NodeNum>, GraphError> {
        Ok(UnorderedPair(
            self.names.lookup_or_add(from)?,
            self.names.lookup_or_add(to)?,
        ))
    }

    /// Sets the cost between two named nodes, registering either name on
    /// first sight. Costs are symmetric; the order of `from` and `to` does
    /// not matter, and setting the pair again in either order overwrites.
    ///
    /// # Errors
    /// [`GraphError::GraphFull`] if a new name would not fit.
    pub fn add_named_edge(&mut self, from: &str, to: &str, cost: Cost) -> Result<(), GraphError> {
        let pair = self.resolve(from, to)?;
        self.edges.set(pair, cost);
        Ok(())
    }

    /// Adds `delta` to the cost between two named nodes, treating a pair
    /// never set as 0. Both directions accumulate into the same cost, so
    /// feeding `("A", "B", x)` and later `("B", "A", y)` leaves `x + y` —
    /// the shape of "A would gain x next to B" style input.
    ///
    /// # Errors
    /// [`GraphError::GraphFull`] if a new name would not fit.
    pub fn increment_named_edge(&mut self, from: &str, to: &str, delta: Cost) -> Result<(), GraphError> {
        let pair = self.resolve(from, to)?;
        self.edges.increment(pair, delta);
        Ok(())
    }

    /// The stored cost between two already-registered names, or
    /// [`f64::INFINITY`] if no edge was ever set between them.
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] if either name was never registered.
    pub fn edge_cost_named(&self, from: &str, to: &str) -> Result<Cost, GraphError> {
        let pair = UnorderedPair(self.names.lookup(from)?, self.names.lookup(to)?);
        Ok(self.edges.cost(pair))
    }

    /// How many distinct names this graph has seen.
    pub fn node_count(&self) -> usize {
        self.names.count()
    }

    /// The name registered for a node handle, for diagnostics and printing.
    pub fn name_of(&self, node: NodeNum) -> Option<&str> {
        self.names.name_of(node)
    }

    /// The best total cost of visiting every node exactly once, over every
    /// possible starting node.
    ///
    /// # Search
    /// For each start, every other node is tried as the final stop, and the
    /// best path cost is computed by a memoized recursion over
    /// `(start, current, visited-set)` states: the path must have arrived
    /// at `current` from some other visited node, so the state's cost is
    /// the best of `edge(prev, current)` plus the cost of reaching `prev`
    /// with `current` struck out, bottoming out at the direct
    /// `start`–`current` edge. A path and its reversal traverse the same
    /// edges, so states are canonicalized to `start < current` before the
    /// memo is consulted.
    ///
    /// A closed tour additionally pays the edge from the final stop back to
    /// the start. A graph with fewer than two nodes has nowhere to go and
    /// costs 0. The graph itself is never mutated; asking again returns the
    /// same answer.
    pub fn best_tour_cost(&self, objective: Objective, kind: TourKind) -> Cost {
        if self.node_count() < 2 {
            return 0.0;
        }

        TourSearch::new(&self.edges, self.node_count(), objective).best(kind)
    }

    /// Like [`best_tour_cost`](Graph::best_tour_cost), with the starting
    /// node fixed by name.
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] if `start` was never registered.
    pub fn best_tour_cost_from(
        &self,
        start: &str,
        objective: Objective,
        kind: TourKind,
    ) -> Result<Cost, GraphError> {
        let start = self.names.lookup(start)?;
        if self.node_count() < 2 {
            return Ok(0.0);
        }

        Ok(TourSearch::new(&self.edges, self.node_count(), objective).best_from(start, kind))
    }
}

impl Display for Graph {
    /// One line per stored edge, `name/handle to name/handle = cost`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for x in 0..self.node_count() {
            for y in x + 1..self.node_count() {
                if let Some(cost) = self.edges.get(UnorderedPair(x, y)) {
                    writeln!(
                        f,
                        "{}/{} to {}/{} = {}",
                        self.names.name_of(x).unwrap(),
                        x,
                        self.names.name_of(y).unwrap(),
                        y,
                        cost
                    )?;
                }
            }
        }
        Ok(())
    }
}
