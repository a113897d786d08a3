use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use fixedbitset::FixedBitSet;

use crate::names::NodeNum;

/// The set of nodes already included in a partial tour. Sized to the node
/// count at hand, so there is no word-width ceiling on how many nodes a
/// graph may hold.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct NodeSet {
    bits: FixedBitSet,
}

impl NodeSet {
    /// The set holding every node in `[0, num_nodes)`.
    pub(crate) fn full(num_nodes: usize) -> Self {
        let mut bits = FixedBitSet::with_capacity(num_nodes);
        bits.set_range(.., true);
        Self { bits }
    }

    pub(crate) fn contains(&self, node: NodeNum) -> bool {
        self.bits.contains(node)
    }

    pub(crate) fn remove(&mut self, node: NodeNum) {
        self.bits.set(node, false);
    }

    /// True when `node` is the only member left.
    pub(crate) fn is_only_member(&self, node: NodeNum) -> bool {
        self.contains(node) && self.bits.count_ones(..) == 1
    }

    pub(crate) fn members(&self) -> impl Iterator<Item = NodeNum> + '_ {
        self.bits.ones()
    }
}

impl Hash for NodeSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for node in self.bits.ones() {
            node.hash(state);
        }
    }
}

impl Display for NodeSet {
    /// Renders as a bit string, highest node on the left, like a binary
    /// literal.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for node in (0..self.bits.len()).rev() {
            f.write_str(if self.contains(node) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
