use std::collections::HashMap;

use tracing::trace;

use crate::error::GraphError;

/// A node's integer handle. Handles are assigned in first-seen order,
/// starting at 0, and are never reused.
pub type NodeNum = usize;

pub(crate) struct NameTable {
    name_to_node: HashMap<String, NodeNum>,
    node_to_name: Vec<String>,
    max_nodes: usize,
}

impl NameTable {
    pub(crate) fn with_capacity(max_nodes: usize) -> Self {
        Self {
            name_to_node: HashMap::with_capacity(max_nodes),
            node_to_name: Vec::with_capacity(max_nodes),
            max_nodes,
        }
    }

    /// The node already registered under `name`, or the next unused handle
    /// once `name` is recorded against it.
    pub(crate) fn lookup_or_add(&mut self, name: &str) -> Result<NodeNum, GraphError> {
        if let Some(&node) = self.name_to_node.get(name) {
            return Ok(node);
        }

        let node = self.node_to_name.len();
        if node >= self.max_nodes {
            return Err(GraphError::GraphFull { index: node, max_nodes: self.max_nodes });
        }

        self.name_to_node.insert(name.to_owned(), node);
        self.node_to_name.push(name.to_owned());
        trace!(name, node, "registered node");

        Ok(node)
    }

    /// Strict lookup; assumes the caller already knows the graph's
    /// vocabulary.
    pub(crate) fn lookup(&self, name: &str) -> Result<NodeNum, GraphError> {
        self.name_to_node
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode { name: name.to_owned() })
    }

    pub(crate) fn count(&self) -> usize {
        self.node_to_name.len()
    }

    pub(crate) fn name_of(&self, node: NodeNum) -> Option<&str> {
        self.node_to_name.get(node).map(String::as_str)
    }
}
