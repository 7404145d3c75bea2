//! Node graph data structures and operations

use super::node::{Node, NodeIndex};
use serde::{Deserialize, Serialize};

/// Ordered collection of nodes.
///
/// Order is display order: later nodes are drawn on top. Nodes are addressed
/// by their position in the sequence, so removing one shifts every later
/// index down by one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeGraph {
    pub nodes: Vec<Node>,
}

impl NodeGraph {
    /// Creates a new empty node graph
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends a node and returns its index
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Removes the node at `index`, preserving the order of the rest
    pub fn remove_node(&mut self, index: NodeIndex) -> Option<Node> {
        if index < self.nodes.len() {
            Some(self.nodes.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    fn titles(graph: &NodeGraph) -> Vec<&str> {
        graph.nodes.iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn test_add_returns_sequential_indices() {
        let mut graph = NodeGraph::new();
        assert_eq!(graph.add_node(Node::new("a", Pos2::ZERO)), 0);
        assert_eq!(graph.add_node(Node::new("b", Pos2::ZERO)), 1);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut graph = NodeGraph::new();
        for title in ["a", "b", "c", "d"] {
            graph.add_node(Node::new(title, Pos2::ZERO));
        }

        let removed = graph.remove_node(1).unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(titles(&graph), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut graph = NodeGraph::new();
        graph.add_node(Node::new("a", Pos2::ZERO));

        assert!(graph.remove_node(1).is_none());
        assert_eq!(graph.len(), 1);
    }
}
