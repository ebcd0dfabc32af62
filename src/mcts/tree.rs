//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references for efficiency,
//! cache-friendliness, and export to JSON. Parent links are only followed
//! during backpropagation.

use serde::Serialize;

use super::node::{MCTSNode, NodeId};
use super::policy::reward;
use crate::board::{MetaBoard, Status};

/// Arena-based MCTS tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// This avoids reference counting overhead and lets the tree be exported as JSON.
#[derive(Clone, Debug, Serialize)]
pub struct MCTSTree {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode>,

    /// The root node ID (always 0 after initialization).
    root: NodeId,
}

impl MCTSTree {
    /// Create a new tree rooted at `board`.
    pub fn new(board: MetaBoard) -> Self {
        Self::with_capacity(board, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(board: MetaBoard, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(MCTSNode::root(board));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MCTSNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate a child of `parent` reached by `mv` and link it.
    pub fn add_child(&mut self, parent: NodeId, mv: usize, board: MetaBoard) -> NodeId {
        let depth = self.get(parent).depth + 1;
        let id = self.alloc(MCTSNode::new(board, parent, Some(mv), depth));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Credit `outcome` to `leaf` and every ancestor up to the root.
    pub fn backpropagate(&mut self, leaf: NodeId, outcome: Status) {
        let mut current = leaf;
        while !current.is_none() {
            let node = self.get_mut(current);
            node.visits += 1;
            node.win_score += reward(outcome, node.to_move);
            current = node.parent;
        }
    }

    /// Child of `id` with the most visits. Ties go to the earliest child.
    #[must_use]
    pub fn robust_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)
            .children
            .iter()
            .fold(None, |best: Option<NodeId>, &child| match best {
                Some(top) if self.get(top).visits >= self.get(child).visits => best,
                _ => Some(child),
            })
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal).count();
        let expanded_count = self.nodes.iter().filter(|n| n.is_expanded()).count();
        let total_children: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            expanded_count,
            total_children,
        }
    }

    /// Clear the tree and reset with a new root.
    pub fn reset(&mut self, board: MetaBoard) {
        self.nodes.clear();
        self.nodes.push(MCTSNode::root(board));
        self.root = NodeId::new(0);
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MCTSNode {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Number of nodes with children.
    pub expanded_count: usize,

    /// Total number of parent-child links.
    pub total_children: usize,
}

impl TreeStats {
    /// Average children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded_count == 0 {
            0.0
        } else {
            self.total_children as f64 / self.expanded_count as f64
        }
    }
}
