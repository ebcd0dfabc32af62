//! MCTS node structure.
//!
//! Uses arena-based allocation with index references (NodeId) for efficiency
//! and serializability. Each node owns its own copy of the board.

use serde::Serialize;
use smallvec::SmallVec;

use crate::board::MetaBoard;
use crate::core::PlayerId;

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the MCTS tree.
///
/// Serialize-only: child and parent links are raw arena indices.
#[derive(Clone, Debug, Serialize)]
pub struct MCTSNode {
    /// Position at this node.
    pub board: MetaBoard,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Children in `legal_moves()` order. Empty until expanded.
    pub children: SmallVec<[NodeId; 9]>,

    /// Move that produced this node from its parent (None for root).
    pub mv: Option<usize>,

    /// Player to move at this node.
    pub to_move: PlayerId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Total visits to this node.
    pub visits: u32,

    /// Sum of rewards, from the viewpoint of the player who moved into
    /// this node.
    pub win_score: f64,

    /// Is this a decided game?
    pub is_terminal: bool,
}

impl MCTSNode {
    /// Create a new node.
    pub fn new(board: MetaBoard, parent: NodeId, mv: Option<usize>, depth: u16) -> Self {
        Self {
            to_move: board.current_player(),
            is_terminal: board.is_game_over(),
            board,
            parent,
            children: SmallVec::new(),
            mv,
            depth,
            visits: 0,
            win_score: 0.0,
        }
    }

    /// Create a root node.
    pub fn root(board: MetaBoard) -> Self {
        Self::new(board, NodeId::NONE, None, 0)
    }

    /// Check if the node has been expanded.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Mean reward for the player who moved into this node.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.win_score / self.visits as f64
        }
    }
}
