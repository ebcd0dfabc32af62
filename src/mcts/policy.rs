//! MCTS policies for selection and rollouts.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: How to choose which child to descend into (UCT)
//! - `RolloutPolicy`: How to play a position out (random, heuristic-greedy)

use tracing::warn;

use crate::board::{MetaBoard, Status};
use crate::core::{GameRng, PlayerId};
use crate::heuristic::{random_playout, Heuristic, Score};

use super::config::MCTSConfig;
use super::node::NodeId;
use super::tree::MCTSTree;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Select the child of `node` to descend into.
    ///
    /// Returns `None` if the node has no children.
    fn select(&self, tree: &MCTSTree, node: NodeId, config: &MCTSConfig) -> Option<NodeId>;
}

/// UCT (UCB1 applied to trees) selection policy.
///
/// Balances exploitation (high win rate) with exploration (low visits).
/// Formula: w/n + c * sqrt(ln(N) / n). Unvisited children score +inf and
/// the first of them is taken.
#[derive(Clone, Debug, Default)]
pub struct Uct;

impl Uct {
    /// UCT value of a child given its parent's visit count.
    #[must_use]
    pub fn value(parent_visits: u32, child_visits: u32, win_score: f64, c: f64) -> f64 {
        if child_visits == 0 {
            return f64::INFINITY;
        }
        let visits = child_visits as f64;
        let ln_parent = (parent_visits.max(1) as f64).ln();
        win_score / visits + c * (ln_parent / visits).sqrt()
    }
}

impl SelectionPolicy for Uct {
    fn select(&self, tree: &MCTSTree, node: NodeId, config: &MCTSConfig) -> Option<NodeId> {
        let parent_visits = tree.get(node).visits;

        tree.get(node)
            .children
            .iter()
            .map(|&child| {
                let c = tree.get(child);
                let value = Self::value(parent_visits, c.visits, c.win_score, config.exploration_constant);
                (child, value)
            })
            .fold(None, |best: Option<(NodeId, f64)>, (child, value)| match best {
                Some((_, top)) if top >= value => best,
                _ => Some((child, value)),
            })
            .map(|(child, _)| child)
    }
}

// =============================================================================
// Rollout Policy
// =============================================================================

/// Policy for playing a position out to a decided game.
pub trait RolloutPolicy: Send + Sync {
    /// Play `board` to the end and return the final status.
    ///
    /// The board is modified during the rollout.
    fn rollout(&self, board: &mut MetaBoard, rng: &mut GameRng) -> Status;
}

/// Random rollout policy.
///
/// Plays uniformly random legal moves until the game is decided.
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl RolloutPolicy for RandomRollout {
    fn rollout(&self, board: &mut MetaBoard, rng: &mut GameRng) -> Status {
        random_playout(board, rng)
    }
}

/// Greedy heuristic rollout policy.
///
/// At every ply the mover plays the legal move whose resulting position
/// scores best. Positions are scored from `perspective`'s point of view and
/// negated when the mover is the other player. Ties go to the first move.
#[derive(Clone, Debug)]
pub struct HeuristicRollout<H: Heuristic> {
    heuristic: H,
    perspective: PlayerId,
}

impl<H: Heuristic> HeuristicRollout<H> {
    /// Create a greedy rollout scoring from `perspective`.
    pub fn new(heuristic: H, perspective: PlayerId) -> Self {
        Self {
            heuristic,
            perspective,
        }
    }

    /// Greedy choice for the player to move, `None` if there are no moves.
    pub fn choose(&self, board: &MetaBoard) -> Option<usize> {
        let mover = board.current_player();
        let sign: Score = if mover == self.perspective { 1 } else { -1 };

        board
            .legal_moves()
            .into_iter()
            .filter_map(|mv| {
                let mut after = board.clone();
                after.make_move(mv).ok()?;
                Some((mv, sign * self.heuristic.evaluate(&after, self.perspective)))
            })
            .fold(None, |best: Option<(usize, Score)>, (mv, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((mv, score)),
            })
            .map(|(mv, _)| mv)
    }
}

impl<H: Heuristic> RolloutPolicy for HeuristicRollout<H> {
    fn rollout(&self, board: &mut MetaBoard, _rng: &mut GameRng) -> Status {
        loop {
            let status = board.winner();
            if status.is_decided() {
                return status;
            }
            let Some(mv) = self.choose(board) else {
                return Status::Draw;
            };
            if let Err(err) = board.make_move(mv) {
                warn!(mv, %err, "rollout move rejected");
                return Status::Draw;
            }
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Reward credited to a node whose player to move is `to_move`.
///
/// +1 when the player who moved into the node won, -1 when `to_move` won,
/// 0 for a draw.
#[must_use]
pub fn reward(outcome: Status, to_move: PlayerId) -> f64 {
    match outcome.winner() {
        Some(winner) if winner == to_move => -1.0,
        Some(_) => 1.0,
        None => 0.0,
    }
}
