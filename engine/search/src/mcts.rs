//! Monte-Carlo Tree Search under a wall-clock budget.
//!
//! Each iteration:
//! 1. Selection: descend through expanded nodes by UCB1
//! 2. Expansion: generate one level of children at the first unexpanded node
//! 3. Rollout: play uniformly random moves from the chosen child
//! 4. Backpropagation: add +1 or -1 to every node on the visited path
//!
//! Outcomes are not negated per level; every node accumulates from the
//! searching player's point of view.

use std::time::Instant;

use engine_core::{available_moves, Board, Player};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::{MctsStats, NodeId};
use crate::random::TieBreaker;
use crate::search::{MoveSelector, SearchError, SearchStats};
use crate::tree::Tree;

/// Tree built by Monte-Carlo search.
pub type MctsTree<B> = Tree<B, MctsStats>;

/// UCB1 score of `child` under a parent visited `parent_visits` times:
/// `wins / visits + c * sqrt(2 * ln(parent_visits) / visits)`.
#[inline]
pub fn ucb1(child: &MctsStats, parent_visits: u32, c: f64) -> f64 {
    let exploration = (2.0 * (parent_visits as f64).ln() / child.visits as f64).sqrt();
    child.mean_value() + c * exploration
}

/// Time-bounded Monte-Carlo search.
pub struct MctsSearch<R = ChaCha20Rng> {
    config: MctsConfig,
    picker: TieBreaker<R>,
    last_stats: SearchStats,
}

impl MctsSearch<ChaCha20Rng> {
    /// Search seeded from entropy.
    pub fn new(config: MctsConfig) -> Self {
        Self::with_picker(config, TieBreaker::from_entropy())
    }

    /// Reproducible search (up to the time budget).
    pub fn with_seed(config: MctsConfig, seed: u64) -> Self {
        Self::with_picker(config, TieBreaker::seeded(seed))
    }
}

impl<R: Rng> MctsSearch<R> {
    pub fn with_picker(config: MctsConfig, picker: TieBreaker<R>) -> Self {
        Self {
            config,
            picker,
            last_stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Short strategy name for logs.
    pub fn name(&self) -> &'static str {
        "mcts"
    }

    /// Statistics of the last completed search.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Grow a tree for `player` from `board` until the budget runs out.
    /// At least one iteration always runs.
    pub fn run<B: Board>(&mut self, board: &B, player: Player) -> Result<MctsTree<B>, SearchError> {
        let started = Instant::now();
        let mut tree = Tree::new(board.clone(), MctsStats::default());
        let mut visited = Vec::new();
        let mut iterations = 0u32;

        loop {
            let is_win = self.iterate(&mut tree, player, &mut visited)?;
            iterations += 1;

            trace!(
                iteration = iterations,
                path_len = visited.len(),
                is_win,
                root_visits = tree.get(tree.root()).data.visits,
                "MCTS iteration complete"
            );

            if !tree.get(tree.root()).data.is_expanded {
                // No legal move at the root; further iterations change nothing.
                break;
            }
            if started.elapsed() > self.config.time_budget {
                break;
            }
            if self.config.max_iterations.is_some_and(|max| iterations >= max) {
                break;
            }
        }

        let tree_stats = tree.stats();
        self.last_stats = SearchStats {
            iterations,
            nodes: tree_stats.total_nodes,
            max_depth: tree_stats.max_depth,
            elapsed: started.elapsed(),
        };

        Ok(tree)
    }

    /// One selection/expansion/rollout/backpropagation pass from the root.
    /// Returns the rollout outcome.
    fn iterate<B: Board>(
        &mut self,
        tree: &mut MctsTree<B>,
        player: Player,
        visited: &mut Vec<NodeId>,
    ) -> Result<bool, SearchError> {
        visited.clear();
        let mut current = tree.root();

        while tree.get(current).data.is_expanded {
            visited.push(current);
            tree.get_mut(current).data.visits += 1;
            current = self.best_child(tree, current)?;
        }

        visited.push(current);
        tree.get_mut(current).data.visits += 1;
        Self::expand(tree, current);

        let mut is_win = false;
        if tree.get(current).data.is_expanded {
            let child = self.best_child(tree, current)?;
            visited.push(child);
            tree.get_mut(child).data.visits += 1;
            is_win = self.rollout(&tree.get(child).board, player);
        }

        Self::backpropagate(tree, visited, is_win);
        Ok(is_win)
    }

    /// Add one child per available move, each starting at one visit.
    /// Marks the node expanded only if a child was created.
    fn expand<B: Board>(tree: &mut MctsTree<B>, node_id: NodeId) {
        let board = &tree.get(node_id).board;
        let to_move = board.next_player();
        let moves = available_moves(board, to_move);
        if moves.is_empty() {
            return;
        }

        for (index, mv) in moves.into_iter().enumerate() {
            let mut next = tree.get(node_id).board.clone();
            next.apply_move(&mv, to_move);
            tree.add_child(node_id, mv, next, index, MctsStats::unvisited_child());
        }
        tree.get_mut(node_id).data.is_expanded = true;
    }

    /// The child with the highest UCB1 score, exact ties broken at random.
    pub fn best_child<B: Board>(
        &mut self,
        tree: &MctsTree<B>,
        node_id: NodeId,
    ) -> Result<NodeId, SearchError> {
        let node = tree.get(node_id);
        let parent_visits = node.data.visits;
        let c = self.config.exploration_constant;

        self.picker
            .pick_best(&node.children, |&id| ucb1(&tree.get(id).data, parent_visits, c))
            .copied()
            .ok_or_else(|| SearchError::ChildlessNode {
                node: node.name.clone(),
            })
    }

    /// Random playout on a clone of `board`. A win is a finished game whose
    /// next player is `player`.
    fn rollout<B: Board>(&mut self, board: &B, player: Player) -> bool {
        let mut board = board.clone();
        let mut plies = 0;

        while board.status().is_running() && plies < self.config.max_rollout_plies {
            let to_move = board.next_player();
            let moves = available_moves(&board, to_move);
            let Some(mv) = self.picker.pick(&moves) else {
                break;
            };
            board.apply_move(mv, to_move);
            plies += 1;
        }

        board.status().is_terminal() && board.next_player() == player
    }

    fn backpropagate<B: Board>(tree: &mut MctsTree<B>, visited: &[NodeId], is_win: bool) {
        let delta = if is_win { 1 } else { -1 };
        for &id in visited {
            tree.get_mut(id).data.wins += delta;
        }
    }
}

impl<B: Board, R: Rng> MoveSelector<B> for MctsSearch<R> {
    fn select_move(&mut self, board: &B, player: Player) -> Result<Option<B::Move>, SearchError> {
        let tree = self.run(board, player)?;
        let root = tree.root();

        let chosen = if tree.get(root).is_leaf() {
            None
        } else {
            let best = self.best_child(&tree, root)?;
            trace!(best = %tree.get(best).label(), "MCTS best child");
            tree.get(best).mv.clone()
        };

        debug!(
            %player,
            iterations = self.last_stats.iterations,
            nodes = self.last_stats.nodes,
            max_depth = self.last_stats.max_depth,
            root = %tree.get(root).label(),
            elapsed_ms = self.last_stats.elapsed.as_millis() as u64,
            found = chosen.is_some(),
            "MCTS search complete"
        );

        Ok(chosen)
    }

    fn name(&self) -> &'static str {
        MctsSearch::<R>::name(self)
    }

    fn last_stats(&self) -> SearchStats {
        MctsSearch::<R>::last_stats(self)
    }
}
