//! Full-width depth-first search.
//!
//! Every line is enumerated to `max_depth` plies (no pruning, no move
//! ordering), each leaf is scored for the searching player, and the first
//! move of a uniformly chosen best-scoring line is played.

use std::time::Instant;

use engine_core::{available_moves, Board, Player};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::config::DfsConfig;
use crate::node::NodeId;
use crate::random::TieBreaker;
use crate::search::{MoveSelector, SearchError, SearchStats};
use crate::tree::Tree;

/// Tree built by the depth-first search; nodes carry no payload.
pub type DfsTree<B> = Tree<B, ()>;

/// Best leaf score seen so far and every root-to-leaf line achieving it.
#[derive(Debug, Clone)]
pub struct BestPaths<M> {
    pub score: f64,
    pub paths: Vec<Vec<M>>,
}

impl<M: Clone> BestPaths<M> {
    pub fn new() -> Self {
        Self {
            score: f64::NEG_INFINITY,
            paths: Vec::new(),
        }
    }

    /// Record a leaf. A strictly better score replaces all ties; an equal
    /// score joins them.
    pub fn offer(&mut self, score: f64, path: &[M]) {
        if score > self.score {
            self.score = score;
            self.paths.clear();
            self.paths.push(path.to_vec());
        } else if score == self.score {
            self.paths.push(path.to_vec());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<M: Clone> Default for BestPaths<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Exhaustive fixed-depth search.
pub struct DfsSearch<R = ChaCha20Rng> {
    config: DfsConfig,
    picker: TieBreaker<R>,
    last_stats: SearchStats,
}

impl DfsSearch<ChaCha20Rng> {
    /// Search seeded from entropy.
    pub fn new(config: DfsConfig) -> Self {
        Self::with_picker(config, TieBreaker::from_entropy())
    }

    /// Reproducible search.
    pub fn with_seed(config: DfsConfig, seed: u64) -> Self {
        Self::with_picker(config, TieBreaker::seeded(seed))
    }
}

impl<R: Rng> DfsSearch<R> {
    pub fn with_picker(config: DfsConfig, picker: TieBreaker<R>) -> Self {
        Self {
            config,
            picker,
            last_stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &DfsConfig {
        &self.config
    }

    /// Short strategy name for logs.
    pub fn name(&self) -> &'static str {
        "dfs"
    }

    /// Statistics of the last completed search.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Enumerate every line from `board` to the configured depth.
    pub fn build_tree<B: Board>(&self, board: &B) -> DfsTree<B> {
        let mut tree = Tree::new(board.clone(), ());
        let root = tree.root();
        self.expand(&mut tree, root, 0);
        tree
    }

    fn expand<B: Board>(&self, tree: &mut DfsTree<B>, parent: NodeId, depth: usize) {
        if depth >= self.config.max_depth {
            return;
        }

        let board = &tree.get(parent).board;
        if !board.status().is_running() {
            return;
        }

        let to_move = board.next_player();
        for mv in available_moves(board, to_move) {
            let mut next = tree.get(parent).board.clone();
            next.apply_move(&mv, to_move);
            let child = tree.add_child(parent, mv, next, depth + 1, ());
            self.expand(tree, child, depth + 1);
        }
    }

    /// Score every leaf of `tree` for `player` and collect the best lines.
    pub fn best_paths<B: Board>(&self, tree: &DfsTree<B>, player: Player) -> BestPaths<B::Move> {
        let mut best = BestPaths::new();
        let mut path = Vec::with_capacity(self.config.max_depth);
        self.collect(tree, tree.root(), player, &mut path, &mut best);
        best
    }

    fn collect<B: Board>(
        &self,
        tree: &DfsTree<B>,
        node_id: NodeId,
        player: Player,
        path: &mut Vec<B::Move>,
        best: &mut BestPaths<B::Move>,
    ) {
        let node = tree.get(node_id);
        if node.is_leaf() {
            let score = self.config.scoring.score(&node.board, player);
            trace!(leaf = %node.name, score, "DFS leaf");
            best.offer(score, path);
            return;
        }

        for &child_id in &node.children {
            let Some(mv) = tree.get(child_id).mv.clone() else {
                continue;
            };
            path.push(mv);
            self.collect(tree, child_id, player, path, best);
            path.pop();
        }
    }
}

impl<B: Board, R: Rng> MoveSelector<B> for DfsSearch<R> {
    fn select_move(&mut self, board: &B, player: Player) -> Result<Option<B::Move>, SearchError> {
        if self.config.max_depth == 0 {
            return Err(SearchError::ZeroDepth);
        }

        let started = Instant::now();
        let tree = self.build_tree(board);
        let tree_stats = tree.stats();

        let chosen = if tree.get(tree.root()).is_leaf() {
            None
        } else {
            let best = self.best_paths(&tree, player);
            debug!(
                best_score = best.score,
                tied_lines = best.paths.len(),
                "DFS best lines collected"
            );
            self.picker
                .pick(&best.paths)
                .and_then(|line| line.first().cloned())
        };

        self.last_stats = SearchStats {
            iterations: 1,
            nodes: tree_stats.total_nodes,
            max_depth: tree_stats.max_depth,
            elapsed: started.elapsed(),
        };

        debug!(
            %player,
            nodes = tree_stats.total_nodes,
            max_depth = tree_stats.max_depth,
            elapsed_ms = self.last_stats.elapsed.as_millis() as u64,
            found = chosen.is_some(),
            "DFS search complete"
        );

        Ok(chosen)
    }

    fn name(&self) -> &'static str {
        DfsSearch::<R>::name(self)
    }

    fn last_stats(&self) -> SearchStats {
        DfsSearch::<R>::last_stats(self)
    }
}
