//! Search tree node representation.
//!
//! A node owns the board reached by playing `mv` from its parent. The
//! strategy-specific payload `X` rides alongside: `()` for the DFS search,
//! [`MctsStats`] for Monte-Carlo search.

use std::fmt;

use engine_core::Board;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// A node in a search tree.
#[derive(Debug, Clone)]
pub struct Node<B: Board, X> {
    /// Move that led here from the parent. `None` only for the root.
    pub mv: Option<B::Move>,

    /// Independent snapshot of the position after `mv`.
    pub board: B,

    /// Debug label encoding the path from the root, e.g. `0-1-3`.
    pub name: String,

    /// Children in insertion order. Empty until expanded.
    pub children: Vec<NodeId>,

    /// Strategy payload.
    pub data: X,
}

impl<B: Board, X> Node<B, X> {
    /// Create a new root node.
    pub fn new_root(board: B, name: impl Into<String>, data: X) -> Self {
        Self {
            mv: None,
            board,
            name: name.into(),
            children: Vec::new(),
            data,
        }
    }

    /// Create a new child node.
    pub fn new_child(mv: B::Move, board: B, name: String, data: X) -> Self {
        Self {
            mv: Some(mv),
            board,
            name,
            children: Vec::new(),
            data,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<B: Board> Node<B, MctsStats> {
    /// Label in the form `name (wins/visits)`.
    pub fn label(&self) -> String {
        format!("{} ({}/{})", self.name, self.data.wins, self.data.visits)
    }
}

/// Monte-Carlo statistics carried by each MCTS node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MctsStats {
    /// Number of iterations that passed through this node.
    pub visits: u32,

    /// Signed outcome accumulator: +1 per winning rollout, -1 otherwise.
    pub wins: i64,

    /// Set once children have been generated.
    pub is_expanded: bool,
}

impl MctsStats {
    /// Stats for a freshly expanded child. Children start at one visit so
    /// UCB1 never divides by zero.
    pub fn unvisited_child() -> Self {
        Self {
            visits: 1,
            ..Self::default()
        }
    }

    /// Mean outcome `wins / visits`. Returns 0.0 if never visited.
    #[inline]
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins as f64 / self.visits as f64
        }
    }
}

impl fmt::Display for MctsStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.wins, self.visits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StubBoard;

    #[test]
    fn test_root_has_no_move() {
        let root: Node<StubBoard, ()> = Node::new_root(StubBoard::branching(2, 1), "0", ());
        assert!(root.mv.is_none());
        assert!(root.is_leaf());
    }

    #[test]
    fn test_label() {
        let mut node = Node::new_root(StubBoard::branching(2, 1), "0-3", MctsStats::default());
        node.data.visits = 7;
        node.data.wins = -3;
        assert_eq!(node.label(), "0-3 (-3/7)");
    }

    #[test]
    fn test_mean_value() {
        let stats = MctsStats {
            visits: 4,
            wins: 2,
            is_expanded: false,
        };
        assert!((stats.mean_value() - 0.5).abs() < 1e-12);
        assert_eq!(MctsStats::default().mean_value(), 0.0);
        assert_eq!(MctsStats::unvisited_child().visits, 1);
    }
}
