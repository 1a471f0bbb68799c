//! Search tree with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by [`NodeId`]
//! indices. A tree lives for one `select_move` call and is dropped with it.

use engine_core::Board;

use crate::node::{Node, NodeId};

/// Name given to every root node.
pub const ROOT_NAME: &str = "0";

/// Search tree with arena-based node storage.
#[derive(Debug)]
pub struct Tree<B: Board, X> {
    /// Arena storing all nodes
    nodes: Vec<Node<B, X>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<B: Board, X> Tree<B, X> {
    /// Create a new tree whose root holds `board`.
    pub fn new(board: B, data: X) -> Self {
        Self {
            nodes: vec![Node::new_root(board, ROOT_NAME, data)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node<B, X> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<B, X> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: Node<B, X>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[Node<B, X>] {
        &self.nodes
    }

    /// Append a child to `parent_id`, named `<parent name>-<suffix>`.
    /// Returns the new child's NodeId.
    pub fn add_child(
        &mut self,
        parent_id: NodeId,
        mv: B::Move,
        board: B,
        suffix: usize,
        data: X,
    ) -> NodeId {
        let name = format!("{}-{}", self.get(parent_id).name, suffix);
        let child_id = self.allocate(Node::new_child(mv, board, name, data));
        self.get_mut(parent_id).children.push(child_id);
        child_id
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            total_nodes: self.nodes.len(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|id| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about a search tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub max_depth: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StubBoard;

    #[test]
    fn test_new_tree() {
        let tree: Tree<StubBoard, ()> = Tree::new(StubBoard::branching(3, 2), ());

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root(), NodeId(0));

        let root = tree.get(tree.root());
        assert!(root.mv.is_none());
        assert_eq!(root.name, "0");
    }

    #[test]
    fn test_add_child_names_follow_parent() {
        let board = StubBoard::branching(3, 2);
        let mut tree = Tree::new(board.clone(), ());

        let child = tree.add_child(tree.root(), 2, board.clone(), 1, ());
        let grandchild = tree.add_child(child, 0, board, 2, ());

        assert_eq!(tree.len(), 3);
        assert_eq!(child, NodeId(1));
        assert_eq!(tree.get(child).name, "0-1");
        assert_eq!(tree.get(grandchild).name, "0-1-2");
        assert_eq!(tree.get(child).mv, Some(2));
        assert_eq!(tree.get(tree.root()).children, vec![child]);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let board = StubBoard::branching(3, 2);
        let mut tree = Tree::new(board.clone(), ());
        let ids: Vec<NodeId> = (0..3u8)
            .map(|i| tree.add_child(tree.root(), i, board.clone(), i as usize, ()))
            .collect();

        assert_eq!(tree.get(tree.root()).children, ids);
    }

    #[test]
    fn test_stats() {
        let board = StubBoard::branching(3, 2);
        let mut tree = Tree::new(board.clone(), ());
        let a = tree.add_child(tree.root(), 0, board.clone(), 1, ());
        tree.add_child(tree.root(), 1, board.clone(), 1, ());
        tree.add_child(a, 0, board, 2, ());

        let stats = tree.stats();
        assert_eq!(stats.total_nodes, 4);
        assert_eq!(stats.max_depth, 2);
    }
}
