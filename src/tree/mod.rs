//! Binary search tree
//!
//! Single-owner tree of `i64` keys. Every node's left subtree holds only
//! smaller keys and its right subtree only greater keys; duplicates are
//! rejected. Misses are reported as `false`/`None`, never as errors.

mod node;
mod search;
mod traversal;

pub use node::Node;
pub use search::TreeSearch;
pub use traversal::Order;

use std::cmp::Ordering;

use node::Link;
use tracing::debug;

use crate::graph::SearchAlgorithm;

/// Binary search tree with insert, delete, search and traversals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Bst {
    root: Link,
    len: usize,
}

impl Bst {
    /// Create an empty tree
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `value`. Returns `false` if it is already present.
    pub fn insert(&mut self, value: i64) -> bool {
        let inserted = insert_into(&mut self.root, value);
        if inserted {
            self.len += 1;
        } else {
            debug!(value, "insert skipped: duplicate key");
        }
        inserted
    }

    /// Delete `value`. Returns `false` if it was not present.
    ///
    /// A node with two children takes over its in-order successor's key,
    /// and the successor is then removed from the right subtree.
    pub fn delete(&mut self, value: i64) -> bool {
        let deleted = delete_from(&mut self.root, value);
        if deleted {
            self.len -= 1;
        } else {
            debug!(value, "delete skipped: key not found");
        }
        deleted
    }

    /// Find the node holding `value`
    pub fn search(&self, value: i64) -> Option<&Node> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Look for `value` by walking the whole tree breadth first or depth
    /// first, recording every node visited on the way
    pub fn search_walk(&self, value: i64, algorithm: SearchAlgorithm) -> TreeSearch {
        search::walk(self.root(), value, algorithm)
    }

    /// True if `value` is stored
    pub fn contains(&self, value: i64) -> bool {
        self.search(value).is_some()
    }

    /// Keys in the given order
    pub fn traverse(&self, order: Order) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        order.walk(self.root(), &mut out);
        out
    }

    /// Keys in sorted order
    pub fn inorder(&self) -> Vec<i64> {
        self.traverse(Order::InOrder)
    }

    /// Keys with each node before its subtrees
    pub fn preorder(&self) -> Vec<i64> {
        self.traverse(Order::PreOrder)
    }

    /// Keys with each node after its subtrees
    pub fn postorder(&self) -> Vec<i64> {
        self.traverse(Order::PostOrder)
    }

    /// Root node, if any
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height in nodes (0 for an empty tree)
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Remove every key
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl FromIterator<i64> for Bst {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Bst::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

fn insert_into(link: &mut Link, value: i64) -> bool {
    match link {
        None => {
            *link = Some(Box::new(Node::new(value)));
            true
        }
        Some(node) => match value.cmp(&node.value) {
            Ordering::Equal => false,
            Ordering::Less => insert_into(&mut node.left, value),
            Ordering::Greater => insert_into(&mut node.right, value),
        },
    }
}

fn delete_from(link: &mut Link, value: i64) -> bool {
    let Some(node) = link else {
        return false;
    };
    match value.cmp(&node.value) {
        Ordering::Less => delete_from(&mut node.left, value),
        Ordering::Greater => delete_from(&mut node.right, value),
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                let successor = node.right.as_deref().map_or(node.value, Node::min_value);
                node.value = successor;
                // The successor has no left child, so this is a splice.
                delete_from(&mut node.right, successor);
            } else {
                let child = node.left.take().or_else(|| node.right.take());
                *link = child;
            }
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[i64]) -> Bst {
        values.iter().copied().collect()
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut tree = Bst::new();
        assert!(tree.insert(5));
        assert!(tree.insert(3));
        assert!(!tree.insert(5));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.inorder(), vec![3, 5]);
    }

    #[test]
    fn test_first_insert_becomes_root() {
        let mut tree = Bst::new();
        assert!(tree.is_empty());
        tree.insert(42);
        assert_eq!(tree.root().map(Node::value), Some(42));
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_search() {
        let tree = tree_of(&[50, 30, 70, 20, 40]);
        assert_eq!(tree.search(40).map(Node::value), Some(40));
        assert!(tree.search(45).is_none());
        assert!(Bst::new().search(1).is_none());
    }

    #[test]
    fn test_delete_leaf() {
        let mut tree = tree_of(&[50, 30, 70]);
        assert!(tree.delete(30));
        assert_eq!(tree.preorder(), vec![50, 70]);
    }

    #[test]
    fn test_delete_single_child_promotes_child() {
        let mut tree = tree_of(&[50, 30, 20]);
        assert!(tree.delete(30));
        assert_eq!(tree.preorder(), vec![50, 20]);
        assert!(tree.delete(50));
        assert_eq!(tree.root().map(Node::value), Some(20));
    }

    #[test]
    fn test_delete_two_children_uses_successor() {
        let mut tree = tree_of(&[50, 30, 70, 60, 80, 65]);
        assert!(tree.delete(50));
        // 60 (leftmost of the right subtree) moves into the root slot and
        // its right child 65 is promoted.
        assert_eq!(tree.preorder(), vec![60, 30, 70, 65, 80]);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_delete_missing() {
        let mut tree = tree_of(&[1, 2, 3]);
        assert!(!tree.delete(9));
        assert_eq!(tree.len(), 3);
        assert!(!Bst::new().delete(0));
    }

    #[test]
    fn test_traversals() {
        let tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(tree.inorder(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.preorder(), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(tree.postorder(), vec![1, 3, 2, 5, 7, 6, 4]);
    }

    #[test]
    fn test_clear() {
        let mut tree = tree_of(&[3, 1, 2]);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.inorder().is_empty());
    }
}
