//! BST node
//!
//! A node only carries semantic data: its key and owned children.
//! Layout coordinates belong to whoever draws the tree.

use std::fmt;

/// Owned child link
pub(crate) type Link = Option<Box<Node>>;

/// Single BST node
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Node {
    pub(crate) value: i64,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// Create a leaf
    pub fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Key stored in this node
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Left child (all smaller keys)
    #[inline]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Right child (all greater keys)
    #[inline]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Smallest key in the subtree rooted here
    pub fn min_value(&self) -> i64 {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node.value
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, Node::height);
        let right = self.right().map_or(0, Node::height);
        left.max(right) + 1
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.value)
    }
}
