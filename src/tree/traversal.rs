//! Depth-first traversal orders
//!
//! Each order is a plain recursive walk appending keys to an output
//! buffer. Nothing is mutated.

use std::fmt;
use std::str::FromStr;

use super::Node;
use crate::util::ParseNameError;

/// Traversal order over a binary tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Order {
    /// Left subtree, node, right subtree (sorted for a BST)
    InOrder,
    /// Node, left subtree, right subtree
    PreOrder,
    /// Left subtree, right subtree, node
    PostOrder,
}

impl Order {
    /// All orders, in display order
    pub const ALL: [Order; 3] = [Order::InOrder, Order::PreOrder, Order::PostOrder];

    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Order::InOrder => "inorder",
            Order::PreOrder => "preorder",
            Order::PostOrder => "postorder",
        }
    }

    /// Walk the subtree rooted at `root`, appending keys to `out`
    pub fn walk(self, root: Option<&Node>, out: &mut Vec<i64>) {
        let Some(node) = root else {
            return;
        };
        match self {
            Order::InOrder => {
                self.walk(node.left(), out);
                out.push(node.value);
                self.walk(node.right(), out);
            }
            Order::PreOrder => {
                out.push(node.value);
                self.walk(node.left(), out);
                self.walk(node.right(), out);
            }
            Order::PostOrder => {
                self.walk(node.left(), out);
                self.walk(node.right(), out);
                out.push(node.value);
            }
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inorder" | "in" => Ok(Order::InOrder),
            "preorder" | "pre" => Ok(Order::PreOrder),
            "postorder" | "post" => Ok(Order::PostOrder),
            _ => Err(ParseNameError::new(
                "traversal order",
                s,
                "inorder, preorder, postorder",
            )),
        }
    }
}
