//! Whole-tree search walks
//!
//! Unlike [`Bst::search`](super::Bst::search), these walks ignore the
//! ordering invariant and visit nodes level by level (BFS) or depth first
//! (DFS), so a front-end can animate how each strategy explores the tree.

use std::collections::VecDeque;

use tracing::debug;

use super::node::Node;
use crate::graph::SearchAlgorithm;

/// Outcome of [`Bst::search_walk`](super::Bst::search_walk)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TreeSearch {
    /// Keys in the order the walk visited them, target included
    pub visited: Vec<i64>,
    /// Keys from the root down to the target, if it was found
    pub path: Option<Vec<i64>>,
}

impl TreeSearch {
    /// True if the target was reached
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

pub(super) fn walk(root: Option<&Node>, target: i64, algorithm: SearchAlgorithm) -> TreeSearch {
    let Some(root) = root else {
        return TreeSearch::default();
    };
    let mut visited = Vec::new();
    let hit = match algorithm {
        SearchAlgorithm::Bfs => level_order(root, target, &mut visited),
        SearchAlgorithm::Dfs => depth_first(root, target, &mut visited),
    };
    let path = hit.then(|| path_to(root, target));
    if path.is_none() {
        debug!(value = target, %algorithm, visited = visited.len(), "tree walk missed");
    }
    TreeSearch { visited, path }
}

fn level_order(root: &Node, target: i64, visited: &mut Vec<i64>) -> bool {
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        visited.push(node.value);
        if node.value == target {
            return true;
        }
        queue.extend(node.left());
        queue.extend(node.right());
    }
    false
}

/// Preorder with an explicit stack; the right child goes on first so the
/// left subtree is explored first.
fn depth_first(root: &Node, target: i64, visited: &mut Vec<i64>) -> bool {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visited.push(node.value);
        if node.value == target {
            return true;
        }
        stack.extend(node.right());
        stack.extend(node.left());
    }
    false
}

/// Keys are unique, so the root-to-target chain is the ordered descent
fn path_to(root: &Node, target: i64) -> Vec<i64> {
    let mut path = Vec::new();
    let mut link = Some(root);
    while let Some(node) = link {
        path.push(node.value);
        link = match target.cmp(&node.value) {
            std::cmp::Ordering::Equal => break,
            std::cmp::Ordering::Less => node.left(),
            std::cmp::Ordering::Greater => node.right(),
        };
    }
    path
}
