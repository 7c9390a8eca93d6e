//! Whole-graph depth-first orderings
//!
//! Unlike the searches these produce a finished list in one call.

use std::collections::HashSet;

use super::Graph;

/// Depth-first discovery order from `start`, computed with an explicit stack
///
/// The stack top is recorded the first time it is seen. The neighbor
/// pushed next is the first unseen one found scanning the adjacency list
/// from the back; when none is left the top is popped.
pub fn preorder(graph: &Graph, start: &str) -> Vec<String> {
    let mut order = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut stack = vec![start.to_string()];

    while let Some(top) = stack.last().cloned() {
        if seen.insert(top.clone()) {
            order.push(top.clone());
        }
        let next = graph
            .neighbors(&top)
            .iter()
            .rev()
            .find(|edge| !seen.contains(edge.to.as_str()));
        match next {
            Some(edge) => stack.push(edge.to.clone()),
            None => {
                stack.pop();
            }
        }
    }

    order
}

/// Reverse of the recursive postorder from `start`
///
/// Each node is appended after all of its unvisited neighbors (taken in
/// adjacency order) have been finished, and the finished list is reversed
/// before returning. The result is therefore reverse postorder, which is
/// the established output of this operation.
pub fn postorder(graph: &Graph, start: &str) -> Vec<String> {
    fn finish(graph: &Graph, node: &str, seen: &mut HashSet<String>, out: &mut Vec<String>) {
        seen.insert(node.to_string());
        for edge in graph.neighbors(node) {
            if !seen.contains(edge.to.as_str()) {
                finish(graph, &edge.to, seen, out);
            }
        }
        out.push(node.to_string());
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    finish(graph, start, &mut seen, &mut out);
    out.reverse();
    out
}
