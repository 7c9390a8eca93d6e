//! Weighted directed graphs and step-producing searches
//!
//! Adjacency lists keep edges in insertion order. That order is part of
//! the contract: it decides which neighbor BFS enqueues first and which
//! branch DFS explores first.
//!
//! Graphs are built programmatically or loaded from text through the
//! restricted parsers in [`parse`]; caller text is never executed.

pub mod parse;
mod search;
mod traversal;

pub use parse::GraphParseError;
pub use search::{
    bfs_steps, dfs_steps, Bfs, Dfs, SearchAlgorithm, SearchOutcome, SearchStep, SearchSteps,
};
pub use traversal::{postorder, preorder};

use std::collections::HashMap;
use std::str::FromStr;

use tracing::debug;

/// Outgoing edge
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Edge {
    /// Target node identifier
    pub to: String,
    /// Edge weight (display only; searches count edges)
    pub weight: f64,
}

impl Edge {
    /// Construct an edge towards `to`
    pub fn new(to: impl Into<String>, weight: f64) -> Self {
        Self {
            to: to.into(),
            weight,
        }
    }
}

/// Weighted directed graph stored as ordered adjacency lists
///
/// Nodes without outgoing edges may still be keys. Edge targets do not have
/// to be keys themselves.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Graph {
    /// Node keys in insertion order
    order: Vec<String>,
    adjacency: HashMap<String, Vec<Edge>>,
    /// Advisory per-node heuristic values, never read by the searches
    heuristics: HashMap<String, f64>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` as a key with no edges. Returns `false` if already present.
    pub fn add_node(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.order.push(id.clone());
        self.adjacency.insert(id, Vec::new());
        true
    }

    /// Append an edge to `from`'s adjacency list, adding `from` as a key if needed
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, weight: f64) {
        let from = from.into();
        self.add_node(from.clone());
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(Edge::new(to, weight));
        }
    }

    /// Replace `id`'s adjacency list wholesale, keeping its original position
    pub fn set_edges(&mut self, id: impl Into<String>, edges: Vec<Edge>) {
        let id = id.into();
        self.add_node(id.clone());
        self.adjacency.insert(id, edges);
    }

    /// Remove key `id` together with every edge pointing at it
    ///
    /// Returns `false` if `id` is not a key. Heuristic values are advisory
    /// and left in place.
    pub fn remove_node(&mut self, id: &str) -> bool {
        if self.adjacency.remove(id).is_none() {
            return false;
        }
        self.order.retain(|key| key != id);
        let mut dropped = 0;
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|edge| edge.to != id);
            dropped += before - edges.len();
        }
        debug!(node = id, incoming = dropped, "removed graph node");
        true
    }

    /// Remove every node, edge and heuristic value
    pub fn clear(&mut self) {
        self.order.clear();
        self.adjacency.clear();
        self.heuristics.clear();
    }

    /// Outgoing edges of `id`, empty if `id` is not a key
    pub fn neighbors(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Node keys in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// First inserted key, the default traversal start
    pub fn first_node(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    /// True if `id` is a key
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Number of keys
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// True when the graph has no keys
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Heuristic value attached to `id`
    pub fn heuristic(&self, id: &str) -> Option<f64> {
        self.heuristics.get(id).copied()
    }

    /// Attach a heuristic value to `id`
    pub fn set_heuristic(&mut self, id: impl Into<String>, value: f64) {
        self.heuristics.insert(id.into(), value);
    }

    /// All heuristic values, in no particular order
    pub fn heuristics(&self) -> impl Iterator<Item = (&str, f64)> {
        self.heuristics.iter().map(|(id, value)| (id.as_str(), *value))
    }

    /// Parse a mapping literal such as `graph = {'A': [('B', 3)], 'B': []}`
    pub fn parse_literal(text: &str) -> Result<Self, GraphParseError> {
        parse::parse_literal(text)
    }

    /// Parse one `from to [weight]` edge per line
    pub fn parse_edge_list(text: &str) -> Result<Self, GraphParseError> {
        parse::parse_edge_list(text)
    }
}

impl FromStr for Graph {
    type Err = GraphParseError;

    /// Mapping literal if the text contains a `{`, edge list otherwise
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('{') {
            Self::parse_literal(s)
        } else {
            Self::parse_edge_list(s)
        }
    }
}
