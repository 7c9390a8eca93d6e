//! Breadth-first and depth-first search as step iterators
//!
//! Both searches are pull-based: every call to `next` advances the search
//! by exactly one observable transition and returns a record of it. A
//! search ends with either a `Found` or a single `NotFound` record. Calling
//! the constructor again starts a fresh, identical run.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::mem;
use std::str::FromStr;

use tracing::{debug, trace};

use super::Graph;
use crate::util::{join_spaced, ParseNameError};

/// One observable transition of a graph search
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[cfg_attr(feature = "visualize", serde(tag = "kind", rename_all = "lowercase"))]
pub enum SearchStep {
    /// `node` was taken off the frontier and is being processed
    Visit {
        /// Node being processed
        node: String,
        /// Frontier contents after removal (queue front first, stack bottom first)
        frontier: Vec<String>,
        /// Visited nodes in marking order
        visited: Vec<String>,
    },
    /// BFS appended `node` to the queue
    Enqueue {
        /// Newly discovered node
        node: String,
        /// Queue contents after the append
        frontier: Vec<String>,
        /// Visited nodes in marking order
        visited: Vec<String>,
    },
    /// DFS pushed `node` onto the stack
    Push {
        /// Newly stacked node
        node: String,
        /// Stack contents after the push
        frontier: Vec<String>,
        /// Visited nodes in marking order
        visited: Vec<String>,
    },
    /// Goal reached; `path` runs from start to goal
    Found {
        /// Start-to-goal node sequence
        path: Vec<String>,
    },
    /// Frontier exhausted without reaching the goal
    NotFound,
}

impl SearchStep {
    /// Short lowercase tag of the step kind
    pub fn kind(&self) -> &'static str {
        match self {
            SearchStep::Visit { .. } => "visit",
            SearchStep::Enqueue { .. } => "enqueue",
            SearchStep::Push { .. } => "push",
            SearchStep::Found { .. } => "found",
            SearchStep::NotFound => "notfound",
        }
    }

    /// Node the step is about, if any
    pub fn node(&self) -> Option<&str> {
        match self {
            SearchStep::Visit { node, .. }
            | SearchStep::Enqueue { node, .. }
            | SearchStep::Push { node, .. } => Some(node),
            SearchStep::Found { .. } | SearchStep::NotFound => None,
        }
    }

    /// Frontier snapshot, if the step carries one
    pub fn frontier(&self) -> Option<&[String]> {
        match self {
            SearchStep::Visit { frontier, .. }
            | SearchStep::Enqueue { frontier, .. }
            | SearchStep::Push { frontier, .. } => Some(frontier),
            SearchStep::Found { .. } | SearchStep::NotFound => None,
        }
    }

    /// Visited-set snapshot, if the step carries one
    pub fn visited(&self) -> Option<&[String]> {
        match self {
            SearchStep::Visit { visited, .. }
            | SearchStep::Enqueue { visited, .. }
            | SearchStep::Push { visited, .. } => Some(visited),
            SearchStep::Found { .. } | SearchStep::NotFound => None,
        }
    }

    /// True for `Found` and `NotFound`
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchStep::Found { .. } | SearchStep::NotFound)
    }
}

impl fmt::Display for SearchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStep::Visit {
                node,
                frontier,
                visited,
            }
            | SearchStep::Enqueue {
                node,
                frontier,
                visited,
            }
            | SearchStep::Push {
                node,
                frontier,
                visited,
            } => write!(
                f,
                "{:<8}{node:<6}frontier=[{}] visited={{{}}}",
                self.kind(),
                join_spaced(frontier),
                join_spaced(visited)
            ),
            SearchStep::Found { path } => write!(f, "found   {}", path.join(" -> ")),
            SearchStep::NotFound => f.write_str("notfound"),
        }
    }
}

/// Marked nodes, remembering marking order for snapshots
#[derive(Debug, Default)]
struct Visited {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl Visited {
    fn insert(&mut self, node: &str) -> bool {
        if self.seen.contains(node) {
            return false;
        }
        self.seen.insert(node.to_string());
        self.order.push(node.to_string());
        true
    }

    fn contains(&self, node: &str) -> bool {
        self.seen.contains(node)
    }

    fn snapshot(&self) -> Vec<String> {
        self.order.clone()
    }
}

/// Walk parent links from `goal` back to the start and reverse
fn reconstruct_path(parent: &HashMap<String, String>, goal: &str) -> Vec<String> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while let Some(prev) = parent.get(current) {
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();
    path
}

#[derive(Debug)]
enum Phase {
    /// Take the next node off the frontier
    Next,
    /// Scanning `node`'s adjacency list; `cursor` is BFS's next index or
    /// DFS's remaining count
    Expand { node: String, cursor: usize },
    /// Goal was just visited; emit the path next
    Found(String),
    Finished,
}

/// Breadth-first search step iterator
///
/// The start node is marked visited up front and every node is marked as
/// soon as it is enqueued, so no node enters the queue twice.
#[derive(Debug)]
pub struct Bfs<'g> {
    graph: &'g Graph,
    goal: String,
    queue: VecDeque<String>,
    visited: Visited,
    parent: HashMap<String, String>,
    phase: Phase,
}

impl<'g> Bfs<'g> {
    /// Start a search from `start` towards `goal`
    pub fn new(graph: &'g Graph, start: &str, goal: &str) -> Self {
        let mut visited = Visited::default();
        visited.insert(start);
        Self {
            graph,
            goal: goal.to_string(),
            queue: VecDeque::from([start.to_string()]),
            visited,
            parent: HashMap::new(),
            phase: Phase::Next,
        }
    }

    fn queue_snapshot(&self) -> Vec<String> {
        self.queue.iter().cloned().collect()
    }
}

impl Iterator for Bfs<'_> {
    type Item = SearchStep;

    fn next(&mut self) -> Option<SearchStep> {
        let graph = self.graph;
        loop {
            match mem::replace(&mut self.phase, Phase::Finished) {
                Phase::Next => {
                    let Some(node) = self.queue.pop_front() else {
                        debug!(goal = %self.goal, visited = self.visited.order.len(), "bfs: goal not reachable");
                        return Some(SearchStep::NotFound);
                    };
                    let step = SearchStep::Visit {
                        node: node.clone(),
                        frontier: self.queue_snapshot(),
                        visited: self.visited.snapshot(),
                    };
                    self.phase = if node == self.goal {
                        Phase::Found(node)
                    } else {
                        Phase::Expand { node, cursor: 0 }
                    };
                    return Some(step);
                }
                Phase::Expand { node, mut cursor } => {
                    let edges = graph.neighbors(&node);
                    while cursor < edges.len() {
                        let neighbor = &edges[cursor].to;
                        cursor += 1;
                        if !self.visited.insert(neighbor) {
                            continue;
                        }
                        self.parent
                            .entry(neighbor.clone())
                            .or_insert_with(|| node.clone());
                        self.queue.push_back(neighbor.clone());
                        trace!(from = %node, to = %neighbor, "bfs: enqueue");
                        let step = SearchStep::Enqueue {
                            node: neighbor.clone(),
                            frontier: self.queue_snapshot(),
                            visited: self.visited.snapshot(),
                        };
                        self.phase = Phase::Expand { node, cursor };
                        return Some(step);
                    }
                    self.phase = Phase::Next;
                }
                Phase::Found(goal) => {
                    let path = reconstruct_path(&self.parent, &goal);
                    debug!(path_len = path.len(), "bfs: goal found");
                    return Some(SearchStep::Found { path });
                }
                Phase::Finished => return None,
            }
        }
    }
}

/// Depth-first search step iterator
///
/// Nodes are marked when popped, not when pushed, so a node can sit on the
/// stack more than once; stale copies are skipped when popped. Neighbors
/// are pushed in reverse adjacency order so they pop in adjacency order,
/// which reproduces recursive depth-first visiting order.
#[derive(Debug)]
pub struct Dfs<'g> {
    graph: &'g Graph,
    goal: String,
    stack: Vec<String>,
    visited: Visited,
    parent: HashMap<String, String>,
    phase: Phase,
}

impl<'g> Dfs<'g> {
    /// Start a search from `start` towards `goal`
    pub fn new(graph: &'g Graph, start: &str, goal: &str) -> Self {
        Self {
            graph,
            goal: goal.to_string(),
            stack: vec![start.to_string()],
            visited: Visited::default(),
            parent: HashMap::new(),
            phase: Phase::Next,
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = SearchStep;

    fn next(&mut self) -> Option<SearchStep> {
        let graph = self.graph;
        loop {
            match mem::replace(&mut self.phase, Phase::Finished) {
                Phase::Next => {
                    let Some(node) = self.stack.pop() else {
                        debug!(goal = %self.goal, visited = self.visited.order.len(), "dfs: goal not reachable");
                        return Some(SearchStep::NotFound);
                    };
                    if !self.visited.insert(&node) {
                        trace!(node = %node, "dfs: skipping already visited node");
                        self.phase = Phase::Next;
                        continue;
                    }
                    let step = SearchStep::Visit {
                        node: node.clone(),
                        frontier: self.stack.clone(),
                        visited: self.visited.snapshot(),
                    };
                    self.phase = if node == self.goal {
                        Phase::Found(node)
                    } else {
                        let cursor = graph.neighbors(&node).len();
                        Phase::Expand { node, cursor }
                    };
                    return Some(step);
                }
                Phase::Expand { node, mut cursor } => {
                    let edges = graph.neighbors(&node);
                    while cursor > 0 {
                        cursor -= 1;
                        let neighbor = &edges[cursor].to;
                        if self.visited.contains(neighbor) {
                            continue;
                        }
                        // First discovery fixes the parent.
                        self.parent
                            .entry(neighbor.clone())
                            .or_insert_with(|| node.clone());
                        self.stack.push(neighbor.clone());
                        trace!(from = %node, to = %neighbor, "dfs: push");
                        let step = SearchStep::Push {
                            node: neighbor.clone(),
                            frontier: self.stack.clone(),
                            visited: self.visited.snapshot(),
                        };
                        self.phase = Phase::Expand { node, cursor };
                        return Some(step);
                    }
                    self.phase = Phase::Next;
                }
                Phase::Found(goal) => {
                    let path = reconstruct_path(&self.parent, &goal);
                    debug!(path_len = path.len(), "dfs: goal found");
                    return Some(SearchStep::Found { path });
                }
                Phase::Finished => return None,
            }
        }
    }
}

/// Breadth-first search from `start` to `goal`
pub fn bfs_steps<'g>(graph: &'g Graph, start: &str, goal: &str) -> Bfs<'g> {
    Bfs::new(graph, start, goal)
}

/// Depth-first search from `start` to `goal`
pub fn dfs_steps<'g>(graph: &'g Graph, start: &str, goal: &str) -> Dfs<'g> {
    Dfs::new(graph, start, goal)
}

/// Search strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
}

impl SearchAlgorithm {
    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Bfs => "bfs",
            SearchAlgorithm::Dfs => "dfs",
        }
    }

    /// Start a search with this strategy
    pub fn steps<'g>(self, graph: &'g Graph, start: &str, goal: &str) -> SearchSteps<'g> {
        match self {
            SearchAlgorithm::Bfs => SearchSteps::Bfs(Bfs::new(graph, start, goal)),
            SearchAlgorithm::Dfs => SearchSteps::Dfs(Dfs::new(graph, start, goal)),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(SearchAlgorithm::Bfs),
            "dfs" | "depth-first" => Ok(SearchAlgorithm::Dfs),
            _ => Err(ParseNameError::new("search algorithm", s, "bfs, dfs")),
        }
    }
}

/// Step iterator of either search strategy
#[derive(Debug)]
pub enum SearchSteps<'g> {
    /// Breadth-first run
    Bfs(Bfs<'g>),
    /// Depth-first run
    Dfs(Dfs<'g>),
}

impl Iterator for SearchSteps<'_> {
    type Item = SearchStep;

    fn next(&mut self) -> Option<SearchStep> {
        match self {
            SearchSteps::Bfs(inner) => inner.next(),
            SearchSteps::Dfs(inner) => inner.next(),
        }
    }
}

/// Summary of a finished search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Nodes in the order they were visited
    pub visit_order: Vec<String>,
    /// Start-to-goal path, if the goal was reached
    pub path: Option<Vec<String>>,
    /// Number of steps consumed
    pub steps: usize,
}

impl SearchOutcome {
    /// Drain a step sequence into a summary
    pub fn collect<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = SearchStep>,
    {
        let mut outcome = SearchOutcome::default();
        for step in steps {
            outcome.steps += 1;
            match step {
                SearchStep::Visit { node, .. } => outcome.visit_order.push(node),
                SearchStep::Found { path } => {
                    outcome.path = Some(path);
                    break;
                }
                SearchStep::NotFound => break,
                SearchStep::Enqueue { .. } | SearchStep::Push { .. } => {}
            }
        }
        outcome
    }

    /// True if the goal was reached
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}
