#[path = "common/mod.rs"]
mod common;

use std::collections::{HashMap, HashSet, VecDeque};

use algoscope::graph::{
    bfs_steps, dfs_steps, postorder, preorder, Graph, SearchOutcome, SearchStep,
};
use common::{diamond_graph, sample_graph, strings};
use proptest::prelude::*;

fn name(idx: usize) -> String {
    format!("N{idx}")
}

fn build(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new();
    for idx in 0..n {
        graph.add_node(name(idx));
    }
    for &(from, to) in edges {
        graph.add_edge(name(from), name(to), 1.0);
    }
    graph
}

fn graphs() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..10).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..n * 3),
        )
    })
}

/// Edge distances from `start`, computed independently of the engine
fn distances(graph: &Graph, start: &str) -> HashMap<String, usize> {
    let mut dist = HashMap::from([(start.to_string(), 0)]);
    let mut queue = VecDeque::from([start.to_string()]);
    while let Some(node) = queue.pop_front() {
        let d = dist[&node];
        for edge in graph.neighbors(&node) {
            if !dist.contains_key(&edge.to) {
                dist.insert(edge.to.clone(), d + 1);
                queue.push_back(edge.to.clone());
            }
        }
    }
    dist
}

fn recursive_dfs(
    graph: &Graph,
    node: &str,
    reverse: bool,
    seen: &mut HashSet<String>,
    order: &mut Vec<String>,
) {
    if !seen.insert(node.to_string()) {
        return;
    }
    order.push(node.to_string());
    let mut edges: Vec<_> = graph.neighbors(node).iter().collect();
    if reverse {
        edges.reverse();
    }
    for edge in edges {
        recursive_dfs(graph, &edge.to, reverse, seen, order);
    }
}

fn is_edge(graph: &Graph, from: &str, to: &str) -> bool {
    graph.neighbors(from).iter().any(|edge| edge.to == to)
}

proptest! {
    #[test]
    fn bfs_finds_a_shortest_path((n, edges) in graphs(), goal_idx in 0usize..10) {
        let graph = build(n, &edges);
        let goal = name(goal_idx % n);
        let dist = distances(&graph, "N0");

        let outcome = SearchOutcome::collect(bfs_steps(&graph, "N0", &goal));
        match (dist.get(&goal), outcome.path) {
            (Some(&d), Some(path)) => {
                prop_assert_eq!(path.len(), d + 1);
                prop_assert_eq!(path.first().map(String::as_str), Some("N0"));
                prop_assert_eq!(path.last(), Some(&goal));
                for pair in path.windows(2) {
                    prop_assert!(is_edge(&graph, &pair[0], &pair[1]));
                }
            }
            (None, None) => {
                let visited: HashSet<String> = outcome.visit_order.into_iter().collect();
                let reachable: HashSet<String> = dist.into_keys().collect();
                prop_assert_eq!(visited, reachable);
            }
            (expected, found) => {
                prop_assert!(false, "reachable={:?} but path={:?}", expected, found);
            }
        }
    }

    #[test]
    fn unreachable_goal_ends_with_single_notfound((n, edges) in graphs()) {
        let graph = build(n, &edges);
        for steps in [
            bfs_steps(&graph, "N0", "missing").collect::<Vec<_>>(),
            dfs_steps(&graph, "N0", "missing").collect::<Vec<_>>(),
        ] {
            let misses = steps.iter().filter(|s| **s == SearchStep::NotFound).count();
            prop_assert_eq!(misses, 1);
            prop_assert_eq!(steps.last(), Some(&SearchStep::NotFound));
        }
    }

    #[test]
    fn dfs_visits_in_recursive_order((n, edges) in graphs()) {
        let graph = build(n, &edges);
        let mut expected = Vec::new();
        recursive_dfs(&graph, "N0", false, &mut HashSet::new(), &mut expected);
        let outcome = SearchOutcome::collect(dfs_steps(&graph, "N0", "missing"));
        prop_assert_eq!(outcome.visit_order, expected);

        // The preorder utility explores the last neighbor first
        let mut mirrored = Vec::new();
        recursive_dfs(&graph, "N0", true, &mut HashSet::new(), &mut mirrored);
        prop_assert_eq!(preorder(&graph, "N0"), mirrored);
    }

    #[test]
    fn visited_snapshots_only_grow((n, edges) in graphs(), goal_idx in 0usize..10) {
        let graph = build(n, &edges);
        let goal = name(goal_idx % n);
        let mut previous = 0;
        for step in bfs_steps(&graph, "N0", &goal) {
            if let Some(visited) = step.visited() {
                prop_assert!(visited.len() >= previous);
                previous = visited.len();
            }
        }
    }
}

#[test]
fn diamond_scenario() {
    let graph = diamond_graph();
    let steps: Vec<SearchStep> = bfs_steps(&graph, "A", "E").collect();
    let visits: Vec<&str> = steps
        .iter()
        .filter(|s| s.kind() == "visit")
        .filter_map(SearchStep::node)
        .collect();
    assert_eq!(visits, vec!["A", "B", "C", "E"]);
    assert_eq!(
        steps.last(),
        Some(&SearchStep::Found {
            path: strings(&["A", "B", "E"])
        })
    );
}

#[test]
fn sample_graph_orders() {
    let graph = sample_graph();
    assert_eq!(
        preorder(&graph, "A"),
        strings(&["A", "D", "F", "G", "C", "E", "H", "B"])
    );
    assert_eq!(
        postorder(&graph, "A"),
        strings(&["A", "D", "C", "F", "B", "E", "H", "G"])
    );

    let outcome = SearchOutcome::collect(dfs_steps(&graph, "A", "H"));
    assert_eq!(outcome.path, Some(strings(&["A", "B", "E", "H"])));
}

#[test]
fn edge_list_and_literal_agree() {
    let literal = diamond_graph();
    let edges = Graph::parse_edge_list("A B 3\nA C 1\nB E 7\nC E 7\n").expect("edge list parses");
    assert_eq!(
        SearchOutcome::collect(bfs_steps(&literal, "A", "E")),
        SearchOutcome::collect(bfs_steps(&edges, "A", "E"))
    );
}

#[test]
fn removed_node_is_no_longer_reachable() {
    let mut graph = diamond_graph();
    assert!(graph.remove_node("B"));

    let outcome = SearchOutcome::collect(bfs_steps(&graph, "A", "E"));
    assert_eq!(outcome.path, Some(strings(&["A", "C", "E"])));
    assert!(!outcome.visit_order.contains(&"B".to_string()));

    assert!(graph.remove_node("C"));
    let steps: Vec<SearchStep> = bfs_steps(&graph, "A", "E").collect();
    assert_eq!(steps.last(), Some(&SearchStep::NotFound));
    assert_eq!(preorder(&graph, "A"), strings(&["A"]));
}
