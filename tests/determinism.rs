#[path = "common/mod.rs"]
mod common;

use std::collections::HashSet;

use algoscope::expression::{eval_postfix, infix_to_prefix};
use algoscope::graph::{SearchAlgorithm, SearchStep};
use algoscope::sorting::{SortAlgorithm, SortStep};
use algoscope::trace::{fingerprint, record, TraceError, TraceRecorder};
use algoscope::PlaybackConfig;
use common::sample_graph;

const INPUT: [i64; 9] = [38, 27, 43, 3, 9, 82, 10, 3, -4];

#[test]
fn sort_traces_are_deterministic() {
    for algorithm in SortAlgorithm::ALL {
        let mut fingerprints = HashSet::new();
        for _ in 0..5 {
            let steps: Vec<SortStep> = algorithm.steps(&INPUT).collect();
            fingerprints.insert(fingerprint(&steps));
        }
        assert_eq!(fingerprints.len(), 1, "{algorithm} diverged across runs");
    }
}

#[test]
fn search_traces_are_deterministic() {
    for algorithm in [SearchAlgorithm::Bfs, SearchAlgorithm::Dfs] {
        let mut fingerprints = HashSet::new();
        for _ in 0..5 {
            // Parsed afresh each time; hash map iteration order must not leak
            let graph = sample_graph();
            let steps: Vec<SearchStep> = algorithm.steps(&graph, "A", "G").collect();
            fingerprints.insert(fingerprint(&steps));
        }
        assert_eq!(fingerprints.len(), 1, "{algorithm} diverged across runs");
    }
}

#[test]
fn expression_traces_are_deterministic() {
    let first = fingerprint(&infix_to_prefix("(a+b)*(c^d^e)").steps);
    let second = fingerprint(&infix_to_prefix("(a+b)*(c^d^e)").steps);
    assert_eq!(first, second);
    assert_ne!(first, fingerprint(&eval_postfix("1 2 +").steps));
}

#[test]
fn different_algorithms_have_different_fingerprints() {
    let fingerprints: HashSet<_> = SortAlgorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let steps: Vec<SortStep> = algorithm.steps(&INPUT).collect();
            fingerprint(&steps)
        })
        .collect();
    assert_eq!(fingerprints.len(), SortAlgorithm::ALL.len());
}

#[test]
fn recorder_enforces_configured_limit() {
    let config = PlaybackConfig::default()
        .with_step_limit(10)
        .expect("valid limit");
    let mut recorder = TraceRecorder::from_config(&config);
    let result = recorder.record_all(SortAlgorithm::Bubble.steps(&INPUT));
    assert_eq!(result, Err(TraceError::LimitExceeded { limit: 10 }));
    assert_eq!(recorder.len(), 10);

    // Insertion sort of two sorted values takes key, insert, done
    let steps = record(SortAlgorithm::Insertion.steps(&[1, 2]), Some(3)).expect("fits");
    assert_eq!(steps.len(), 3);
}
