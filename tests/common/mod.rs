#![allow(dead_code)]

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use algoscope::graph::Graph;

/// Eight-node graph the interactive front-end loads by default
pub const SAMPLE_GRAPH: &str = "graph={
  'A':[('B',3),('C',1),('D',5)],
  'B':[('E',7)],
  'C':[('F',4),('E',7)],
  'D':[('F',9)],
  'E':[('H',6)],
  'F':[('G',2)],
  'G':[],
  'H':[('G',7)]
}";

/// A reaches E through either B or C
pub const DIAMOND_GRAPH: &str = "{'A': [('B', 3), ('C', 1)], 'B': [('E', 7)], 'C': [('E', 7)], 'E': []}";

pub fn sample_graph() -> Graph {
    Graph::parse_literal(SAMPLE_GRAPH).expect("sample graph parses")
}

pub fn diamond_graph() -> Graph {
    Graph::parse_literal(DIAMOND_GRAPH).expect("diamond graph parses")
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// One rendered step per line
pub fn render_lines<S: Display>(steps: &[S]) -> String {
    let mut out = String::new();
    for step in steps {
        out.push_str(&step.to_string());
        out.push('\n');
    }
    out
}

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("ALGOSCOPE_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set ALGOSCOPE_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path, expected, actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}
