//! # Step-producing engines for classic algorithms
//!
//! Every algorithm in this crate reports its work as a deterministic
//! sequence of immutable step records, so a presentation layer can animate
//! it, a test can replay it, or a recorder can hash it.
//!
//! ## Engines
//!
//! 1. **Binary search tree** ([`tree`]): insert, delete (successor copy),
//!    search and the three depth-first orders
//! 2. **Graph search** ([`graph`]): BFS and DFS as lazy step iterators over a
//!    weighted directed graph, plus preorder/postorder utilities
//! 3. **Sorting** ([`sorting`]): insertion, bubble, selection, bottom-up merge
//!    and Lomuto quicksort, each step carrying a full array snapshot
//! 4. **Expressions** ([`expression`]): infix to postfix/prefix conversion and
//!    postfix evaluation with per-token explanations
//! 5. **Bounded containers** ([`containers`]): fixed-capacity queue and stack
//!
//! Graphs are loaded from text by a restricted literal parser; input is
//! never executed.
//!
//! ## Usage Example
//!
//! ```
//! use algoscope::graph::{bfs_steps, Graph, SearchStep};
//!
//! let graph: Graph = "{'A': [('B', 3), ('C', 1)], 'B': [('E', 7)], 'C': [('E', 7)], 'E': []}"
//!     .parse()
//!     .unwrap();
//! let last = bfs_steps(&graph, "A", "E").last().unwrap();
//! assert_eq!(
//!     last,
//!     SearchStep::Found { path: vec!["A".into(), "B".into(), "E".into()] }
//! );
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod config; // Playback pacing and limits
pub mod containers; // Bounded queue and stack
pub mod expression; // Infix conversion and postfix evaluation
pub mod graph; // Weighted directed graph and search
pub mod sorting; // Instrumented sorting algorithms
pub mod trace; // Step recording and fingerprints
pub mod tree; // Binary search tree
pub mod util; // Helper functions

// Re-exports for convenience
pub use config::{ConfigError, Pace, PlaybackConfig};
pub use containers::{BoundedQueue, BoundedStack};
pub use expression::{Conversion, Evaluation, Notation, Value};
pub use graph::{Graph, GraphParseError, SearchAlgorithm, SearchStep};
pub use sorting::{SortAlgorithm, SortStep};
pub use trace::{fingerprint, TraceError, TraceRecorder};
pub use tree::{Bst, Node, Order, TreeSearch};
pub use util::ParseNameError;
