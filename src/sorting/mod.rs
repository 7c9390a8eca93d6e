//! Instrumented sorting algorithms
//!
//! Every algorithm is an iterator over [`SortStep`] records. Each record
//! carries a full snapshot of the working array taken right after the
//! transition it describes, so replaying the records in order reproduces
//! every intermediate state. Every run ends with exactly one
//! [`SortStep::Done`] holding the sorted array.
//!
//! The iterators are explicit state machines: no work happens until the
//! caller pulls the next record, and dropping an iterator early is free.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::BubbleSteps;
pub use insertion::InsertionSteps;
pub use merge::MergeSteps;
pub use quick::QuickSteps;
pub use selection::SelectionSteps;

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

use crate::util::{join_spaced, ParseNameError};

/// One recorded transition of a sorting algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[cfg_attr(feature = "visualize", serde(tag = "kind", rename_all = "lowercase"))]
pub enum SortStep {
    /// Insertion sort picked up the key at `index`
    Key {
        /// Position of the key
        index: usize,
        /// Array snapshot
        array: Vec<i64>,
    },
    /// Elements at `left` and `right` were compared
    Compare {
        /// First compared index
        left: usize,
        /// Second compared index
        right: usize,
        /// Array snapshot
        array: Vec<i64>,
    },
    /// Insertion sort copied `index - 1` into `index`
    Shift {
        /// Destination of the shift
        index: usize,
        /// Array snapshot
        array: Vec<i64>,
    },
    /// Insertion sort wrote the key into `index`
    Insert {
        /// Final slot of the key
        index: usize,
        /// Array snapshot
        array: Vec<i64>,
    },
    /// Elements at `left` and `right` were exchanged
    Swap {
        /// First exchanged index
        left: usize,
        /// Second exchanged index
        right: usize,
        /// Array snapshot
        array: Vec<i64>,
    },
    /// Merge sort is about to merge `left_start..=mid` with `mid+1..=right_end`
    Merge {
        /// First index of the left run
        left_start: usize,
        /// Last index of the left run
        mid: usize,
        /// Last index of the right run
        right_end: usize,
        /// Array snapshot
        array: Vec<i64>,
    },
    /// Merge sort wrote the merged window `left_start..=right_end` back
    Merged {
        /// First index of the window
        left_start: usize,
        /// Last index of the window
        right_end: usize,
        /// Array snapshot
        array: Vec<i64>,
    },
    /// Sorting finished
    Done {
        /// Sorted array
        array: Vec<i64>,
    },
}

impl SortStep {
    /// Short lowercase tag of the step kind
    pub fn kind(&self) -> &'static str {
        match self {
            SortStep::Key { .. } => "key",
            SortStep::Compare { .. } => "compare",
            SortStep::Shift { .. } => "shift",
            SortStep::Insert { .. } => "insert",
            SortStep::Swap { .. } => "swap",
            SortStep::Merge { .. } => "merge",
            SortStep::Merged { .. } => "merged",
            SortStep::Done { .. } => "done",
        }
    }

    /// Array snapshot taken after this step
    pub fn array(&self) -> &[i64] {
        match self {
            SortStep::Key { array, .. }
            | SortStep::Compare { array, .. }
            | SortStep::Shift { array, .. }
            | SortStep::Insert { array, .. }
            | SortStep::Swap { array, .. }
            | SortStep::Merge { array, .. }
            | SortStep::Merged { array, .. }
            | SortStep::Done { array } => array,
        }
    }

    /// Consume the step, keeping only its snapshot
    pub fn into_array(self) -> Vec<i64> {
        match self {
            SortStep::Key { array, .. }
            | SortStep::Compare { array, .. }
            | SortStep::Shift { array, .. }
            | SortStep::Insert { array, .. }
            | SortStep::Swap { array, .. }
            | SortStep::Merge { array, .. }
            | SortStep::Merged { array, .. }
            | SortStep::Done { array } => array,
        }
    }

    /// Indices a bar-chart display should emphasise for this step
    pub fn highlights(&self) -> Vec<usize> {
        match *self {
            SortStep::Compare { left, right, .. } | SortStep::Swap { left, right, .. } => {
                vec![left, right]
            }
            SortStep::Key { index, .. }
            | SortStep::Shift { index, .. }
            | SortStep::Insert { index, .. } => vec![index],
            SortStep::Merge {
                left_start,
                right_end,
                ..
            }
            | SortStep::Merged {
                left_start,
                right_end,
                ..
            } => window(left_start..=right_end),
            SortStep::Done { .. } => Vec::new(),
        }
    }

    /// True for the final record
    pub fn is_done(&self) -> bool {
        matches!(self, SortStep::Done { .. })
    }
}

fn window(range: RangeInclusive<usize>) -> Vec<usize> {
    range.collect()
}

impl fmt::Display for SortStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8}", self.kind())?;
        match *self {
            SortStep::Compare { left, right, .. } | SortStep::Swap { left, right, .. } => {
                write!(f, "{left:>3} {right:>3}    ")?
            }
            SortStep::Key { index, .. }
            | SortStep::Shift { index, .. }
            | SortStep::Insert { index, .. } => write!(f, "{index:>3}        ")?,
            SortStep::Merge {
                left_start,
                mid,
                right_end,
                ..
            } => write!(f, "{left_start:>3} {mid:>3} {right_end:>3}")?,
            SortStep::Merged {
                left_start,
                right_end,
                ..
            } => write!(f, "{left_start:>3} {right_end:>3}    ")?,
            SortStep::Done { .. } => write!(f, "           ")?,
        }
        write!(f, " [{}]", join_spaced(self.array()))
    }
}

/// Sorting algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Insertion sort with shifting
    Insertion,
    /// Bubble sort without early exit
    Bubble,
    /// Selection sort
    Selection,
    /// Bottom-up merge sort
    Merge,
    /// Lomuto-partition quicksort
    Quick,
}

impl SortAlgorithm {
    /// All algorithms, in display order
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }

    /// Start a run over a copy of `input`
    pub fn steps(self, input: &[i64]) -> SortSteps {
        match self {
            SortAlgorithm::Insertion => SortSteps::Insertion(InsertionSteps::new(input)),
            SortAlgorithm::Bubble => SortSteps::Bubble(BubbleSteps::new(input)),
            SortAlgorithm::Selection => SortSteps::Selection(SelectionSteps::new(input)),
            SortAlgorithm::Merge => SortSteps::Merge(MergeSteps::new(input)),
            SortAlgorithm::Quick => SortSteps::Quick(QuickSteps::new(input)),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.strip_suffix("sort").unwrap_or(&name).trim_end_matches([' ', '-', '_']);
        SortAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == name)
            .ok_or_else(|| {
                ParseNameError::new(
                    "sort algorithm",
                    s,
                    "insertion, bubble, selection, merge, quick",
                )
            })
    }
}

/// Step iterator of any sorting algorithm
#[derive(Debug, Clone)]
pub enum SortSteps {
    /// Insertion sort run
    Insertion(InsertionSteps),
    /// Bubble sort run
    Bubble(BubbleSteps),
    /// Selection sort run
    Selection(SelectionSteps),
    /// Merge sort run
    Merge(MergeSteps),
    /// Quicksort run
    Quick(QuickSteps),
}

impl Iterator for SortSteps {
    type Item = SortStep;

    fn next(&mut self) -> Option<SortStep> {
        match self {
            SortSteps::Insertion(inner) => inner.next(),
            SortSteps::Bubble(inner) => inner.next(),
            SortSteps::Selection(inner) => inner.next(),
            SortSteps::Merge(inner) => inner.next(),
            SortSteps::Quick(inner) => inner.next(),
        }
    }
}

/// Insertion sort steps over a copy of `input`
pub fn insertion_steps(input: &[i64]) -> InsertionSteps {
    InsertionSteps::new(input)
}

/// Bubble sort steps over a copy of `input`
pub fn bubble_steps(input: &[i64]) -> BubbleSteps {
    BubbleSteps::new(input)
}

/// Selection sort steps over a copy of `input`
pub fn selection_steps(input: &[i64]) -> SelectionSteps {
    SelectionSteps::new(input)
}

/// Bottom-up merge sort steps over a copy of `input`
pub fn merge_steps(input: &[i64]) -> MergeSteps {
    MergeSteps::new(input)
}

/// Quicksort steps over a copy of `input`
pub fn quick_steps(input: &[i64]) -> QuickSteps {
    QuickSteps::new(input)
}

/// Rejected comma-separated integer input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValuesError {
    /// Nothing but whitespace and commas
    #[error("no values given")]
    Empty,

    /// A field that is not an integer
    #[error("'{field}' (item {position}) is not an integer")]
    NotAnInteger {
        /// The rejected field
        field: String,
        /// 1-based position among the non-empty fields
        position: usize,
    },
}

/// Parse `"5, 3, 9"` into integers, skipping empty fields
pub fn parse_values(text: &str) -> Result<Vec<i64>, ParseValuesError> {
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .enumerate()
        .map(|(idx, field)| {
            field
                .parse::<i64>()
                .map_err(|_| ParseValuesError::NotAnInteger {
                    field: field.to_string(),
                    position: idx + 1,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(ParseValuesError::Empty);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlights() {
        let compare = SortStep::Compare {
            left: 1,
            right: 2,
            array: vec![],
        };
        assert_eq!(compare.highlights(), vec![1, 2]);

        let merge = SortStep::Merge {
            left_start: 2,
            mid: 3,
            right_end: 5,
            array: vec![],
        };
        assert_eq!(merge.highlights(), vec![2, 3, 4, 5]);
        assert!(SortStep::Done { array: vec![] }.highlights().is_empty());
    }

    #[test]
    fn test_display() {
        let swap = SortStep::Swap {
            left: 0,
            right: 1,
            array: vec![1, 2],
        };
        assert_eq!(swap.to_string(), "swap      0   1     [1 2]");
        let done = SortStep::Done { array: vec![1] };
        assert_eq!(done.to_string(), "done                [1]");
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("Quick".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Quick));
        assert_eq!("merge sort".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Merge));
        assert_eq!("bubblesort".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Bubble));
        assert!("bogo".parse::<SortAlgorithm>().is_err());
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values(" 5, 3 ,,9 "), Ok(vec![5, 3, 9]));
        assert_eq!(parse_values("-1,0"), Ok(vec![-1, 0]));
        assert_eq!(parse_values(" , "), Err(ParseValuesError::Empty));
        assert_eq!(
            parse_values("1, two"),
            Err(ParseValuesError::NotAnInteger {
                field: "two".into(),
                position: 2
            })
        );
    }

    #[test]
    fn test_every_algorithm_ends_with_one_done() {
        let input = [5, 1, 4, 2, 8, 2];
        for algo in SortAlgorithm::ALL {
            let steps: Vec<SortStep> = algo.steps(&input).collect();
            let done: Vec<&SortStep> = steps.iter().filter(|s| s.is_done()).collect();
            assert_eq!(done.len(), 1, "{algo}");
            assert!(steps.last().is_some_and(SortStep::is_done), "{algo}");
            assert_eq!(done[0].array(), &[1, 2, 2, 4, 5, 8], "{algo}");
        }
    }

    #[test]
    fn test_empty_and_single_inputs() {
        for algo in SortAlgorithm::ALL {
            assert_eq!(
                algo.steps(&[]).collect::<Vec<_>>(),
                vec![SortStep::Done { array: vec![] }]
            );
            assert_eq!(
                algo.steps(&[7]).collect::<Vec<_>>(),
                vec![SortStep::Done { array: vec![7] }]
            );
        }
    }
}
