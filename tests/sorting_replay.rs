use algoscope::sorting::{parse_values, ParseValuesError, SortAlgorithm, SortStep};
use proptest::prelude::*;
use test_case::test_case;

fn sorted(mut values: Vec<i64>) -> Vec<i64> {
    values.sort_unstable();
    values
}

fn same_outside(prev: &[i64], next: &[i64], keep: impl Fn(usize) -> bool) -> bool {
    prev.iter()
        .zip(next)
        .enumerate()
        .all(|(idx, (a, b))| !keep(idx) || a == b)
}

/// Check that `next` follows from `prev` exactly as `step` describes
fn check_transition(prev: &[i64], step: &SortStep) -> Result<(), String> {
    let next = step.array();
    if next.len() != prev.len() {
        return Err(format!("length changed at {step}"));
    }
    let ok = match *step {
        SortStep::Key { .. } | SortStep::Compare { .. } | SortStep::Merge { .. } => prev == next,
        SortStep::Swap { left, right, .. } => {
            let mut expected = prev.to_vec();
            expected.swap(left, right);
            expected == next
        }
        SortStep::Shift { index, .. } => {
            index > 0
                && next[index] == prev[index - 1]
                && same_outside(prev, next, |idx| idx != index)
        }
        SortStep::Insert { index, .. } => same_outside(prev, next, |idx| idx != index),
        SortStep::Merged {
            left_start,
            right_end,
            ..
        } => {
            let window = left_start..=right_end;
            let merged = &next[window.clone()];
            same_outside(prev, next, |idx| !window.contains(&idx))
                && merged.windows(2).all(|w| w[0] <= w[1])
                && sorted(prev[window.clone()].to_vec()) == merged
        }
        SortStep::Done { .. } => prev == next && next.windows(2).all(|w| w[0] <= w[1]),
    };
    if ok {
        Ok(())
    } else {
        Err(format!("{prev:?} does not lead to {step}"))
    }
}

proptest! {
    #[test]
    fn every_snapshot_follows_from_the_previous(
        values in proptest::collection::vec(-50i64..50, 0..24),
    ) {
        for algorithm in SortAlgorithm::ALL {
            let mut prev = values.clone();
            let steps: Vec<SortStep> = algorithm.steps(&values).collect();
            for step in &steps {
                if let Err(msg) = check_transition(&prev, step) {
                    prop_assert!(false, "{}: {}", algorithm, msg);
                }
                prev = step.array().to_vec();
            }
        }
    }

    #[test]
    fn runs_end_with_one_done_holding_the_sorted_input(
        values in proptest::collection::vec(any::<i64>(), 0..32),
    ) {
        for algorithm in SortAlgorithm::ALL {
            let steps: Vec<SortStep> = algorithm.steps(&values).collect();
            let done: Vec<&SortStep> = steps.iter().filter(|s| s.is_done()).collect();
            prop_assert_eq!(done.len(), 1, "{} emitted {} done steps", algorithm, done.len());
            prop_assert!(steps.last().is_some_and(SortStep::is_done));
            prop_assert_eq!(done[0].array(), &sorted(values.clone())[..]);
        }
    }
}

// Compare/swap counts for a reversed array of four
#[test_case(SortAlgorithm::Insertion, 6, 0 ; "insertion shifts instead of swapping")]
#[test_case(SortAlgorithm::Bubble, 6, 6 ; "bubble swaps every compared pair")]
#[test_case(SortAlgorithm::Selection, 6, 2 ; "selection swaps once per misplaced row")]
#[test_case(SortAlgorithm::Merge, 4, 0 ; "merge never swaps")]
#[test_case(SortAlgorithm::Quick, 6, 5 ; "quick records self swaps")]
fn reversed_four_counts(algorithm: SortAlgorithm, compares: usize, swaps: usize) {
    let steps: Vec<SortStep> = algorithm.steps(&[4, 3, 2, 1]).collect();
    let count = |kind: &str| steps.iter().filter(|s| s.kind() == kind).count();
    assert_eq!(count("compare"), compares);
    assert_eq!(count("swap"), swaps);
}

#[test_case("5, 3, 9" => Ok(vec![5, 3, 9]) ; "comma separated")]
#[test_case(" -1,,2 ," => Ok(vec![-1, 2]) ; "empty fields skipped")]
#[test_case(" , " => Err(ParseValuesError::Empty) ; "nothing given")]
#[test_case("1, x" => Err(ParseValuesError::NotAnInteger { field: "x".into(), position: 2 }) ; "bad field")]
fn parse_values_cases(text: &str) -> Result<Vec<i64>, ParseValuesError> {
    parse_values(text)
}

#[test_case("Quick" => SortAlgorithm::Quick ; "capitalised")]
#[test_case("merge sort" => SortAlgorithm::Merge ; "with suffix")]
#[test_case("insertion_sort" => SortAlgorithm::Insertion ; "snake case suffix")]
fn sort_algorithm_from_str(name: &str) -> SortAlgorithm {
    name.parse().expect("known algorithm")
}
