//! Bubble sort
//!
//! Full doubly nested pass structure: pass `i` compares every adjacent
//! pair in `0..n-i-1`, swapping out-of-order pairs. There is no early exit
//! when a pass makes no swaps.

use super::SortStep;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Compare,
    /// Pair `(j, j+1)` was compared; swap it if out of order
    Exchange,
    Finished,
}

/// Bubble sort step iterator
#[derive(Debug, Clone)]
pub struct BubbleSteps {
    a: Vec<i64>,
    i: usize,
    j: usize,
    phase: Phase,
}

impl BubbleSteps {
    /// Start sorting a copy of `input`
    pub fn new(input: &[i64]) -> Self {
        Self {
            a: input.to_vec(),
            i: 0,
            j: 0,
            phase: Phase::Compare,
        }
    }
}

impl Iterator for BubbleSteps {
    type Item = SortStep;

    fn next(&mut self) -> Option<SortStep> {
        let n = self.a.len();
        loop {
            match self.phase {
                Phase::Compare => {
                    if self.i >= n {
                        self.phase = Phase::Finished;
                        return Some(SortStep::Done {
                            array: self.a.clone(),
                        });
                    }
                    if self.j + self.i + 1 >= n {
                        self.i += 1;
                        self.j = 0;
                        continue;
                    }
                    self.phase = Phase::Exchange;
                    return Some(SortStep::Compare {
                        left: self.j,
                        right: self.j + 1,
                        array: self.a.clone(),
                    });
                }
                Phase::Exchange => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Compare;
                    if self.a[j] > self.a[j + 1] {
                        self.a.swap(j, j + 1);
                        return Some(SortStep::Swap {
                            left: j,
                            right: j + 1,
                            array: self.a.clone(),
                        });
                    }
                }
                Phase::Finished => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_input_still_compares_every_pair() {
        let steps: Vec<SortStep> = BubbleSteps::new(&[1, 2, 3, 4]).collect();
        // 3 + 2 + 1 comparisons, no swaps, then done
        assert_eq!(steps.len(), 7);
        assert!(steps.iter().all(|s| s.kind() != "swap"));
    }

    #[test]
    fn test_swap_follows_its_compare() {
        let steps: Vec<SortStep> = BubbleSteps::new(&[2, 1]).collect();
        assert_eq!(
            steps,
            vec![
                SortStep::Compare { left: 0, right: 1, array: vec![2, 1] },
                SortStep::Swap { left: 0, right: 1, array: vec![1, 2] },
                SortStep::Done { array: vec![1, 2] },
            ]
        );
    }
}
