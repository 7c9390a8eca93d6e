//! Quicksort with Lomuto partitioning
//!
//! The rightmost element of each range is the pivot. Every other element
//! is compared with it; elements smaller than the pivot are swapped down
//! to the boundary `i`, and finally the pivot is swapped into `i`. The left
//! part is sorted completely before the right part, as with the recursive
//! formulation; pending ranges live on an explicit stack.

use super::SortStep;

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Pop the next range to partition
    Range,
    /// Compare element `j` with the pivot
    Scan,
    /// Element `j` was compared; move it below the boundary if smaller
    Place,
    Finished,
}

/// Quicksort step iterator
#[derive(Debug, Clone)]
pub struct QuickSteps {
    a: Vec<i64>,
    /// Pending inclusive ranges, top is partitioned next
    pending: Vec<(usize, usize)>,
    lo: usize,
    hi: usize,
    pivot: i64,
    /// Boundary: everything in `lo..i` is smaller than the pivot
    i: usize,
    j: usize,
    phase: Phase,
}

impl QuickSteps {
    /// Start sorting a copy of `input`
    pub fn new(input: &[i64]) -> Self {
        let mut pending = Vec::new();
        if input.len() > 1 {
            pending.push((0, input.len() - 1));
        }
        Self {
            a: input.to_vec(),
            pending,
            lo: 0,
            hi: 0,
            pivot: 0,
            i: 0,
            j: 0,
            phase: Phase::Range,
        }
    }
}

impl Iterator for QuickSteps {
    type Item = SortStep;

    fn next(&mut self) -> Option<SortStep> {
        loop {
            match self.phase {
                Phase::Range => {
                    let Some((lo, hi)) = self.pending.pop() else {
                        self.phase = Phase::Finished;
                        return Some(SortStep::Done {
                            array: self.a.clone(),
                        });
                    };
                    self.lo = lo;
                    self.hi = hi;
                    self.pivot = self.a[hi];
                    self.i = lo;
                    self.j = lo;
                    self.phase = Phase::Scan;
                }
                Phase::Scan => {
                    if self.j < self.hi {
                        self.phase = Phase::Place;
                        return Some(SortStep::Compare {
                            left: self.j,
                            right: self.hi,
                            array: self.a.clone(),
                        });
                    }

                    let (lo, hi, i) = (self.lo, self.hi, self.i);
                    self.a.swap(i, hi);
                    // Right part goes underneath so the left part is done first.
                    if i + 1 < hi {
                        self.pending.push((i + 1, hi));
                    }
                    if i > lo + 1 {
                        self.pending.push((lo, i - 1));
                    }
                    self.phase = Phase::Range;
                    return Some(SortStep::Swap {
                        left: i,
                        right: hi,
                        array: self.a.clone(),
                    });
                }
                Phase::Place => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Scan;
                    if self.a[j] < self.pivot {
                        let i = self.i;
                        self.a.swap(i, j);
                        self.i += 1;
                        return Some(SortStep::Swap {
                            left: i,
                            right: j,
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
    fn test_partition_trace() {
        let steps: Vec<SortStep> = QuickSteps::new(&[3, 1, 2]).collect();
        assert_eq!(
            steps,
            vec![
                SortStep::Compare { left: 0, right: 2, array: vec![3, 1, 2] },
                SortStep::Compare { left: 1, right: 2, array: vec![3, 1, 2] },
                SortStep::Swap { left: 0, right: 1, array: vec![1, 3, 2] },
                SortStep::Swap { left: 1, right: 2, array: vec![1, 2, 3] },
                SortStep::Done { array: vec![1, 2, 3] },
            ]
        );
    }

    #[test]
    fn test_left_partition_before_right() {
        // Pivot 4 lands in the middle; the left range [0, 2] must be
        // partitioned (pivot index 2) before the right range [4, 6].
        let input = [3, 1, 2, 7, 6, 5, 4];
        let mut pivots: Vec<usize> = QuickSteps::new(&input)
            .filter_map(|step| match step {
                SortStep::Compare { right, .. } => Some(right),
                _ => None,
            })
            .collect();
        pivots.dedup();
        assert_eq!(pivots, vec![6, 2, 6, 5]);
    }

    #[test]
    fn test_self_swaps_are_recorded() {
        // Every element is smaller than the pivot, so each swap is i == j.
        let swaps: Vec<(usize, usize)> = QuickSteps::new(&[1, 2, 3])
            .filter_map(|step| match step {
                SortStep::Swap { left, right, .. } => Some((left, right)),
                _ => None,
            })
            .collect();
        assert_eq!(swaps, vec![(0, 0), (1, 1), (2, 2), (0, 0), (1, 1)]);
    }
}
