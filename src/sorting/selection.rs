//! Selection sort
//!
//! Row `i` scans `i+1..n` for the minimum, comparing the current minimum
//! against every candidate. The minimum is swapped into place only when it
//! is not already there.

use super::SortStep;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Row,
    Scan,
    Finished,
}

/// Selection sort step iterator
#[derive(Debug, Clone)]
pub struct SelectionSteps {
    a: Vec<i64>,
    i: usize,
    j: usize,
    min_idx: usize,
    phase: Phase,
}

impl SelectionSteps {
    /// Start sorting a copy of `input`
    pub fn new(input: &[i64]) -> Self {
        Self {
            a: input.to_vec(),
            i: 0,
            j: 0,
            min_idx: 0,
            phase: Phase::Row,
        }
    }
}

impl Iterator for SelectionSteps {
    type Item = SortStep;

    fn next(&mut self) -> Option<SortStep> {
        let n = self.a.len();
        loop {
            match self.phase {
                Phase::Row => {
                    if self.i >= n {
                        self.phase = Phase::Finished;
                        return Some(SortStep::Done {
                            array: self.a.clone(),
                        });
                    }
                    self.min_idx = self.i;
                    self.j = self.i + 1;
                    self.phase = Phase::Scan;
                }
                Phase::Scan => {
                    if self.j < n {
                        let step = SortStep::Compare {
                            left: self.min_idx,
                            right: self.j,
                            array: self.a.clone(),
                        };
                        if self.a[self.j] < self.a[self.min_idx] {
                            self.min_idx = self.j;
                        }
                        self.j += 1;
                        return Some(step);
                    }

                    let row = self.i;
                    self.i += 1;
                    self.phase = Phase::Row;
                    if self.min_idx != row {
                        self.a.swap(row, self.min_idx);
                        return Some(SortStep::Swap {
                            left: row,
                            right: self.min_idx,
                            array: self.a.clone(),
                        });
                    }
                }
                Phase::Finished => return None,
            }
        }
    }
}
