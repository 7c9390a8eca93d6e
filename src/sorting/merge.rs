//! Bottom-up merge sort
//!
//! Runs of width `curr_size` (1, 2, 4, ...) are merged pairwise from left
//! to right. Window bounds are clamped to the last index:
//!
//! ```text
//! mid       = min(left_start + curr_size - 1,     n - 1)
//! right_end = min(left_start + 2 * curr_size - 1, n - 1)
//! ```
//!
//! Windows start while `left_start < n - 1`. A merge emits `Merge`, one
//! `Compare` per element placed by comparing the two run fronts (ties take
//! the left run), then `Merged` once the buffer is written back. Elements
//! drained after one run is exhausted are not compared.

use super::SortStep;

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Open the window at `left_start`, or move to the next width
    Window,
    /// Compare run fronts `i` and `j`
    Compare,
    Finished,
}

/// Bottom-up merge sort step iterator
#[derive(Debug, Clone)]
pub struct MergeSteps {
    a: Vec<i64>,
    curr_size: usize,
    left_start: usize,
    mid: usize,
    right_end: usize,
    i: usize,
    j: usize,
    buffer: Vec<i64>,
    phase: Phase,
}

impl MergeSteps {
    /// Start sorting a copy of `input`
    pub fn new(input: &[i64]) -> Self {
        Self {
            a: input.to_vec(),
            curr_size: 1,
            left_start: 0,
            mid: 0,
            right_end: 0,
            i: 0,
            j: 0,
            buffer: Vec::with_capacity(input.len()),
            phase: Phase::Window,
        }
    }

    fn write_back(&mut self) {
        self.buffer.extend_from_slice(&self.a[self.i..=self.mid]);
        if self.j <= self.right_end {
            self.buffer.extend_from_slice(&self.a[self.j..=self.right_end]);
        }
        let start = self.left_start;
        self.a[start..start + self.buffer.len()].copy_from_slice(&self.buffer);
        self.buffer.clear();
    }
}

impl Iterator for MergeSteps {
    type Item = SortStep;

    fn next(&mut self) -> Option<SortStep> {
        let n = self.a.len();
        loop {
            match self.phase {
                Phase::Window => {
                    if self.curr_size >= n {
                        self.phase = Phase::Finished;
                        return Some(SortStep::Done {
                            array: self.a.clone(),
                        });
                    }
                    // n >= 2 here since curr_size >= 1
                    if self.left_start >= n - 1 {
                        self.curr_size *= 2;
                        self.left_start = 0;
                        continue;
                    }
                    let last = n - 1;
                    self.mid = (self.left_start + self.curr_size - 1).min(last);
                    self.right_end = (self.left_start + 2 * self.curr_size - 1).min(last);
                    self.i = self.left_start;
                    self.j = self.mid + 1;
                    self.phase = Phase::Compare;
                    return Some(SortStep::Merge {
                        left_start: self.left_start,
                        mid: self.mid,
                        right_end: self.right_end,
                        array: self.a.clone(),
                    });
                }
                Phase::Compare => {
                    if self.i <= self.mid && self.j <= self.right_end {
                        let step = SortStep::Compare {
                            left: self.i,
                            right: self.j,
                            array: self.a.clone(),
                        };
                        if self.a[self.i] <= self.a[self.j] {
                            self.buffer.push(self.a[self.i]);
                            self.i += 1;
                        } else {
                            self.buffer.push(self.a[self.j]);
                            self.j += 1;
                        }
                        return Some(step);
                    }

                    self.write_back();
                    let step = SortStep::Merged {
                        left_start: self.left_start,
                        right_end: self.right_end,
                        array: self.a.clone(),
                    };
                    self.left_start += 2 * self.curr_size;
                    self.phase = Phase::Window;
                    return Some(step);
                }
                Phase::Finished => return None,
            }
        }
    }
}
