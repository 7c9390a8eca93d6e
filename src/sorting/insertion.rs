//! Insertion sort
//!
//! For every `i` from 1 the key `a[i]` is lifted out (`Key`), larger
//! elements to its left are shifted one slot right (`Compare` then
//! `Shift` per element) and the key is dropped into the hole (`Insert`).

use super::SortStep;

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Pick up the key at `i`
    Outer,
    /// Compare the element left of the hole with the key
    Scan,
    /// Shift the compared element into the hole
    Shift,
    Finished,
}

/// Insertion sort step iterator
#[derive(Debug, Clone)]
pub struct InsertionSteps {
    a: Vec<i64>,
    i: usize,
    /// Current hole; the key belongs here if nothing left of it is larger
    hole: usize,
    key: i64,
    phase: Phase,
}

impl InsertionSteps {
    /// Start sorting a copy of `input`
    pub fn new(input: &[i64]) -> Self {
        Self {
            a: input.to_vec(),
            i: 1,
            hole: 0,
            key: 0,
            phase: Phase::Outer,
        }
    }
}

impl Iterator for InsertionSteps {
    type Item = SortStep;

    fn next(&mut self) -> Option<SortStep> {
        match self.phase {
            Phase::Outer => {
                if self.i >= self.a.len() {
                    self.phase = Phase::Finished;
                    return Some(SortStep::Done {
                        array: self.a.clone(),
                    });
                }
                self.key = self.a[self.i];
                self.hole = self.i;
                self.phase = Phase::Scan;
                Some(SortStep::Key {
                    index: self.i,
                    array: self.a.clone(),
                })
            }
            Phase::Scan => {
                let j = self.hole;
                if j > 0 && self.a[j - 1] > self.key {
                    self.phase = Phase::Shift;
                    return Some(SortStep::Compare {
                        left: j - 1,
                        right: j,
                        array: self.a.clone(),
                    });
                }
                self.a[j] = self.key;
                self.i += 1;
                self.phase = Phase::Outer;
                Some(SortStep::Insert {
                    index: j,
                    array: self.a.clone(),
                })
            }
            Phase::Shift => {
                let j = self.hole;
                self.a[j] = self.a[j - 1];
                self.hole -= 1;
                self.phase = Phase::Scan;
                Some(SortStep::Shift {
                    index: j,
                    array: self.a.clone(),
                })
            }
            Phase::Finished => None,
        }
    }
}
