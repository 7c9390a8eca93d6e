//! Bounded FIFO queue

use std::collections::VecDeque;

use tracing::trace;

/// FIFO queue holding at most `max_size` items
///
/// Items enter at the rear and leave from the front.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct BoundedQueue<T = String> {
    items: VecDeque<T>,
    max_size: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue with a fixed capacity
    ///
    /// `max_size` is a logical bound only; storage grows as items arrive.
    pub fn new(max_size: usize) -> Self {
        Self {
            items: VecDeque::new(),
            max_size,
        }
    }

    /// Append `item` at the rear. Returns `false` when the queue is full.
    pub fn enqueue(&mut self, item: T) -> bool {
        if self.is_full() {
            trace!(max_size = self.max_size, "enqueue rejected: queue full");
            return false;
        }
        self.items.push_back(item);
        true
    }

    /// Remove and return the front item
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Front item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// True when no items are stored
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when `len() >= max_size`
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_size
    }

    /// Drop every stored item; capacity is unchanged
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Fixed capacity
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Items from front to rear
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
