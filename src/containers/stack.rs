//! Bounded LIFO stack

use tracing::trace;

/// LIFO stack holding at most `max_size` items
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct BoundedStack<T = String> {
    items: Vec<T>,
    max_size: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack with a fixed capacity
    ///
    /// `max_size` is a logical bound only; storage grows as items arrive.
    pub fn new(max_size: usize) -> Self {
        Self {
            items: Vec::new(),
            max_size,
        }
    }

    /// Push `item` on top. Returns `false` when the stack is full.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            trace!(max_size = self.max_size, "push rejected: stack full");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove and return the top item
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Top item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
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

    /// Items from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
