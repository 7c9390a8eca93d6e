//! Fixed-capacity FIFO and LIFO containers
//!
//! Both containers refuse new items once `max_size` is reached and report
//! the refusal as `false` instead of growing. Removing from an empty
//! container yields `None`.

mod queue;
mod stack;

pub use queue::BoundedQueue;
pub use stack::BoundedStack;
