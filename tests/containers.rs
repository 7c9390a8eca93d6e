use std::collections::VecDeque;

use algoscope::containers::{BoundedQueue, BoundedStack};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u8),
    Remove,
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(
        prop_oneof![any::<u8>().prop_map(Op::Insert), Just(Op::Remove)],
        0..60,
    )
}

proptest! {
    #[test]
    fn queue_is_bounded_fifo(capacity in 1usize..6, ops in ops()) {
        let mut queue = BoundedQueue::new(capacity);
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                Op::Insert(v) => {
                    let accepted = model.len() < capacity;
                    if accepted {
                        model.push_back(v);
                    }
                    prop_assert_eq!(queue.enqueue(v), accepted);
                }
                Op::Remove => prop_assert_eq!(queue.dequeue(), model.pop_front()),
            }
            prop_assert!(queue.len() <= capacity);
            prop_assert_eq!(queue.is_full(), model.len() == capacity);
            prop_assert!(queue.iter().eq(model.iter()));
        }
    }

    #[test]
    fn stack_is_bounded_lifo(capacity in 1usize..6, ops in ops()) {
        let mut stack = BoundedStack::new(capacity);
        let mut model = Vec::new();
        for op in ops {
            match op {
                Op::Insert(v) => {
                    let accepted = model.len() < capacity;
                    if accepted {
                        model.push(v);
                    }
                    prop_assert_eq!(stack.push(v), accepted);
                }
                Op::Remove => prop_assert_eq!(stack.pop(), model.pop()),
            }
            prop_assert!(stack.len() <= capacity);
            prop_assert_eq!(stack.peek(), model.last());
        }
    }
}

#[test]
fn stack_capacity_two_scenario() {
    let mut stack: BoundedStack = BoundedStack::new(2);
    assert!(stack.push("a".to_string()));
    assert!(stack.push("b".to_string()));
    assert!(!stack.push("c".to_string()));
    assert_eq!(stack.pop().as_deref(), Some("b"));
    assert_eq!(stack.pop().as_deref(), Some("a"));
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn queue_clear_then_reuse() {
    let mut queue: BoundedQueue = BoundedQueue::new(1);
    assert!(queue.enqueue("x".to_string()));
    assert!(queue.is_full());
    queue.clear();
    assert!(queue.is_empty());
    assert!(queue.enqueue("y".to_string()));
    assert_eq!(queue.peek().map(String::as_str), Some("y"));
}

#[test]
fn unbounded_capacity_accepts_items() {
    let mut queue: BoundedQueue = BoundedQueue::new(usize::MAX);
    let mut stack: BoundedStack = BoundedStack::new(usize::MAX);
    assert!(queue.enqueue("a".to_string()));
    assert!(stack.push("a".to_string()));
    assert_eq!(queue.len(), 1);
    assert_eq!(stack.peek().map(String::as_str), Some("a"));
}
