//! Frontier discipline lock tests.
//!
//! Proves:
//! 1. Stack pops last-in first
//! 2. Queue pops first-in first
//! 3. Priority pops minimum key first, insertion order among ties
//! 4. Duplicates are kept; no discipline deduplicates

use waypoint_search::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};

fn drain<F: Frontier<char>>(mut frontier: F) -> Vec<char> {
    std::iter::from_fn(|| frontier.pop()).collect()
}

#[test]
fn stack_pops_most_recent_first() {
    let mut stack = StackFrontier::new();
    for item in ['A', 'B', 'C'] {
        stack.push(item);
    }
    assert_eq!(stack.pop(), Some('C'));
    assert_eq!(stack.pop(), Some('B'));
    assert_eq!(drain(stack), vec!['A']);
}

#[test]
fn queue_pops_oldest_first() {
    let mut queue = QueueFrontier::new();
    for item in ['A', 'B', 'C'] {
        queue.push(item);
    }
    assert_eq!(queue.pop(), Some('A'));
    assert_eq!(queue.pop(), Some('B'));
    assert_eq!(drain(queue), vec!['C']);
}

#[test]
fn priority_pops_lowest_key_with_stable_ties() {
    let key = |c: &char| match c {
        'A' | 'D' => 2,
        'B' => 1,
        _ => 3,
    };
    let mut pq = PriorityFrontier::new(key);
    for item in ['A', 'B', 'C', 'D'] {
        pq.push(item);
    }
    assert_eq!(drain(pq), vec!['B', 'A', 'D', 'C']);
}

#[test]
fn every_discipline_keeps_duplicates() {
    let mut stack = StackFrontier::new();
    let mut queue = QueueFrontier::new();
    let mut pq = PriorityFrontier::new(|_: &char| 0);
    for item in ['X', 'X', 'Y', 'X'] {
        stack.push(item);
        queue.push(item);
        pq.push(item);
    }
    assert_eq!(stack.len(), 4);
    assert_eq!(queue.len(), 4);
    assert_eq!(pq.len(), 4);
    assert_eq!(drain(pq), vec!['X', 'X', 'Y', 'X']);
}

#[test]
fn empty_frontiers_pop_none() {
    assert_eq!(StackFrontier::<char>::new().pop(), None);
    assert_eq!(QueueFrontier::<char>::new().pop(), None);
    assert_eq!(PriorityFrontier::new(|_: &char| 0).pop(), None);
}
