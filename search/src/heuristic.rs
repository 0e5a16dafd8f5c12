//! Heuristic functions: estimates of remaining cost to the nearest goal.
//!
//! Greedy and A* read a heuristic; the other strategies ignore it.
//!
//! # Caller responsibility
//!
//! The engine does graph search (explored-set pruning), so A* is only
//! guaranteed optimal for *consistent* heuristics:
//! `h(s) <= cost(s, a, s') + h(s')` on every edge, and `h(goal) == 0`.
//! An admissible but inconsistent heuristic can make A* return a
//! suboptimal plan here. An overestimating heuristic can too. Neither is
//! detected at runtime.

use crate::contract::SearchProblem;

/// Trait for heuristics over a problem's states.
pub trait Heuristic<P: SearchProblem + ?Sized> {
    /// Estimated cost from `state` to the nearest goal.
    fn estimate(&self, state: &P::State, problem: &P) -> u64;
}

/// The zero heuristic. Always consistent; reduces A* to uniform-cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P: SearchProblem + ?Sized> Heuristic<P> for NullHeuristic {
    fn estimate(&self, _state: &P::State, _problem: &P) -> u64 {
        0
    }
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem + ?Sized,
    F: Fn(&P::State, &P) -> u64,
{
    fn estimate(&self, state: &P::State, problem: &P) -> u64 {
        self(state, problem)
    }
}
