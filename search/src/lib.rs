//! Waypoint Search: a domain-agnostic state-space search engine.
//!
//! A problem implements [`SearchProblem`] (start state, goal test,
//! successor expansion, plan cost) and the engine returns a sequence of
//! actions from the start state to a goal. One graph-search loop drives
//! five strategies that differ only in frontier discipline and evaluation
//! function.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_search  ←  waypoint_harness
//! (engine)            (reference worlds, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`] / [`FactoredProblem`]: the domain contract
//! - [`SearchTree`]: arena of immutable, parent-linked nodes
//! - [`Frontier`]: stack, queue, or evaluation-ordered priority queue
//! - [`Strategy`]: depth-first, breadth-first, uniform-cost, greedy, A*
//! - [`Heuristic`]: remaining-cost estimate for greedy and A*
//! - [`SearchPolicy`]: optional budgets and trace recording
//! - [`SearchResult`] / [`SearchTrace`]: outcome and audit trail
//!
//! [`SearchProblem`]: contract::SearchProblem
//! [`FactoredProblem`]: contract::FactoredProblem
//! [`SearchTree`]: node::SearchTree
//! [`Frontier`]: frontier::Frontier
//! [`Strategy`]: strategy::Strategy
//! [`Heuristic`]: heuristic::Heuristic
//! [`SearchPolicy`]: policy::SearchPolicy
//! [`SearchResult`]: search::SearchResult
//! [`SearchTrace`]: trace::SearchTrace

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod search;
pub mod strategy;
pub mod trace;
