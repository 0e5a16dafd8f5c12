//! `WeightedGraph`: an explicit directed graph with per-edge costs.
//!
//! Nodes are `u32` ids. An optional per-node estimate table serves as the
//! heuristic ([`EstimateTable`]); [`WeightedGraph::is_consistent`] checks it
//! against every edge, and [`WeightedGraph::optimal_cost`] computes the true
//! optimum independently of the engine.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use waypoint_search::contract::{
    cost_of_sequence_by_replay, expand_factored, FactoredProblem, SearchProblem, Successor,
};
use waypoint_search::heuristic::Heuristic;

/// A directed edge, used as the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub from: u32,
    pub to: u32,
}

/// Explicit graph problem.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeightedGraph {
    adjacency: BTreeMap<u32, Vec<(u32, u64)>>,
    start: u32,
    goals: BTreeSet<u32>,
    estimates: BTreeMap<u32, u64>,
}

impl WeightedGraph {
    #[must_use]
    pub fn new(start: u32, goals: impl IntoIterator<Item = u32>) -> Self {
        Self {
            start,
            goals: goals.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Add `from -> to` with `cost`, replacing any existing edge between them.
    ///
    /// Edges out of a node are expanded in insertion order.
    #[must_use]
    pub fn with_edge(mut self, from: u32, to: u32, cost: u64) -> Self {
        self.add_edge(from, to, cost);
        self
    }

    pub fn add_edge(&mut self, from: u32, to: u32, cost: u64) {
        let out = self.adjacency.entry(from).or_default();
        if let Some(existing) = out.iter_mut().find(|(t, _)| *t == to) {
            existing.1 = cost;
        } else {
            out.push((to, cost));
        }
    }

    /// Set the heuristic estimate for `node`.
    #[must_use]
    pub fn with_estimate(mut self, node: u32, estimate: u64) -> Self {
        self.estimates.insert(node, estimate);
        self
    }

    /// The estimate for `node` (0 when unset).
    #[must_use]
    pub fn estimate(&self, node: u32) -> u64 {
        self.estimates.get(&node).copied().unwrap_or(0)
    }

    /// Outgoing `(to, cost)` pairs of `node`.
    #[must_use]
    pub fn edges_from(&self, node: u32) -> &[(u32, u64)] {
        self.adjacency.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Whether the estimate table is consistent: zero at every goal and
    /// `h(u) <= cost(u, v) + h(v)` on every edge.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.goals.iter().all(|g| self.estimate(*g) == 0)
            && self.adjacency.iter().all(|(from, out)| {
                out.iter().all(|(to, cost)| {
                    self.estimate(*from) <= cost.saturating_add(self.estimate(*to))
                })
            })
    }

    /// Minimum start-to-goal cost, computed with Dijkstra's algorithm
    /// directly on the adjacency lists (no engine involved).
    #[must_use]
    pub fn optimal_cost(&self) -> Option<u64> {
        let mut best: BTreeMap<u32, u64> = BTreeMap::new();
        let mut heap = BinaryHeap::new();
        best.insert(self.start, 0);
        heap.push(Reverse((0u64, self.start)));

        while let Some(Reverse((cost, node))) = heap.pop() {
            if self.goals.contains(&node) {
                return Some(cost);
            }
            if best.get(&node).is_some_and(|b| *b < cost) {
                continue;
            }
            for (to, step) in self.edges_from(node) {
                let next = cost.saturating_add(*step);
                if best.get(to).is_none_or(|b| next < *b) {
                    best.insert(*to, next);
                    heap.push(Reverse((next, *to)));
                }
            }
        }
        None
    }
}

impl SearchProblem for WeightedGraph {
    type State = u32;
    type Action = Edge;

    fn start_state(&self) -> u32 {
        self.start
    }

    fn is_goal(&self, state: &u32) -> bool {
        self.goals.contains(state)
    }

    fn expand(&self, state: &u32) -> Vec<Successor<u32, Edge>> {
        expand_factored(self, state)
    }

    fn cost_of_action_sequence(&self, actions: &[Edge]) -> Option<u64> {
        cost_of_sequence_by_replay(self, actions)
    }
}

impl FactoredProblem for WeightedGraph {
    fn actions(&self, state: &u32) -> Vec<Edge> {
        self.edges_from(*state)
            .iter()
            .map(|(to, _)| Edge {
                from: *state,
                to: *to,
            })
            .collect()
    }

    fn next_state(&self, _state: &u32, action: &Edge) -> u32 {
        action.to
    }

    fn action_cost(&self, state: &u32, action: &Edge, _next: &u32) -> u64 {
        self.edges_from(*state)
            .iter()
            .find(|(to, _)| *to == action.to)
            .map_or(u64::MAX, |(_, cost)| *cost)
    }
}

/// Heuristic reading the graph's own estimate table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimateTable;

impl Heuristic<WeightedGraph> for EstimateTable {
    fn estimate(&self, state: &u32, problem: &WeightedGraph) -> u64 {
        problem.estimate(*state)
    }
}
