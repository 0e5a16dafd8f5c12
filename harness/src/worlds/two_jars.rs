//! `TwoJars`: the classic water-jugs puzzle.
//!
//! Two jars with capacities `capacity_a` and `capacity_b` (4 and 3 by
//! default) start empty. A jar can be filled from the tap, emptied onto the
//! ground, or poured into the other jar until the source is empty or the
//! destination is full. Goal: jar A holds exactly `target` (2 by default).
//!
//! Every move costs 1.

use waypoint_search::contract::{
    cost_of_sequence_by_replay, expand_factored, FactoredProblem, SearchProblem, Successor,
};

/// Water volumes of both jars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JarsState {
    pub a: u32,
    pub b: u32,
}

impl JarsState {
    #[must_use]
    pub const fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }
}

impl std::fmt::Display for JarsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "jar A holds {}, jar B holds {}", self.a, self.b)
    }
}

/// A jar move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JarMove {
    FillA,
    EmptyA,
    PourAIntoB,
    FillB,
    EmptyB,
    PourBIntoA,
}

impl JarMove {
    /// Every move, in expansion order.
    pub const ALL: [JarMove; 6] = [
        JarMove::FillA,
        JarMove::EmptyA,
        JarMove::PourAIntoB,
        JarMove::FillB,
        JarMove::EmptyB,
        JarMove::PourBIntoA,
    ];
}

/// Two-jars problem instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoJars {
    pub capacity_a: u32,
    pub capacity_b: u32,
    pub target: u32,
    pub start: JarsState,
}

impl Default for TwoJars {
    fn default() -> Self {
        Self {
            capacity_a: 4,
            capacity_b: 3,
            target: 2,
            start: JarsState::new(0, 0),
        }
    }
}

impl TwoJars {
    /// Instance with the default capacities starting at `start`.
    ///
    /// Volumes above a jar's capacity are clamped to it.
    #[must_use]
    pub fn starting_at(start: JarsState) -> Self {
        let base = Self::default();
        Self {
            start: JarsState::new(start.a.min(base.capacity_a), start.b.min(base.capacity_b)),
            ..base
        }
    }

    /// Whether `mv` is legal at `state`.
    #[must_use]
    pub fn is_legal(&self, state: JarsState, mv: JarMove) -> bool {
        match mv {
            JarMove::FillA => state.a < self.capacity_a,
            JarMove::EmptyA => state.a > 0,
            JarMove::PourAIntoB => state.a > 0 && state.b < self.capacity_b,
            JarMove::FillB => state.b < self.capacity_b,
            JarMove::EmptyB => state.b > 0,
            JarMove::PourBIntoA => state.b > 0 && state.a < self.capacity_a,
        }
    }

    /// The state after `mv`. Does not check legality.
    #[must_use]
    pub fn apply(&self, state: JarsState, mv: JarMove) -> JarsState {
        match mv {
            JarMove::FillA => JarsState::new(self.capacity_a, state.b),
            JarMove::EmptyA => JarsState::new(0, state.b),
            JarMove::PourAIntoB => {
                let poured = state.a.min(self.capacity_b.saturating_sub(state.b));
                JarsState::new(state.a - poured, state.b + poured)
            }
            JarMove::FillB => JarsState::new(state.a, self.capacity_b),
            JarMove::EmptyB => JarsState::new(state.a, 0),
            JarMove::PourBIntoA => {
                let poured = state.b.min(self.capacity_a.saturating_sub(state.a));
                JarsState::new(state.a + poured, state.b - poured)
            }
        }
    }
}

impl SearchProblem for TwoJars {
    type State = JarsState;
    type Action = JarMove;

    fn start_state(&self) -> JarsState {
        self.start
    }

    fn is_goal(&self, state: &JarsState) -> bool {
        state.a == self.target
    }

    fn expand(&self, state: &JarsState) -> Vec<Successor<JarsState, JarMove>> {
        expand_factored(self, state)
    }

    fn cost_of_action_sequence(&self, actions: &[JarMove]) -> Option<u64> {
        cost_of_sequence_by_replay(self, actions)
    }
}

impl FactoredProblem for TwoJars {
    fn actions(&self, state: &JarsState) -> Vec<JarMove> {
        JarMove::ALL
            .into_iter()
            .filter(|mv| self.is_legal(*state, *mv))
            .collect()
    }

    fn next_state(&self, state: &JarsState, action: &JarMove) -> JarsState {
        self.apply(*state, *action)
    }

    fn action_cost(&self, _state: &JarsState, _action: &JarMove, _next: &JarsState) -> u64 {
        1
    }
}
