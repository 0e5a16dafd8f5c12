//! The five search strategies and what each one means for the generic loop.

use crate::node::NodeRef;

/// A named instantiation of the generic search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    Greedy,
    AStar,
}

/// Frontier discipline a strategy runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Lifo,
    Fifo,
    Priority(Evaluation),
}

/// Evaluation function of a priority-ordered strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// `f(n) = g(n)`
    PathCost,
    /// `f(n) = h(n)`
    Heuristic,
    /// `f(n) = g(n) + h(n)`
    PathCostPlusHeuristic,
}

impl Evaluation {
    /// Apply this evaluation function to a frontier handle.
    #[must_use]
    pub fn eval(self, node: &NodeRef) -> u64 {
        match self {
            Self::PathCost => node.path_cost,
            Self::Heuristic => node.h_cost,
            Self::PathCostPlusHeuristic => node.f_cost(),
        }
    }
}

/// What a strategy guarantees about the returned plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optimality {
    /// Any plan to a goal.
    None,
    /// Fewest actions; optimal cost only if all step costs are equal.
    UnitCost,
    /// Minimum cost for any non-negative step costs.
    Optimal,
    /// Minimum cost if the heuristic is consistent.
    OptimalIfConsistent,
}

impl Strategy {
    /// All strategies, in a fixed order.
    pub const ALL: [Strategy; 5] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    #[must_use]
    pub fn discipline(self) -> Discipline {
        match self {
            Self::DepthFirst => Discipline::Lifo,
            Self::BreadthFirst => Discipline::Fifo,
            Self::UniformCost => Discipline::Priority(Evaluation::PathCost),
            Self::Greedy => Discipline::Priority(Evaluation::Heuristic),
            Self::AStar => Discipline::Priority(Evaluation::PathCostPlusHeuristic),
        }
    }

    /// Whether the heuristic is consulted at all.
    #[must_use]
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Self::Greedy | Self::AStar)
    }

    #[must_use]
    pub fn optimality(self) -> Optimality {
        match self {
            Self::DepthFirst | Self::Greedy => Optimality::None,
            Self::BreadthFirst => Optimality::UnitCost,
            Self::UniformCost => Optimality::Optimal,
            Self::AStar => Optimality::OptimalIfConsistent,
        }
    }

    /// Stable short name, used in logs and serialized traces.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
        }
    }

    /// Inverse of [`Strategy::as_str`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
