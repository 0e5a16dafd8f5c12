//! Search outcome types and the optional expansion audit trace.
//!
//! The trace is an ordered log of frontier pops that were expanded. It
//! records ids and costs only; states and actions never appear in it, so
//! any problem can be traced.

use sha2::{Digest, Sha256};

use crate::strategy::Strategy;

/// Domain prefix for trace digests.
pub const DOMAIN_SEARCH_TRACE: &[u8] = b"WAYPOINT::SEARCH_TRACE::V1\0";

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A goal node was popped.
    GoalReached { node_id: u64 },
    /// Frontier emptied without finding a goal: no plan exists.
    FrontierExhausted,
    /// `max_expansions` was hit before the search finished.
    ExpansionBudgetExceeded,
    /// `max_nodes` was hit before the search finished.
    NodeBudgetExceeded,
}

impl Termination {
    #[must_use]
    pub fn is_goal_reached(self) -> bool {
        matches!(self, Self::GoalReached { .. })
    }

    /// Whether a budget cut the search short (the answer is unknown).
    #[must_use]
    pub fn is_budget_exceeded(self) -> bool {
        matches!(
            self,
            Self::ExpansionBudgetExceeded | Self::NodeBudgetExceeded
        )
    }

    fn to_json_value(self) -> serde_json::Value {
        match self {
            Self::GoalReached { node_id } => {
                serde_json::json!({"node_id": node_id, "type": "goal_reached"})
            }
            Self::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
            Self::ExpansionBudgetExceeded => {
                serde_json::json!({"type": "expansion_budget_exceeded"})
            }
            Self::NodeBudgetExceeded => serde_json::json!({"type": "node_budget_exceeded"}),
        }
    }
}

/// Aggregate counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expansions: u64,
    /// Nodes created, root included.
    pub nodes_generated: u64,
    /// Pops dropped because their state was already explored.
    pub stale_pops: u64,
    /// Largest frontier size seen.
    pub frontier_high_water: u64,
    /// Final explored-set size.
    pub explored: u64,
}

impl SearchStats {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions,
            "explored": self.explored,
            "frontier_high_water": self.frontier_high_water,
            "nodes_generated": self.nodes_generated,
            "stale_pops": self.stale_pops,
        })
    }
}

/// One pop-and-expand step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of expansions.
    pub expansion_order: u64,
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub depth: u32,
    pub path_cost: u64,
    pub h_cost: u64,
    /// The evaluation-function value the node was popped with
    /// (`None` for stack and queue disciplines).
    pub pop_key: Option<u64>,
    /// Ids of the children pushed by this expansion.
    pub children: Vec<u64>,
}

/// The complete audit trail of a traced run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTrace {
    pub strategy: Strategy,
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEvent>,
    pub termination: Termination,
    pub stats: SearchStats,
}

impl SearchTrace {
    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "stats": self.stats.to_json_value(),
            "strategy": self.strategy.as_str(),
            "termination": self.termination.to_json_value(),
        })
    }

    /// Serialize the trace to canonical JSON bytes.
    ///
    /// Object keys come out sorted and the output is compact; every number
    /// in the trace is an integer, so the bytes are stable across platforms.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// Content digest of the canonical bytes: `"sha256:<hex>"`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SEARCH_TRACE);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "children": e.children,
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "h_cost": e.h_cost,
        "node_id": e.node_id,
        "parent_id": e.parent_id,
        "path_cost": e.path_cost,
        "pop_key": e.pop_key,
    })
}
