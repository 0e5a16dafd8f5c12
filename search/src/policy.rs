//! Search policy types.

use crate::error::SearchError;

/// Budget and recording configuration for one search call.
///
/// The base contract has no budget: a search runs until it reaches a goal
/// or exhausts its frontier. Budgets are an opt-in bound observed by the
/// loop, and hitting one is reported as its own termination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Cap on node expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
    /// Cap on nodes created, root included (`None` = unbounded).
    pub max_nodes: Option<u64>,
    /// Record an expansion-by-expansion [`crate::trace::SearchTrace`].
    pub record_trace: bool,
}

impl SearchPolicy {
    /// Unbounded policy that records the trace.
    #[must_use]
    pub fn traced() -> Self {
        Self {
            record_trace: true,
            ..Self::default()
        }
    }

    /// Validate budgets before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if a budget is zero. A zero
    /// expansion budget could never expand the root; a zero node budget
    /// could never create it.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_nodes == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_nodes must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// JSON echo of the policy, embedded in traces and run reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_expansions": self.max_expansions,
            "max_nodes": self.max_nodes,
            "record_trace": self.record_trace,
        })
    }
}
