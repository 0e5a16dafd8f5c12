//! Harness runner: executes a search and validates the plan it returns.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → search() / search_verified()
//!   → replay(plan) → is_goal(final) → cost checks → RunReport
//! ```
//!
//! A plan that fails validation means the problem or the engine is broken;
//! the runner reports it as an error instead of returning the plan.

use log::{debug, warn};

use waypoint_search::contract::{replay, ContractViolation, FactoredProblem};
use waypoint_search::error::SearchError;
use waypoint_search::heuristic::Heuristic;
use waypoint_search::policy::SearchPolicy;
use waypoint_search::search::{search, search_verified, SearchResult};
use waypoint_search::strategy::Strategy;
use waypoint_search::trace::{SearchStats, Termination};

/// Per-run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub strategy: Strategy,
    pub policy: SearchPolicy,
    /// Check every expansion against the problem's factored accessors.
    pub verify_expansions: bool,
}

impl RunConfig {
    /// Unbounded, untraced, unverified run of `strategy`.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            policy: SearchPolicy::default(),
            verify_expansions: false,
        }
    }

    #[must_use]
    pub fn traced(mut self) -> Self {
        self.policy.record_trace = true;
        self
    }

    #[must_use]
    pub fn verified(mut self) -> Self {
        self.verify_expansions = true;
        self
    }
}

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The search itself failed (bad policy or contract violation).
    Search(SearchError),
    /// Replaying the returned plan hit an illegal action.
    Replay(ContractViolation),
    /// The plan replays to a state that is not a goal.
    NotAGoal { final_state: String },
    /// Replayed cost or `cost_of_action_sequence` disagrees with the
    /// goal node's path cost.
    CostMismatch {
        path_cost: u64,
        replayed_cost: u64,
        sequence_cost: Option<u64>,
    },
    /// Trace serialization failed.
    TraceFailed { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::Replay(v) => write!(f, "plan replay failed: {v}"),
            Self::NotAGoal { final_state } => {
                write!(f, "plan ends at non-goal state {final_state}")
            }
            Self::CostMismatch {
                path_cost,
                replayed_cost,
                sequence_cost,
            } => write!(
                f,
                "cost mismatch: path_cost={path_cost}, replayed={replayed_cost}, sequence={sequence_cost:?}"
            ),
            Self::TraceFailed { detail } => write!(f, "trace serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// A search result paired with its validated report.
pub type RunResult<S, A> = Result<(SearchResult<S, A>, RunReport), RunError>;

/// Summary of one validated run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub strategy: Strategy,
    pub termination: Termination,
    /// Number of actions in the plan (if a goal was reached).
    pub plan_len: Option<usize>,
    pub path_cost: Option<u64>,
    pub stats: SearchStats,
    /// Digest of the expansion trace (if it was recorded).
    pub trace_digest: Option<String>,
    pub policy: SearchPolicy,
}

impl RunReport {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "path_cost": self.path_cost,
            "plan_len": self.plan_len,
            "policy": self.policy.to_json_value(),
            "reached_goal": self.termination.is_goal_reached(),
            "stats": self.stats.to_json_value(),
            "strategy": self.strategy.as_str(),
            "termination": termination_str(self.termination),
            "trace_digest": self.trace_digest,
        })
    }
}

fn termination_str(t: Termination) -> &'static str {
    match t {
        Termination::GoalReached { .. } => "goal_reached",
        Termination::FrontierExhausted => "frontier_exhausted",
        Termination::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        Termination::NodeBudgetExceeded => "node_budget_exceeded",
    }
}

/// Run one search on `problem` and validate the result.
///
/// # Errors
///
/// Returns [`RunError`] if the search fails or if the returned plan does
/// not replay to a goal at the reported cost.
pub fn run<P, H>(
    problem: &P,
    heuristic: &H,
    config: &RunConfig,
) -> RunResult<P::State, P::Action>
where
    P: FactoredProblem,
    P::Action: PartialEq,
    H: Heuristic<P>,
{
    let result = if config.verify_expansions {
        search_verified(problem, config.strategy, heuristic, &config.policy)?
    } else {
        search(problem, config.strategy, heuristic, &config.policy)?
    };

    if let (Some(plan), Some(path_cost)) = (&result.plan, result.path_cost()) {
        validate_plan(problem, plan, path_cost)?;
    } else {
        debug!(
            "{}: no plan ({:?}) after {} expansions",
            config.strategy, result.termination, result.stats.expansions
        );
    }

    let trace_digest = result
        .trace
        .as_ref()
        .map(waypoint_search::trace::SearchTrace::digest)
        .transpose()
        .map_err(|e| RunError::TraceFailed {
            detail: e.to_string(),
        })?;

    let report = RunReport {
        strategy: config.strategy,
        termination: result.termination,
        plan_len: result.plan.as_ref().map(Vec::len),
        path_cost: result.path_cost(),
        stats: result.stats,
        trace_digest,
        policy: config.policy.clone(),
    };

    Ok((result, report))
}

/// Check that `plan` replays from the start to a goal at `path_cost`.
///
/// # Errors
///
/// Returns [`RunError::Replay`], [`RunError::NotAGoal`] or
/// [`RunError::CostMismatch`] for the first check that fails.
pub fn validate_plan<P>(problem: &P, plan: &[P::Action], path_cost: u64) -> Result<(), RunError>
where
    P: FactoredProblem,
    P::Action: PartialEq,
{
    let (final_state, replayed_cost) = replay(problem, plan).map_err(RunError::Replay)?;

    if !problem.is_goal(&final_state) {
        warn!("plan of {} actions ends at non-goal {final_state:?}", plan.len());
        return Err(RunError::NotAGoal {
            final_state: format!("{final_state:?}"),
        });
    }

    let sequence_cost = problem.cost_of_action_sequence(plan);
    if replayed_cost != path_cost || sequence_cost != Some(path_cost) {
        warn!("plan cost mismatch: path_cost={path_cost}, replayed={replayed_cost}, sequence={sequence_cost:?}");
        return Err(RunError::CostMismatch {
            path_cost,
            replayed_cost,
            sequence_cost,
        });
    }

    Ok(())
}
