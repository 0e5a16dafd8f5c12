//! Search entry points and the generic expansion loop.
//!
//! All five strategies run the same graph-search loop:
//!
//! ```text
//! push root
//! loop:
//!     frontier empty        -> FrontierExhausted
//!     pop node
//!     state explored        -> skip (stale duplicate)
//!     state is goal         -> GoalReached
//!     mark explored, expand, push every child
//! ```
//!
//! The goal test happens at pop time, never at generation time. With a
//! min-priority frontier the first goal popped has minimal `f` among all
//! frontier entries, which is what makes uniform-cost and A* optimal.
//! Children are pushed even if their state is already explored; stale
//! entries are filtered when popped.

use std::collections::HashSet;

use log::{debug, trace};

use crate::contract::{verify_expansion, ExpansionResult, FactoredProblem, SearchProblem};
use crate::error::SearchError;
use crate::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use crate::heuristic::{Heuristic, NullHeuristic};
use crate::node::{NodeRef, SearchNode, SearchTree};
use crate::policy::SearchPolicy;
use crate::strategy::{Discipline, Evaluation, Strategy};
use crate::trace::{ExpandEvent, SearchStats, SearchTrace, Termination};

/// Result of a search execution.
///
/// Check [`SearchResult::is_goal_reached`] or inspect `termination` to
/// determine the outcome. Failure to find a plan is a normal result, not
/// an error.
#[derive(Debug, Clone)]
pub struct SearchResult<S, A> {
    pub strategy: Strategy,
    pub termination: Termination,
    /// The goal node (if found).
    pub goal: Option<SearchNode<S, A>>,
    /// Actions from the start state to the goal (if found).
    pub plan: Option<Vec<A>>,
    pub stats: SearchStats,
    /// Expansion audit trail, present when the policy asked for it.
    pub trace: Option<SearchTrace>,
}

impl<S, A> SearchResult<S, A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination.is_goal_reached()
    }

    /// Path cost of the goal node (if found).
    #[must_use]
    pub fn path_cost(&self) -> Option<u64> {
        self.goal.as_ref().map(|g| g.path_cost)
    }

    /// Consume the result, keeping only the plan.
    #[must_use]
    pub fn into_plan(self) -> Option<Vec<A>> {
        self.plan
    }
}

/// Run `strategy` on `problem`.
///
/// `heuristic` is only consulted by [`Strategy::Greedy`] and
/// [`Strategy::AStar`]; pass [`NullHeuristic`] otherwise.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation. No
/// search step is taken in that case.
pub fn search<P, H>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    run(problem, strategy, heuristic, policy, |state| {
        Ok(problem.expand(state))
    })
}

/// Run `strategy` on `problem`, checking every expansion against the
/// problem's factored accessors.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] for a rejected policy, and
/// [`SearchError::ContractViolation`] at the first expansion that
/// disagrees with `actions`, `next_state` or `action_cost`. A violation
/// aborts the run; nothing is corrected.
pub fn search_verified<P, H>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: FactoredProblem + ?Sized,
    P::Action: PartialEq,
    H: Heuristic<P> + ?Sized,
{
    run(problem, strategy, heuristic, policy, |state| {
        verify_expansion(problem, state)
    })
}

/// Depth-first graph search. `None` means no plan exists.
pub fn depth_first_search<P>(problem: &P) -> Option<Vec<P::Action>>
where
    P: SearchProblem + ?Sized,
{
    plan_only(problem, Strategy::DepthFirst, &NullHeuristic)
}

/// Breadth-first graph search. Fewest actions; `None` means no plan exists.
pub fn breadth_first_search<P>(problem: &P) -> Option<Vec<P::Action>>
where
    P: SearchProblem + ?Sized,
{
    plan_only(problem, Strategy::BreadthFirst, &NullHeuristic)
}

/// Uniform-cost search. Minimum cost; `None` means no plan exists.
pub fn uniform_cost_search<P>(problem: &P) -> Option<Vec<P::Action>>
where
    P: SearchProblem + ?Sized,
{
    plan_only(problem, Strategy::UniformCost, &NullHeuristic)
}

/// Greedy best-first search on `heuristic` alone.
pub fn greedy_search<P, H>(problem: &P, heuristic: &H) -> Option<Vec<P::Action>>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    plan_only(problem, Strategy::Greedy, heuristic)
}

/// A* search. Minimum cost when `heuristic` is consistent.
pub fn astar_search<P, H>(problem: &P, heuristic: &H) -> Option<Vec<P::Action>>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    plan_only(problem, Strategy::AStar, heuristic)
}

fn plan_only<P, H>(problem: &P, strategy: Strategy, heuristic: &H) -> Option<Vec<P::Action>>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    // The default policy always validates, so the only error path is unreachable.
    search(problem, strategy, heuristic, &SearchPolicy::default())
        .ok()
        .and_then(SearchResult::into_plan)
}

fn run<P, H, E>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
    expand: E,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
    E: FnMut(&P::State) -> ExpansionResult<P::State, P::Action>,
{
    policy.validate()?;

    match strategy.discipline() {
        Discipline::Lifo => drive(
            problem,
            strategy,
            heuristic,
            policy,
            StackFrontier::new(),
            None,
            expand,
        ),
        Discipline::Fifo => drive(
            problem,
            strategy,
            heuristic,
            policy,
            QueueFrontier::new(),
            None,
            expand,
        ),
        Discipline::Priority(evaluation) => drive(
            problem,
            strategy,
            heuristic,
            policy,
            PriorityFrontier::new(move |n: &NodeRef| evaluation.eval(n)),
            Some(evaluation),
            expand,
        ),
    }
}

#[allow(clippy::too_many_lines)]
fn drive<P, H, F, E>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
    mut frontier: F,
    evaluation: Option<Evaluation>,
    mut expand: E,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
    F: Frontier<NodeRef>,
    E: FnMut(&P::State) -> ExpansionResult<P::State, P::Action>,
{
    let estimate = |state: &P::State| -> u64 {
        if strategy.uses_heuristic() {
            heuristic.estimate(state, problem)
        } else {
            0
        }
    };

    let start = problem.start_state();
    let root_h = estimate(&start);
    let mut tree: SearchTree<P::State, P::Action> = SearchTree::with_root(start, root_h);
    let mut explored: HashSet<P::State> = HashSet::new();
    let mut stats = SearchStats {
        nodes_generated: 1,
        ..SearchStats::default()
    };
    let mut events: Vec<ExpandEvent> = Vec::new();

    debug!(
        "search start: strategy={strategy}, max_expansions={:?}, max_nodes={:?}",
        policy.max_expansions, policy.max_nodes
    );

    frontier.push(tree.root().to_ref());

    let termination = loop {
        let Some(current) = frontier.pop() else {
            break Termination::FrontierExhausted;
        };

        let successors = {
            let Some(node) = tree.get(current.node_id) else {
                continue;
            };

            if explored.contains(&node.state) {
                stats.stale_pops += 1;
                continue;
            }

            if problem.is_goal(&node.state) {
                break Termination::GoalReached {
                    node_id: current.node_id,
                };
            }

            if policy
                .max_expansions
                .is_some_and(|max| stats.expansions >= max)
            {
                break Termination::ExpansionBudgetExceeded;
            }

            explored.insert(node.state.clone());
            expand(&node.state)?
        };

        let mut children = Vec::with_capacity(successors.len());
        let mut node_budget_hit = false;

        for successor in successors {
            if policy
                .max_nodes
                .is_some_and(|max| stats.nodes_generated >= max)
            {
                node_budget_hit = true;
                break;
            }
            let h_cost = estimate(&successor.state);
            if let Some(child) = tree.make_child(current.node_id, successor, h_cost) {
                children.push(child.node_id);
                frontier.push(child.to_ref());
                stats.nodes_generated += 1;
            }
        }

        trace!(
            "expand #{}: node={} depth={} g={} h={} children={}",
            stats.expansions,
            current.node_id,
            current.depth,
            current.path_cost,
            current.h_cost,
            children.len()
        );

        if policy.record_trace {
            let parent_id = tree.get(current.node_id).and_then(|n| n.parent_id);
            events.push(ExpandEvent {
                expansion_order: stats.expansions,
                node_id: current.node_id,
                parent_id,
                depth: current.depth,
                path_cost: current.path_cost,
                h_cost: current.h_cost,
                pop_key: evaluation.map(|e| e.eval(&current)),
                children,
            });
        }
        stats.expansions += 1;

        if node_budget_hit {
            break Termination::NodeBudgetExceeded;
        }
    };

    stats.frontier_high_water = frontier.high_water();
    stats.explored = explored.len() as u64;

    let (goal, plan) = match termination {
        Termination::GoalReached { node_id } => (
            tree.get(node_id).cloned(),
            Some(tree.reconstruct_path(node_id)),
        ),
        _ => (None, None),
    };

    debug!(
        "search end: strategy={strategy}, termination={termination:?}, expansions={}, nodes={}, path_cost={:?}",
        stats.expansions,
        stats.nodes_generated,
        goal.as_ref().map(|g| g.path_cost)
    );

    let trace = policy.record_trace.then_some(SearchTrace {
        strategy,
        expansions: events,
        termination,
        stats,
    });

    Ok(SearchResult {
        strategy,
        termination,
        goal,
        plan,
        stats,
        trace,
    })
}
