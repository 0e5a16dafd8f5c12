//! Search problem contract.
//!
//! A domain plugs into the engine by implementing [`SearchProblem`]. The
//! engine never inspects states or actions; it only compares states for
//! equality, hashes them into the explored set, and passes actions through
//! unchanged into the returned plan.
//!
//! Domains that also expose the factored accessors (`actions`, `next_state`,
//! `action_cost`) implement [`FactoredProblem`], which unlocks
//! [`verify_expansion`] and [`replay`] for contract checking.

use std::fmt::Debug;
use std::hash::Hash;

/// One successor triple produced by [`SearchProblem::expand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    /// The state reached.
    pub state: S,
    /// The action that reaches it.
    pub action: A,
    /// Incremental cost of the transition.
    pub step_cost: u64,
}

impl<S, A> Successor<S, A> {
    #[must_use]
    pub fn new(state: S, action: A, step_cost: u64) -> Self {
        Self {
            state,
            action,
            step_cost,
        }
    }
}

/// Trait for problems the engine can search.
///
/// # Contract
///
/// - `expand` is the sole source of children and step costs.
/// - No method is called on a state the problem did not produce (the start
///   state or a state returned by `expand`).
/// - `expand` must be deterministic: same state, same successors, same
///   order. Search results are only reproducible if this holds.
pub trait SearchProblem {
    /// Domain state. Used as the explored-set element.
    type State: Clone + Eq + Hash + Debug;
    /// Domain action. Opaque to the engine.
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All `(child, action, step_cost)` successors of `state`.
    fn expand(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of replaying `actions` from the start state.
    ///
    /// Returns `None` if the sequence contains an action that is not legal
    /// where it is applied. Used for validation and reporting only; the
    /// search loop never calls it.
    fn cost_of_action_sequence(&self, actions: &[Self::Action]) -> Option<u64>;
}

/// The factored form of a problem, derivable from `expand`.
///
/// Implementors must keep these accessors consistent with `expand`: for
/// every successor `(child, action, cost)` of `state`,
/// `next_state(state, action) == child` and
/// `action_cost(state, action, child) == cost`.
pub trait FactoredProblem: SearchProblem
where
    Self::Action: PartialEq,
{
    /// Legal actions at `state`, in expansion order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by taking `action` at `state`.
    fn next_state(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of the `(state, action, next_state)` transition.
    fn action_cost(&self, state: &Self::State, action: &Self::Action, next: &Self::State) -> u64;
}

/// Outcome of checking one expansion against the factored accessors.
pub type ExpansionResult<S, A> = Result<Vec<Successor<S, A>>, ContractViolation>;

/// A domain implementation that broke the problem contract.
///
/// These are defects in the domain, not search outcomes. They are reported
/// as-is and never corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// `expand` returned an action that `actions` does not list.
    IllegalAction { state: String, action: String },
    /// `expand` and `next_state` disagree on the child of an action.
    StateMismatch {
        action: String,
        expanded: String,
        next_state: String,
    },
    /// `expand` and `action_cost` disagree on a step cost.
    CostMismatch {
        action: String,
        expanded: u64,
        action_cost: u64,
    },
    /// `expand` produced the same action more than once.
    DuplicateAction { state: String, action: String },
    /// `expand` and `actions` disagree on the number of successors.
    SuccessorCountMismatch {
        state: String,
        expanded: usize,
        actions: usize,
    },
}

impl std::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalAction { state, action } => {
                write!(f, "action {action} is not legal at state {state}")
            }
            Self::StateMismatch {
                action,
                expanded,
                next_state,
            } => write!(
                f,
                "expand produced {expanded} for action {action} but next_state produced {next_state}"
            ),
            Self::CostMismatch {
                action,
                expanded,
                action_cost,
            } => write!(
                f,
                "expand declared cost {expanded} for action {action} but action_cost returned {action_cost}"
            ),
            Self::DuplicateAction { state, action } => {
                write!(f, "expand produced action {action} twice at state {state}")
            }
            Self::SuccessorCountMismatch {
                state,
                expanded,
                actions,
            } => write!(
                f,
                "expand produced {expanded} successors at state {state} but actions lists {actions}"
            ),
        }
    }
}

impl std::error::Error for ContractViolation {}

/// Build the successor list of `state` from the factored accessors.
///
/// Domains can implement [`SearchProblem::expand`] with this to stay
/// consistent with their factored form by construction.
pub fn expand_factored<P>(problem: &P, state: &P::State) -> Vec<Successor<P::State, P::Action>>
where
    P: FactoredProblem + ?Sized,
    P::Action: PartialEq,
{
    problem
        .actions(state)
        .into_iter()
        .map(|action| {
            let next = problem.next_state(state, &action);
            let step_cost = problem.action_cost(state, &action, &next);
            Successor::new(next, action, step_cost)
        })
        .collect()
}

/// Expand `state` and check every successor against the factored accessors.
///
/// # Errors
///
/// Returns the first [`ContractViolation`] found. On success the successors
/// are returned so the caller does not expand twice.
pub fn verify_expansion<P>(
    problem: &P,
    state: &P::State,
) -> ExpansionResult<P::State, P::Action>
where
    P: FactoredProblem + ?Sized,
    P::Action: PartialEq,
{
    let successors = problem.expand(state);
    let legal = problem.actions(state);

    for (i, successor) in successors.iter().enumerate() {
        if !legal.contains(&successor.action) {
            return Err(ContractViolation::IllegalAction {
                state: format!("{state:?}"),
                action: format!("{:?}", successor.action),
            });
        }
        // With the count check below, no repeats means every legal action
        // appears exactly once.
        if successors[..i].iter().any(|s| s.action == successor.action) {
            return Err(ContractViolation::DuplicateAction {
                state: format!("{state:?}"),
                action: format!("{:?}", successor.action),
            });
        }
        let next = problem.next_state(state, &successor.action);
        if next != successor.state {
            return Err(ContractViolation::StateMismatch {
                action: format!("{:?}", successor.action),
                expanded: format!("{:?}", successor.state),
                next_state: format!("{next:?}"),
            });
        }
        let cost = problem.action_cost(state, &successor.action, &next);
        if cost != successor.step_cost {
            return Err(ContractViolation::CostMismatch {
                action: format!("{:?}", successor.action),
                expanded: successor.step_cost,
                action_cost: cost,
            });
        }
    }

    if successors.len() != legal.len() {
        return Err(ContractViolation::SuccessorCountMismatch {
            state: format!("{state:?}"),
            expanded: successors.len(),
            actions: legal.len(),
        });
    }

    Ok(successors)
}

/// Replay `actions` from the start state through the factored accessors.
///
/// Returns the final state and the accumulated (saturating) cost.
///
/// # Errors
///
/// Returns [`ContractViolation::IllegalAction`] at the first action that is
/// not legal where it is applied.
pub fn replay<P>(problem: &P, actions: &[P::Action]) -> Result<(P::State, u64), ContractViolation>
where
    P: FactoredProblem + ?Sized,
    P::Action: PartialEq,
{
    let mut state = problem.start_state();
    let mut cost = 0u64;
    for action in actions {
        if !problem.actions(&state).contains(action) {
            return Err(ContractViolation::IllegalAction {
                state: format!("{state:?}"),
                action: format!("{action:?}"),
            });
        }
        let next = problem.next_state(&state, action);
        cost = cost.saturating_add(problem.action_cost(&state, action, &next));
        state = next;
    }
    Ok((state, cost))
}

/// Ready-made [`SearchProblem::cost_of_action_sequence`] for factored problems.
#[must_use]
pub fn cost_of_sequence_by_replay<P>(problem: &P, actions: &[P::Action]) -> Option<u64>
where
    P: FactoredProblem + ?Sized,
    P::Action: PartialEq,
{
    replay(problem, actions).ok().map(|(_, cost)| cost)
}
