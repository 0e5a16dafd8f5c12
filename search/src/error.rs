//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures and fatal domain defects only.
//! Running out of frontier or budget is not an error; those outcomes are
//! expressed via [`crate::trace::Termination`] on a successful return.

use crate::contract::ContractViolation;

/// Typed failure for a search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy was rejected before any search step was taken.
    InvalidPolicy { detail: String },
    /// The problem broke its own contract during expansion.
    ContractViolation(ContractViolation),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::ContractViolation(v) => write!(f, "problem contract violation: {v}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPolicy { .. } => None,
            Self::ContractViolation(v) => Some(v),
        }
    }
}

impl From<ContractViolation> for SearchError {
    fn from(v: ContractViolation) -> Self {
        Self::ContractViolation(v)
    }
}
