use thiserror::Error;

/// Error produced when a search run must be aborted.
///
/// Running out of states to expand is *not* an error: an exhausted
/// frontier is reported as a normal [Outcome](crate::Outcome).
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Domain bug: {0}")]
    ContractViolation(String),

    #[error("Expansion budget exhausted after {0} expansions")]
    BudgetExceeded(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
