//! Error types for existential filler search.

use owl_expr::ExprError;
use thiserror::Error;

/// Errors raised by a reasoning oracle.
///
/// The search never catches these: an oracle error aborts the whole
/// `find_fillers` call and no partial result is visible to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The oracle is not ready or not initialized.
    #[error("reasoning oracle is not available")]
    Unavailable,

    /// The oracle failed while answering a query.
    #[error("oracle query failed: {0}")]
    QueryFailure(String),
}

/// Result type for oracle operations.
pub type OracleResult<T> = std::result::Result<T, OracleError>;

/// Errors that can occur during an existential filler search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExistentialQueryError {
    /// A precondition on the caller's arguments was violated.
    ///
    /// Raised before any oracle query is issued (e.g. an empty relation
    /// chain).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An oracle error, propagated untouched.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl From<ExprError> for ExistentialQueryError {
    fn from(err: ExprError) -> Self {
        ExistentialQueryError::InvalidArgument(err.to_string())
    }
}

/// Result type for search operations.
pub type SearchOutcome<T> = std::result::Result<T, ExistentialQueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_error_display() {
        assert_eq!(
            OracleError::Unavailable.to_string(),
            "reasoning oracle is not available"
        );
        assert_eq!(
            OracleError::QueryFailure("classification failed".into()).to_string(),
            "oracle query failed: classification failed"
        );
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = ExistentialQueryError::InvalidArgument("relation chain is empty".into());
        assert_eq!(err.to_string(), "invalid argument: relation chain is empty");
    }

    #[test]
    fn test_empty_chain_maps_to_invalid_argument() {
        let err: ExistentialQueryError = ExprError::EmptyChain.into();
        assert!(matches!(err, ExistentialQueryError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "invalid argument: relation chain is empty");
    }

    #[test]
    fn test_oracle_error_passes_through() {
        let err: ExistentialQueryError = OracleError::Unavailable.into();
        assert_eq!(err.to_string(), "reasoning oracle is not available");
    }
}
