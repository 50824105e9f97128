//! Error types for expression construction.

use thiserror::Error;

/// Errors that can occur while building expressions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// A relation chain must contain at least one property.
    #[error("relation chain is empty")]
    EmptyChain,

    /// An intersection needs at least two operands.
    #[error("intersection needs at least two operands, got {operands}")]
    EmptyIntersection {
        /// Number of operands supplied.
        operands: usize,
    },
}

/// Result type for expression operations.
pub type ExprResult<T> = std::result::Result<T, ExprError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_chain() {
        assert_eq!(ExprError::EmptyChain.to_string(), "relation chain is empty");
    }

    #[test]
    fn test_error_display_empty_intersection() {
        let err = ExprError::EmptyIntersection { operands: 1 };
        assert_eq!(
            err.to_string(),
            "intersection needs at least two operands, got 1"
        );
    }
}
