//! Errors raised while evaluating expressions.

use thiserror::Error;

/// Result type alias for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The environment does not bind a variable that the expression references.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EvalError::UnboundVariable("z".to_string());
        assert_eq!(err.to_string(), "unbound variable: z");
    }
}
