use thiserror::Error;

/// Errors reported while constructing token builders or comparisons.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A builder was constructed without any columns.
    #[error("token builder requires at least one column")]
    EmptyColumnSet,
    /// The configured hash function name was empty.
    #[error("token function name must not be empty")]
    EmptyFunctionName,
    /// Explicit parameter names do not pair up with the builder's columns.
    #[error("Invalid parameter count: expected {expected}, got {got}")]
    ArgumentCountMismatch {
        /// Number of columns captured by the builder.
        expected: usize,
        /// Number of parameter names supplied.
        got: usize,
    },
    /// More parameter names were supplied than the comparison accepts.
    #[error("Too many parameter names: at most {max} allowed, got {got}")]
    UnexpectedArgumentCount {
        /// Maximum number of names accepted.
        max: usize,
        /// Number of names supplied.
        got: usize,
    },
}
