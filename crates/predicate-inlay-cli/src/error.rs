//! Error types for the command-line harness.

use predicate_inlay::ExpressionError;
use thiserror::Error;

/// Errors raised while configuring the harness or reporting on expressions.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A `--set` argument was not of the form `NAME=BOOL`.
    #[error("invalid assignment '{0}', expected NAME=BOOL")]
    InvalidAssignment(String),

    /// An expression failed to compile.
    #[error("invalid expression: {0}")]
    Expression(#[from] ExpressionError),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use predicate_inlay::LexErrorInfo;

    #[test]
    fn invalid_assignment_displays_input() {
        let error = CliError::InvalidAssignment("a=maybe".to_string());
        assert_eq!(
            error.to_string(),
            "invalid assignment 'a=maybe', expected NAME=BOOL"
        );
    }

    #[test]
    fn expression_error_converts_and_keeps_detail() {
        let error: CliError = ExpressionError::Lex(LexErrorInfo::new("#", 3)).into();
        assert_eq!(
            error.to_string(),
            "invalid expression: unrecognised input `#` at byte 3 (zero-based)"
        );
    }

    #[test]
    fn io_error_converts_from_std_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: CliError = io_err.into();
        assert!(error.to_string().contains("pipe closed"));
    }
}
