//! Error types shared by the lexing and parsing modules.

use std::fmt;
use thiserror::Error;

use crate::operator::Operator;

/// Location and text of input that no token pattern recognised.
///
/// # Examples
/// ```
/// use predicate_inlay::LexErrorInfo;
/// let info = LexErrorInfo::new("#", 4);
/// assert_eq!(info.fragment, "#");
/// assert_eq!(info.to_string(), "unrecognised input `#` at byte 4 (zero-based)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexErrorInfo {
    /// The unrecognised substring.
    pub fragment: String,
    /// Byte offset of the fragment within the expression.
    pub offset: usize,
}

impl LexErrorInfo {
    /// Describe an unrecognised fragment found at `offset`.
    #[must_use]
    pub fn new(fragment: impl Into<String>, offset: usize) -> Self {
        Self {
            fragment: fragment.into(),
            offset,
        }
    }
}

impl fmt::Display for LexErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognised input `{}` at byte {} (zero-based)",
            self.fragment, self.offset
        )
    }
}

/// Which operand of an operator is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The operand preceding a binary operator.
    Left,
    /// The operand following an operator.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Errors surfaced while compiling an expression string into a tree.
///
/// Evaluation and binding never fail; every variant is raised during
/// construction.
///
/// # Examples
/// ```
/// use predicate_inlay::{ExpressionError, LexErrorInfo};
/// let err = ExpressionError::Lex(LexErrorInfo::new("#", 2));
/// assert_eq!(err.to_string(), "unrecognised input `#` at byte 2 (zero-based)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// No token pattern matches the input at the reported position.
    #[error("{0}")]
    Lex(LexErrorInfo),
    /// A nesting level does not reduce to a single expression.
    #[error("{message} at byte {offset} (zero-based)")]
    Structure {
        /// What went wrong.
        message: &'static str,
        /// Byte offset the problem was detected at.
        offset: usize,
    },
    /// An operator has nothing to bind on one of its sides.
    #[error("operator {operator} at byte {offset} (zero-based) is missing its {side} operand")]
    UnboundOperand {
        /// The operator left incomplete.
        operator: Operator,
        /// The side that could not be bound.
        side: Side,
        /// Byte offset of the operator token.
        offset: usize,
    },
    /// Operator token text that maps to no operator kind.
    #[error("unknown operator `{text}` at byte {offset} (zero-based)")]
    UnknownOperator {
        /// The token text.
        text: String,
        /// Byte offset of the token.
        offset: usize,
    },
}

pub(crate) fn structure_error(message: &'static str, offset: usize) -> ExpressionError {
    ExpressionError::Structure { message, offset }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lex_error_with_offset() {
        let err = ExpressionError::Lex(LexErrorInfo::new("@@", 7));
        assert_eq!(
            err.to_string(),
            "unrecognised input `@@` at byte 7 (zero-based)"
        );
    }

    #[test]
    fn formats_structure_error() {
        let err = structure_error("expression could not be reduced", 3);
        assert_eq!(
            err.to_string(),
            "expression could not be reduced at byte 3 (zero-based)"
        );
    }

    #[test]
    fn formats_unbound_operand() {
        let err = ExpressionError::UnboundOperand {
            operator: Operator::And,
            side: Side::Left,
            offset: 0,
        };
        assert_eq!(
            err.to_string(),
            "operator AND at byte 0 (zero-based) is missing its left operand"
        );
    }

    #[test]
    fn formats_unknown_operator() {
        let err = ExpressionError::UnknownOperator {
            text: "nand".into(),
            offset: 5,
        };
        assert_eq!(
            err.to_string(),
            "unknown operator `nand` at byte 5 (zero-based)"
        );
    }
}
