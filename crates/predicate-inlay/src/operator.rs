//! Logical operator kinds and their accepted spellings.
//!
//! The declaration order of [`Operator`] is also its binding strength:
//! `Not` folds first, `Or` last.

use std::fmt;
use std::str::FromStr;

/// Logical operator recognised in predicate expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    /// Unary negation of the operand on its right.
    Not,
    /// Conjunction.
    And,
    /// Exclusive disjunction.
    Xor,
    /// Inclusive disjunction.
    Or,
}

impl Operator {
    /// Operators in folding order, strongest first.
    pub const PRECEDENCE: [Self; 4] = [Self::Not, Self::And, Self::Xor, Self::Or];

    /// Return the canonical upper-case name of the operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use predicate_inlay::Operator;
    ///
    /// assert_eq!(Operator::Xor.as_str(), "XOR");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Xor => "XOR",
            Self::Or => "OR",
        }
    }

    /// Whether the operator takes a single, right-hand operand.
    #[must_use]
    pub const fn is_unary(&self) -> bool {
        matches!(self, Self::Not)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when operator token text has no known meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operator: {}", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "!" | "not" => Ok(Self::Not),
            "&" | "and" => Ok(Self::And),
            "^" | "xor" | "!=" => Ok(Self::Xor),
            "|" | "or" => Ok(Self::Or),
            _ => Err(UnknownOperator(value.to_string())),
        }
    }
}
