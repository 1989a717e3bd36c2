//! Expression tree produced by the parser.
//!
//! Nodes form a strict ownership tree. Its shape is fixed once parsing
//! finishes; binding only replaces the predicate stored in each [`Leaf`].

use std::fmt;

use crate::binder::Predicate;
use crate::operator::Operator;

/// A node of a parsed expression.
#[derive(Debug)]
pub enum Expression {
    /// An empty group. Always true.
    Empty,
    /// A named predicate with its literal arguments.
    Leaf(Leaf),
    /// An operator applied to its operands.
    Operation(Operation),
}

/// A named predicate reference.
pub struct Leaf {
    name: String,
    args: Vec<String>,
    pub(crate) predicate: Option<Predicate>,
}

impl Leaf {
    /// Create an unbound leaf.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
            predicate: None,
        }
    }

    /// Predicate name as written in the expression.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Literal arguments in encounter order.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether the last binding attached a callback to this leaf.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.predicate.is_some()
    }
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// An operator with its operands.
///
/// Values can only be built once every operand is known: `NOT` through
/// [`Operation::negate`], the binary operators through [`Operation::binary`].
#[derive(Debug)]
pub struct Operation {
    operator: Operator,
    left: Option<Box<Expression>>,
    right: Box<Expression>,
}

impl Operation {
    /// Negate `operand`.
    #[must_use]
    pub fn negate(operand: Expression) -> Self {
        Self {
            operator: Operator::Not,
            left: None,
            right: Box::new(operand),
        }
    }

    /// Combine `left` and `right` with a binary operator.
    ///
    /// Returns `None` when `operator` is unary.
    #[must_use]
    pub fn binary(operator: Operator, left: Expression, right: Expression) -> Option<Self> {
        (!operator.is_unary()).then(|| Self {
            operator,
            left: Some(Box::new(left)),
            right: Box::new(right),
        })
    }

    /// The operator kind.
    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Left operand; absent only for `NOT`.
    #[must_use]
    pub fn left(&self) -> Option<&Expression> {
        self.left.as_deref()
    }

    /// Right operand.
    #[must_use]
    pub fn right(&self) -> &Expression {
        &self.right
    }

    pub(crate) fn operands_mut(&mut self) -> (Option<&mut Expression>, &mut Expression) {
        (self.left.as_deref_mut(), &mut self.right)
    }
}

impl Expression {
    /// Convenience constructor for an unbound leaf.
    #[must_use]
    pub fn leaf(name: impl Into<String>, args: Vec<String>) -> Self {
        Self::Leaf(Leaf::new(name, args))
    }

    /// Collect every leaf, depth first and left to right.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut found = Vec::new();
        collect_leaves(self, &mut found);
        found
    }
}

fn collect_leaves<'a>(expression: &'a Expression, found: &mut Vec<&'a Leaf>) {
    match expression {
        Expression::Empty => {}
        Expression::Leaf(leaf) => found.push(leaf),
        Expression::Operation(operation) => {
            if let Some(left) = operation.left() {
                collect_leaves(left, found);
            }
            collect_leaves(operation.right(), found);
        }
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.args.join(", "))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        if let Some(left) = self.left() {
            write!(f, "{left} ")?;
        }
        write!(f, "{} {} ]", self.operator, self.right)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("{}"),
            Self::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            Self::Operation(operation) => fmt::Display::fmt(operation, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> Expression {
        Expression::leaf(name, Vec::new())
    }

    #[test]
    fn renders_leaf_with_arguments() {
        let expression = Expression::leaf("f", vec!["thing".into(), "-0.15".into()]);
        assert_eq!(expression.to_string(), "f(thing, -0.15)");
    }

    #[test]
    fn renders_nested_operations() {
        let Some(and) = Operation::binary(
            Operator::And,
            Expression::Operation(Operation::negate(leaf("a"))),
            leaf("b"),
        ) else {
            panic!("AND is binary");
        };
        assert_eq!(
            Expression::Operation(and).to_string(),
            "[ [ NOT a() ] AND b() ]"
        );
    }

    #[test]
    fn renders_empty_group() {
        assert_eq!(Expression::Empty.to_string(), "{}");
    }

    #[test]
    fn binary_constructor_rejects_not() {
        assert!(Operation::binary(Operator::Not, leaf("a"), leaf("b")).is_none());
    }

    #[test]
    fn negation_has_no_left_operand() {
        let not = Operation::negate(leaf("a"));
        assert!(not.left().is_none());
        assert_eq!(not.operator(), Operator::Not);
    }

    #[test]
    fn leaves_are_listed_left_to_right() {
        let Some(or) = Operation::binary(Operator::Or, leaf("x"), leaf("y")) else {
            panic!("OR is binary");
        };
        let expression = Expression::Operation(or);
        let names: Vec<_> = expression.leaves().iter().map(|l| l.name()).collect();
        assert_eq!(names, ["x", "y"]);
    }
}
