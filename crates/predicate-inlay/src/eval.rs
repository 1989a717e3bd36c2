//! Recursive evaluation of a bound expression tree.

use crate::operator::Operator;
use crate::tree::Expression;

/// Evaluate `expression`.
///
/// Empty groups, unresolved leaves and absent operands all count as `true`.
/// The left operand is evaluated before the right one; `AND` and `OR`
/// short-circuit.
///
/// Recursion depth follows the tree height, which [`parse`](crate::parse)
/// caps at [`MAX_DEPTH`](crate::MAX_DEPTH).
#[must_use]
pub fn eval(expression: &Expression) -> bool {
    match expression {
        Expression::Empty => true,
        Expression::Leaf(leaf) => leaf.predicate.as_ref().is_none_or(|callback| callback()),
        Expression::Operation(operation) => {
            let left = || operation.left().is_none_or(eval);
            let right = || eval(operation.right());
            match operation.operator() {
                Operator::Not => !right(),
                Operator::And => left() && right(),
                Operator::Or => left() || right(),
                Operator::Xor => left() ^ right(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::{bind, predicate};
    use crate::tree::Operation;
    use rstest::rstest;

    fn binary(operator: Operator, left: Expression, right: Expression) -> Expression {
        match Operation::binary(operator, left, right) {
            Some(operation) => Expression::Operation(operation),
            None => panic!("{operator} is binary"),
        }
    }

    fn bound_pair(operator: Operator, left: bool, right: bool) -> Expression {
        let mut expression = binary(
            operator,
            Expression::leaf("l", Vec::new()),
            Expression::leaf("r", Vec::new()),
        );
        bind(&mut expression, &move |name: &str, _: &[String]| {
            let value = if name == "l" { left } else { right };
            Some(predicate(move || value))
        });
        expression
    }

    #[rstest]
    #[case(Operator::And, true, true, true)]
    #[case(Operator::And, true, false, false)]
    #[case(Operator::Or, false, false, false)]
    #[case(Operator::Or, false, true, true)]
    #[case(Operator::Xor, true, true, false)]
    #[case(Operator::Xor, false, true, true)]
    fn combines_operands(
        #[case] operator: Operator,
        #[case] left: bool,
        #[case] right: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(eval(&bound_pair(operator, left, right)), expected);
    }

    #[test]
    fn empty_is_true() {
        assert!(eval(&Expression::Empty));
    }

    #[test]
    fn unbound_leaf_is_true() {
        assert!(eval(&Expression::leaf("z", Vec::new())));
    }

    #[test]
    fn negation_inverts_right_operand() {
        let expression = Expression::Operation(Operation::negate(Expression::Empty));
        assert!(!eval(&expression));
    }
}
