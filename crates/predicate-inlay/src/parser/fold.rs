//! Precedence folding of a flat branch list into a single expression.

use crate::errors::{ExpressionError, Side, structure_error};
use crate::operator::Operator;
use crate::tree::{Expression, Operation};

use super::MAX_DEPTH;

/// Entry of a nesting level's branch list.
#[derive(Debug)]
pub(super) enum Branch {
    /// An operator whose operands have not been folded in yet.
    Pending { operator: Operator, offset: usize },
    /// A finished sub-expression and the height of its tree.
    Ready {
        expression: Expression,
        offset: usize,
        depth: usize,
    },
}

impl Branch {
    const fn offset(&self) -> usize {
        match self {
            Self::Pending { offset, .. } | Self::Ready { offset, .. } => *offset,
        }
    }
}

const fn unbound(operator: Operator, side: Side, offset: usize) -> ExpressionError {
    ExpressionError::UnboundOperand {
        operator,
        side,
        offset,
    }
}

/// An operand removed from the branch list.
struct Operand {
    expression: Expression,
    offset: usize,
    depth: usize,
}

/// Remove the finished branch at `index` for use as an operand.
fn take_operand(
    branches: &mut Vec<Branch>,
    index: usize,
    operator: Operator,
    side: Side,
    operator_offset: usize,
) -> Result<Operand, ExpressionError> {
    if !matches!(branches.get(index), Some(Branch::Ready { .. })) {
        return Err(unbound(operator, side, operator_offset));
    }
    match branches.remove(index) {
        Branch::Ready {
            expression,
            offset,
            depth,
        } => Ok(Operand {
            expression,
            offset,
            depth,
        }),
        Branch::Pending { .. } => Err(unbound(operator, side, operator_offset)),
    }
}

/// Fold every pending `pass` operator, scanning right to left.
fn fold_pass(branches: &mut Vec<Branch>, pass: Operator) -> Result<(), ExpressionError> {
    let mut index = branches.len();
    while index > 0 {
        index -= 1;
        let Some(&Branch::Pending { operator, offset }) = branches.get(index) else {
            continue;
        };
        if operator != pass {
            continue;
        }

        let right = take_operand(branches, index + 1, operator, Side::Right, offset)?;
        let (operation, start, operand_depth) = if operator.is_unary() {
            (Operation::negate(right.expression), offset, right.depth)
        } else {
            let Some(left_index) = index.checked_sub(1) else {
                return Err(unbound(operator, Side::Left, offset));
            };
            let left = take_operand(branches, left_index, operator, Side::Left, offset)?;
            // The placeholder shifted into the left operand's slot.
            index = left_index;
            let Some(operation) = Operation::binary(operator, left.expression, right.expression)
            else {
                unreachable!("only NOT is unary");
            };
            (operation, left.offset, left.depth.max(right.depth))
        };

        let depth = operand_depth + 1;
        if depth > MAX_DEPTH {
            return Err(structure_error("expression nests operators too deeply", start));
        }
        if let Some(slot) = branches.get_mut(index) {
            *slot = Branch::Ready {
                expression: Expression::Operation(operation),
                offset: start,
                depth,
            };
        }
    }
    Ok(())
}

/// Reduce a level's branches to one expression and the height of its tree.
///
/// An empty level is an empty group. Branches left over once every operator
/// has been folded mean two operands had nothing joining them.
pub(super) fn reduce(mut branches: Vec<Branch>) -> Result<(Expression, usize), ExpressionError> {
    for pass in Operator::PRECEDENCE {
        fold_pass(&mut branches, pass)?;
    }

    let mut remaining = branches.into_iter();
    match (remaining.next(), remaining.next()) {
        (None, _) => Ok((Expression::Empty, 1)),
        (
            Some(Branch::Ready {
                expression, depth, ..
            }),
            None,
        ) => Ok((expression, depth)),
        (Some(Branch::Pending { operator, offset }), None) => {
            Err(unbound(operator, Side::Right, offset))
        }
        (Some(_), Some(extra)) => Err(structure_error(
            "expected an operator before this operand",
            extra.offset(),
        )),
    }
}
