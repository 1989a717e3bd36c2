//! Recursive-descent parser turning tokens into an expression tree.
//!
//! Each nesting level collects a flat list of operands and operator
//! placeholders, then folds it by operator precedence. A single cursor
//! is shared by every level so a nested group advances its caller past the
//! whole group.

mod fold;
#[cfg(test)]
pub(crate) mod test_support;

use crate::errors::{ExpressionError, structure_error};
use crate::lexer::{Token, TokenKind};
use crate::operator::{Operator, UnknownOperator};
use crate::tree::Expression;

use fold::Branch;

/// Deepest nesting accepted, counting both bracket groups and the height of
/// the operator tree. Deeper input is rejected with
/// [`ExpressionError::Structure`] so that binding and evaluation, which recurse
/// once per level, stay within the stack.
pub const MAX_DEPTH: usize = 256;

/// Read position in a token stream.
#[derive(Debug)]
struct Cursor<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Cursor<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) {
        self.index += 1;
    }
}

/// A predicate name still collecting literal arguments.
struct PendingWord {
    name: String,
    args: Vec<String>,
    offset: usize,
}

#[derive(Default)]
struct Level {
    branches: Vec<Branch>,
    pending: Option<PendingWord>,
}

impl Level {
    fn finish_word(&mut self) {
        if let Some(PendingWord { name, args, offset }) = self.pending.take() {
            self.push(Expression::leaf(name, args), offset, 1);
        }
    }

    fn push(&mut self, expression: Expression, offset: usize, depth: usize) {
        self.branches.push(Branch::Ready {
            expression,
            offset,
            depth,
        });
    }
}

fn parse_operator(token: &Token) -> Result<Operator, ExpressionError> {
    token
        .text
        .parse()
        .map_err(|UnknownOperator(text)| ExpressionError::UnknownOperator {
            text,
            offset: token.offset,
        })
}

/// Parse one nesting level, stopping before its closing delimiter.
///
/// `groups` counts the bracket groups enclosing this level.
fn parse_level(
    cursor: &mut Cursor<'_>,
    groups: usize,
) -> Result<(Expression, usize), ExpressionError> {
    let mut level = Level::default();

    while let Some(token) = cursor.peek() {
        match token.kind {
            TokenKind::DelimOpen => {
                level.finish_word();
                if groups >= MAX_DEPTH {
                    return Err(structure_error("groups nest too deeply", token.offset));
                }
                cursor.advance();
                let (nested, depth) = parse_level(cursor, groups + 1)?;
                if !cursor
                    .peek()
                    .is_some_and(|close| close.kind == TokenKind::DelimClose)
                {
                    return Err(structure_error("group is never closed", token.offset));
                }
                level.push(nested, token.offset, depth);
            }
            TokenKind::DelimClose => break,
            TokenKind::Separator => {}
            TokenKind::Operator => {
                level.finish_word();
                let operator = parse_operator(token)?;
                level.branches.push(Branch::Pending {
                    operator,
                    offset: token.offset,
                });
            }
            TokenKind::Word => {
                level.finish_word();
                level.pending = Some(PendingWord {
                    name: token.text.clone(),
                    args: Vec::new(),
                    offset: token.offset,
                });
            }
            TokenKind::Literal => match level.pending.as_mut() {
                Some(word) => word.args.push(token.text.clone()),
                None => {
                    return Err(structure_error(
                        "literal without a preceding predicate name",
                        token.offset,
                    ));
                }
            },
        }
        cursor.advance();
    }

    level.finish_word();
    fold::reduce(level.branches)
}

/// Parse a token stream into an expression tree.
///
/// # Errors
/// Returns [`ExpressionError`] when the tokens do not form a single
/// well-formed expression: adjacent operands, operators missing an operand,
/// literals with no predicate name, unbalanced delimiters, or nesting deeper
/// than [`MAX_DEPTH`].
///
/// # Examples
/// ```
/// use predicate_inlay::{parse, tokenize};
/// let tokens = tokenize("not a and b").expect("example is well formed");
/// let tree = parse(&tokens).expect("example is well formed");
/// assert_eq!(tree.to_string(), "[ [ NOT a() ] AND b() ]");
/// ```
pub fn parse(tokens: &[Token]) -> Result<Expression, ExpressionError> {
    let mut cursor = Cursor::new(tokens);
    let (expression, _) = parse_level(&mut cursor, 0)?;
    if let Some(stray) = cursor.peek() {
        return Err(structure_error(
            "closing delimiter without a matching opening delimiter",
            stray.offset,
        ));
    }
    log::debug!("parsed expression {expression}");
    Ok(expression)
}
