//! Test helpers for asserting parser outcomes.
use super::parse;
use crate::errors::ExpressionError;
use crate::lexer::tokenize;
use crate::tree::Expression;

pub(crate) fn parse_ok(expression: &str) -> Expression {
    match tokenize(expression).and_then(|tokens| parse(&tokens)) {
        Ok(tree) => tree,
        Err(err) => panic!("expression should parse: {err}"),
    }
}

pub(crate) fn parse_err(expression: &str) -> ExpressionError {
    match tokenize(expression).and_then(|tokens| parse(&tokens)) {
        Ok(_) => panic!("expression parsing should fail"),
        Err(err) => err,
    }
}
