//! Compile boolean predicate expressions into bindable trees.
//!
//! An expression such as `enabled and (region 'EU' or not beta)` is lexed,
//! parsed into a tree of named predicates joined by `NOT`/`AND`/`XOR`/`OR`,
//! bound to host callbacks through a [`Resolver`], and then evaluated as
//! often as needed.

mod binder;
mod errors;
mod eval;
mod inlay;
mod lexer;
mod operator;
mod parser;
mod tree;

pub use binder::{Predicate, Resolver, Unresolved, bind, predicate};
pub use errors::{ExpressionError, LexErrorInfo, Side};
pub use eval::eval;
pub use inlay::PredicateExpression;
pub use lexer::{Token, TokenKind, tokenize};
pub use operator::{Operator, UnknownOperator};
pub use parser::{MAX_DEPTH, parse};
pub use tree::{Expression, Leaf, Operation};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
