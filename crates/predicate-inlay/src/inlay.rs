//! The compiled, bindable expression handed to hosts.

use std::fmt;
use std::str::FromStr;

use crate::binder::{Resolver, bind};
use crate::errors::ExpressionError;
use crate::eval::eval;
use crate::lexer::tokenize;
use crate::parser::parse;
use crate::tree::Expression;

/// A parsed predicate expression together with its leaf bindings.
///
/// The tree is built once. [`rebind`](Self::rebind) swaps every leaf
/// callback and needs exclusive access; [`eval`](Self::eval) only reads, so a
/// shared reference can be evaluated from several threads at once.
///
/// # Examples
/// ```
/// use predicate_inlay::{PredicateExpression, predicate};
///
/// let expr = PredicateExpression::new("enabled and region 'EU'", &|name: &str, args: &[String]| {
///     match name {
///         "enabled" => Some(predicate(|| true)),
///         "region" => {
///             let eu = args.first().is_some_and(|region| region == "EU");
///             Some(predicate(move || eu))
///         }
///         _ => None,
///     }
/// })
/// .expect("example is well formed");
/// assert!(expr.eval());
/// ```
#[derive(Debug)]
pub struct PredicateExpression {
    root: Expression,
    bound: bool,
}

impl PredicateExpression {
    /// Compile `expression` and bind its leaves through `resolver`.
    ///
    /// # Errors
    /// Returns [`ExpressionError`] when the text cannot be tokenised or does
    /// not form a single well-formed expression.
    pub fn new<R>(expression: &str, resolver: &R) -> Result<Self, ExpressionError>
    where
        R: Resolver + ?Sized,
    {
        let mut compiled = Self::parse(expression)?;
        compiled.rebind(resolver);
        Ok(compiled)
    }

    /// Compile `expression` without binding it. Every leaf evaluates true
    /// until [`rebind`](Self::rebind) is called.
    ///
    /// # Errors
    /// Returns [`ExpressionError`] when the text cannot be tokenised or does
    /// not form a single well-formed expression.
    pub fn parse(expression: &str) -> Result<Self, ExpressionError> {
        let tokens = tokenize(expression)?;
        let root = parse(&tokens)?;
        Ok(Self { root, bound: false })
    }

    /// Replace every leaf callback with the one `resolver` returns.
    pub fn rebind<R>(&mut self, resolver: &R)
    where
        R: Resolver + ?Sized,
    {
        bind(&mut self.root, resolver);
        self.bound = true;
    }

    /// Evaluate the expression with the current bindings.
    #[must_use]
    pub fn eval(&self) -> bool {
        eval(&self.root)
    }

    /// Whether the expression has been bound at least once.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Root node of the parsed tree.
    #[must_use]
    pub fn root(&self) -> &Expression {
        &self.root
    }
}

impl FromStr for PredicateExpression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PredicateExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::{Unresolved, predicate};

    #[test]
    fn parsed_expression_starts_unbound() {
        let Ok(expression) = "a and b".parse::<PredicateExpression>() else {
            panic!("expression should parse");
        };
        assert!(!expression.is_bound());
        assert!(expression.eval());
    }

    #[test]
    fn construction_binds_immediately() {
        let Ok(expression) = PredicateExpression::new("a", &Unresolved) else {
            panic!("expression should parse");
        };
        assert!(expression.is_bound());
    }

    #[test]
    fn rebinding_changes_the_result() {
        let Ok(mut expression) = PredicateExpression::new("not a", &Unresolved) else {
            panic!("expression should parse");
        };
        assert!(!expression.eval());
        expression.rebind(&|_: &str, _: &[String]| Some(predicate(|| false)));
        assert!(expression.eval());
    }

    #[test]
    fn displays_the_tree() {
        let Ok(expression) = PredicateExpression::parse("a or b and c") else {
            panic!("expression should parse");
        };
        assert_eq!(expression.to_string(), "[ a() OR [ b() AND c() ] ]");
    }

    #[test]
    fn is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PredicateExpression>();
    }
}
