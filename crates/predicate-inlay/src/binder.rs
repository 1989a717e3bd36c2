//! Attaching caller-supplied callbacks to the leaves of a tree.

use crate::tree::Expression;

/// Zero-argument boolean callback bound to a leaf.
pub type Predicate = Box<dyn Fn() -> bool + Send + Sync>;

/// Box a closure as a [`Predicate`].
///
/// # Examples
/// ```
/// use predicate_inlay::predicate;
/// let always = predicate(|| true);
/// assert!(always());
/// ```
#[must_use]
pub fn predicate<F>(callback: F) -> Predicate
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    Box::new(callback)
}

/// Maps a leaf's name and literal arguments to a callback.
///
/// Returning `None` is not an error: the leaf then always evaluates true.
/// Any `Fn(&str, &[String]) -> Option<Predicate>` closure is a resolver.
pub trait Resolver {
    /// Resolve the predicate called `name` with `args`.
    fn resolve(&self, name: &str, args: &[String]) -> Option<Predicate>;
}

impl<F> Resolver for F
where
    F: Fn(&str, &[String]) -> Option<Predicate>,
{
    fn resolve(&self, name: &str, args: &[String]) -> Option<Predicate> {
        self(name, args)
    }
}

/// Resolver that binds nothing, leaving every leaf always true.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unresolved;

impl Resolver for Unresolved {
    fn resolve(&self, _name: &str, _args: &[String]) -> Option<Predicate> {
        None
    }
}

/// Bind every leaf of `expression` through `resolver`, replacing any
/// previous binding.
///
/// Recurses once per tree level; trees from [`parse`](crate::parse) are at
/// most [`MAX_DEPTH`](crate::MAX_DEPTH) levels deep.
pub fn bind<R>(expression: &mut Expression, resolver: &R)
where
    R: Resolver + ?Sized,
{
    match expression {
        Expression::Empty => {}
        Expression::Leaf(leaf) => {
            leaf.predicate = resolver.resolve(leaf.name(), leaf.args());
            if leaf.predicate.is_none() {
                log::debug!("predicate `{leaf}` left unresolved; it will evaluate true");
            }
        }
        Expression::Operation(operation) => {
            let (left, right) = operation.operands_mut();
            if let Some(left) = left {
                bind(left, resolver);
            }
            bind(right, resolver);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Operator;
    use crate::tree::Operation;
    use std::sync::Mutex;

    fn pair() -> Expression {
        let left = Expression::leaf("a", vec!["1".into()]);
        let right = Expression::Operation(Operation::negate(Expression::leaf("b", Vec::new())));
        match Operation::binary(Operator::And, left, right) {
            Some(operation) => Expression::Operation(operation),
            None => panic!("AND is binary"),
        }
    }

    #[test]
    fn resolves_every_leaf_with_name_and_args() {
        let seen = Mutex::new(Vec::new());
        let mut expression = pair();
        bind(&mut expression, &|name: &str, args: &[String]| {
            if let Ok(mut seen) = seen.lock() {
                seen.push((name.to_string(), args.to_vec()));
            }
            Some(predicate(|| true))
        });
        let seen = seen.into_inner().unwrap_or_default();
        assert_eq!(
            seen,
            vec![
                ("a".to_string(), vec!["1".to_string()]),
                ("b".to_string(), Vec::new()),
            ]
        );
        assert!(expression.leaves().iter().all(|leaf| leaf.is_resolved()));
    }

    #[test]
    fn rebinding_replaces_previous_callbacks() {
        let mut expression = pair();
        bind(&mut expression, &|_: &str, _: &[String]| Some(predicate(|| true)));
        bind(&mut expression, &Unresolved);
        assert!(expression.leaves().iter().all(|leaf| !leaf.is_resolved()));
    }

    #[test]
    fn empty_expression_needs_no_binding() {
        let mut expression = Expression::Empty;
        bind(&mut expression, &Unresolved);
        assert!(expression.leaves().is_empty());
    }
}
