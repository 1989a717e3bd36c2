//! Compiling, printing and evaluating expressions for the harness report.

use std::collections::HashMap;
use std::io::Write;
use std::str::FromStr;

use predicate_inlay::{Predicate, PredicateExpression, Resolver, Token, predicate, tokenize};
use tracing::{info, warn};

use crate::error::CliError;

/// Expressions reported when none are given on the command line.
pub const DEMO_EXPRESSIONS: [&str; 3] = [
    "a or b and c",
    "(a or b) and c",
    "(a or b xor orc -800) & d ^ e | func -0.15 0.17 'thing'",
];

/// A `NAME=BOOL` pair supplied with `--set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Predicate name.
    pub name: String,
    /// Value the predicate evaluates to.
    pub value: bool,
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl FromStr for Assignment {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::InvalidAssignment(s.to_string());
        let (name, value) = s.split_once('=').ok_or_else(invalid)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid());
        }
        let value = parse_bool(value).ok_or_else(invalid)?;
        Ok(Self {
            name: name.to_string(),
            value,
        })
    }
}

/// Fixed truth values keyed by predicate name. Arguments are ignored and
/// unknown names stay unresolved.
#[derive(Debug, Clone, Default)]
pub struct Assignments(HashMap<String, bool>);

impl Assignments {
    /// Number of assigned names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no names are assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Assignment> for Assignments {
    fn from_iter<I: IntoIterator<Item = Assignment>>(iter: I) -> Self {
        // Later assignments of the same name win.
        Self(
            iter.into_iter()
                .map(|Assignment { name, value }| (name, value))
                .collect(),
        )
    }
}

impl Resolver for Assignments {
    fn resolve(&self, name: &str, _args: &[String]) -> Option<Predicate> {
        let value = *self.0.get(name)?;
        Some(predicate(move || value))
    }
}

/// Outcome of compiling and evaluating one expression.
#[derive(Debug)]
pub struct Report {
    /// Tokens of the expression, when requested.
    pub tokens: Option<Vec<Token>>,
    /// Rendered tree.
    pub tree: String,
    /// Evaluation result.
    pub result: bool,
}

/// Compile `expression`, bind it to `assignments` and evaluate it.
///
/// # Errors
/// Returns [`CliError::Expression`] when the expression does not compile.
pub fn evaluate(
    expression: &str,
    assignments: &Assignments,
    with_tokens: bool,
) -> Result<Report, CliError> {
    let tokens = with_tokens.then(|| tokenize(expression)).transpose()?;
    let compiled = PredicateExpression::new(expression, assignments)?;
    Ok(Report {
        tokens,
        tree: compiled.to_string(),
        result: compiled.eval(),
    })
}

fn write_tokens<W: Write>(out: &mut W, tokens: &[Token]) -> std::io::Result<()> {
    write!(out, "tokens:")?;
    for token in tokens {
        write!(out, " {:?}:\"{}\"@{}", token.kind, token.text, token.offset)?;
    }
    writeln!(out)
}

/// Write a report for every expression to `out`.
///
/// Expressions that fail to compile are reported inline and counted; the
/// count is returned.
///
/// # Errors
/// Returns [`CliError::Io`] when writing to `out` fails.
pub fn run<W: Write>(
    out: &mut W,
    expressions: &[String],
    assignments: &Assignments,
    with_tokens: bool,
) -> Result<usize, CliError> {
    let mut failures = 0usize;
    for expression in expressions {
        writeln!(out, "{expression}\n- - - -")?;
        match evaluate(expression, assignments, with_tokens) {
            Ok(report) => {
                info!(expression = %expression, result = report.result, "evaluated expression");
                if let Some(tokens) = &report.tokens {
                    write_tokens(out, tokens)?;
                }
                writeln!(out, "tree:   {}", report.tree)?;
                writeln!(out, "result: {}", report.result)?;
            }
            Err(err) => {
                warn!(expression = %expression, error = %err, "expression rejected");
                failures += 1;
                writeln!(out, "error:  {err}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(failures)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests exercise parsing fallibility")]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a=true", "a", true)]
    #[case("flag = off", "flag", false)]
    #[case("x=1", "x", true)]
    #[case("x=NO", "x", false)]
    fn parses_assignments(#[case] input: &str, #[case] name: &str, #[case] value: bool) {
        let assignment = input.parse::<Assignment>().unwrap();
        assert_eq!(assignment.name, name);
        assert_eq!(assignment.value, value);
    }

    #[rstest]
    #[case("a")]
    #[case("=true")]
    #[case("a=maybe")]
    fn rejects_malformed_assignments(#[case] input: &str) {
        assert!(matches!(
            input.parse::<Assignment>(),
            Err(CliError::InvalidAssignment(_))
        ));
    }

    #[test]
    fn later_assignment_wins() {
        let assignments: Assignments = ["a=true", "a=false"]
            .into_iter()
            .map(|s| s.parse::<Assignment>().unwrap())
            .collect();
        assert_eq!(assignments.len(), 1);
        let report = evaluate("a", &assignments, false).unwrap();
        assert!(!report.result);
    }

    #[test]
    fn unassigned_names_evaluate_true() {
        let report = evaluate("missing", &Assignments::default(), false).unwrap();
        assert!(report.result);
        assert!(report.tokens.is_none());
    }

    #[test]
    fn demo_expressions_compile() {
        for expression in DEMO_EXPRESSIONS {
            assert!(evaluate(expression, &Assignments::default(), true).is_ok());
        }
    }
}
