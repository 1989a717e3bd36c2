//! Expression lexer converting raw text into typed tokens.
//!
//! Every token kind owns a regular expression. At each step all of them are
//! searched in the unconsumed suffix and the closest match wins, ties going to
//! the kind declared first in [`TokenKind`]. Input skipped over by the closest
//! match, or left over when nothing matches, is rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{ExpressionError, LexErrorInfo};

/// Token category. Declaration order is the tie-break precedence used when
/// two kinds match at the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// One of `(`, `[` or `{`.
    DelimOpen,
    /// One of `)`, `]` or `}`.
    DelimClose,
    /// Whitespace and commas. Never emitted.
    Separator,
    /// Operator symbol or operator word.
    Operator,
    /// Number or single-quoted string.
    Literal,
    /// Predicate name.
    Word,
}

impl TokenKind {
    /// All kinds in tie-break order.
    pub const ALL: [Self; 6] = [
        Self::DelimOpen,
        Self::DelimClose,
        Self::Separator,
        Self::Operator,
        Self::Literal,
        Self::Word,
    ];
}

/// A lexed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Category of the token.
    pub kind: TokenKind,
    /// Token text. Quoted literals carry their content without the quotes.
    pub text: String,
    /// Byte offset of the token within the expression.
    pub offset: usize,
}

impl Token {
    /// Create a token of `kind` at `offset`.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }
}

impl TokenKind {
    const fn pattern(self) -> &'static str {
        match self {
            Self::DelimOpen => r"[(\[{]",
            Self::DelimClose => r"[)\]}]",
            Self::Separator => r"[\s,]+",
            // Operator words must be followed by whitespace so that `orc` or
            // `notify` stay words. The whitespace is trimmed off again below.
            Self::Operator => r"!=|[&|^!]|(?:and|or|xor|not)\s",
            Self::Literal => r"'[^']*'|-?\d+(?:\.\d+)?",
            Self::Word => r"[A-Za-z_]+",
        }
    }
}

struct Matcher {
    kind: TokenKind,
    regex: Regex,
}

/// Patterns are compile-time constants and cannot fail to compile.
fn matcher(kind: TokenKind) -> Matcher {
    Matcher {
        kind,
        regex: Regex::new(kind.pattern()).unwrap_or_else(|_| unreachable!()),
    }
}

/// One matcher per kind, in tie-break order.
static MATCHERS: LazyLock<[Matcher; 6]> = LazyLock::new(|| TokenKind::ALL.map(matcher));

/// Closest match of one token kind inside the remaining input.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    kind: TokenKind,
    start: usize,
    len: usize,
    text: &'a str,
}

impl<'a> Candidate<'a> {
    fn from_match(kind: TokenKind, found: regex::Match<'a>) -> Self {
        let raw = found.as_str();
        let (len, text) = match kind {
            TokenKind::Operator => {
                let word = raw.trim_end();
                (word.len(), word)
            }
            TokenKind::Literal => {
                let unquoted = raw
                    .strip_prefix('\'')
                    .and_then(|rest| rest.strip_suffix('\''))
                    .unwrap_or(raw);
                (raw.len(), unquoted)
            }
            _ => (raw.len(), raw),
        };
        Self {
            kind,
            start: found.start(),
            len,
            text,
        }
    }
}

fn closest_match(remaining: &str) -> Option<Candidate<'_>> {
    let mut best: Option<Candidate<'_>> = None;
    for Matcher { kind, regex } in MATCHERS.iter() {
        let Some(found) = regex.find(remaining) else {
            continue;
        };
        // Strictly smaller so that the earlier kind keeps a tie.
        if best.is_none_or(|current| found.start() < current.start) {
            best = Some(Candidate::from_match(*kind, found));
        }
    }
    best
}

/// Split `expression` into tokens, dropping separators.
///
/// # Errors
/// Returns [`ExpressionError::Lex`] when part of the input is recognised by
/// no token pattern.
///
/// # Examples
/// ```
/// use predicate_inlay::{tokenize, TokenKind};
/// let tokens = tokenize("f 'x' and g").expect("example is well formed");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Word, TokenKind::Literal, TokenKind::Operator, TokenKind::Word]
/// );
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut offset = 0usize;

    while let Some(remaining) = expression.get(offset..).filter(|rest| !rest.is_empty()) {
        let Some(candidate) = closest_match(remaining) else {
            return Err(ExpressionError::Lex(LexErrorInfo::new(remaining, offset)));
        };
        if candidate.start > 0 {
            let skipped = remaining.get(..candidate.start).unwrap_or(remaining);
            return Err(ExpressionError::Lex(LexErrorInfo::new(skipped, offset)));
        }
        if candidate.kind != TokenKind::Separator {
            log::trace!(
                "lexed {:?} `{}` at byte {offset}",
                candidate.kind,
                candidate.text
            );
            tokens.push(Token::new(candidate.kind, candidate.text, offset));
        }
        offset += candidate.len;
    }

    Ok(tokens)
}
