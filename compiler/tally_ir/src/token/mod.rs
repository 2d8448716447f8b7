//! Token types for the tally lexer.
//!
//! A token is an immutable value: its kind, the exact source text it was
//! scanned from, and where that text sits in the input.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use super::Span;

/// A token with its source text and span.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The placeholder a parser holds before its lookahead is primed.
    pub fn undefined() -> Self {
        Token::new(TokenKind::Undefined, "", Span::DUMMY)
    }

    /// Whether this token has the given kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.text, self.span)
    }
}
