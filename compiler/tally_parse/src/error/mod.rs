//! Parse error types.
//!
//! Parsing is fail-fast: the first grammar violation ends the parse and
//! no partial [`Program`](tally_ir::Program) is produced. Each error knows
//! its [`ErrorCode`] and can render itself as a [`Diagnostic`].

use tally_diagnostic::{Diagnostic, ErrorCode};
use tally_ir::{Span, Token, TokenKind};

const GAME_SHAPE_NOTE: &str = "a game is written `<team> <score>-<score> <team>;`";

/// A grammar violation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lookahead token was not the kind the grammar requires next.
    #[error("expected {expected}, found {}", describe(.found, .text))]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        text: String,
        span: Span,
    },

    /// A statement did not open with `TEAM_NAME TEAM_SCORE`.
    ///
    /// `text` and `span` belong to the first token of the pair that broke
    /// the rule.
    #[error("expected a game statement, found {current} followed by {peek}")]
    UnexpectedStatementStart {
        current: TokenKind,
        peek: TokenKind,
        text: String,
        span: Span,
    },

    /// A score has more digits than a `u32` holds.
    #[error("score `{text}` is out of range")]
    ScoreOutOfRange { text: String, span: Span },
}

fn describe(kind: &TokenKind, text: &str) -> String {
    match *kind {
        TokenKind::Eof => "end of input".to_string(),
        TokenKind::Illegal => format!("illegal character `{}`", text.escape_debug()),
        _ => format!("{kind} `{text}`"),
    }
}

impl ParseError {
    pub(crate) fn unexpected(expected: TokenKind, found: &Token) -> Self {
        ParseError::UnexpectedToken {
            expected,
            found: found.kind,
            text: found.text.clone(),
            span: found.span,
        }
    }

    pub(crate) fn bad_statement_start(current: &Token, peek: &Token) -> Self {
        let offending = if current.is(TokenKind::TeamName) {
            peek
        } else {
            current
        };
        ParseError::UnexpectedStatementStart {
            current: current.kind,
            peek: peek.kind,
            text: offending.text.clone(),
            span: offending.span,
        }
    }

    /// Kind of the token that caused the error, when one did.
    fn offending_kind(&self) -> Option<TokenKind> {
        match self {
            ParseError::UnexpectedToken { found, .. } => Some(*found),
            ParseError::UnexpectedStatementStart { current, peek, .. } => {
                if *current == TokenKind::TeamName {
                    Some(*peek)
                } else {
                    Some(*current)
                }
            }
            ParseError::ScoreOutOfRange { .. } => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        if self.offending_kind() == Some(TokenKind::Illegal) {
            return ErrorCode::E0001;
        }
        match self {
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::UnexpectedStatementStart { .. } => ErrorCode::E1002,
            ParseError::ScoreOutOfRange { .. } => ErrorCode::E1003,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedStatementStart { span, .. }
            | ParseError::ScoreOutOfRange { span, .. } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ParseError::UnexpectedToken { expected, .. } => {
                let diag = diag
                    .with_label(self.span(), format!("expected {expected}"))
                    .with_note(GAME_SHAPE_NOTE);
                match expected {
                    TokenKind::ScoreSeparator => {
                        diag.with_suggestion("put `-` between the two scores")
                    }
                    TokenKind::GameSeparator => diag.with_suggestion("end the game with `;`"),
                    _ => diag,
                }
            }
            ParseError::UnexpectedStatementStart { current, .. } => {
                let label = if *current == TokenKind::TeamName {
                    "expected the home team's score"
                } else {
                    "expected a team name"
                };
                diag.with_label(self.span(), label).with_note(GAME_SHAPE_NOTE)
            }
            ParseError::ScoreOutOfRange { .. } => diag
                .with_label(self.span(), "score too large")
                .with_note(format!("scores must be at most {}", u32::MAX)),
        }
    }
}
