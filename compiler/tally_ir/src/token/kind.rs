//! Token kinds for the tally language.

use std::fmt;

/// Every kind of token the lexer can produce.
///
/// `Undefined` is never produced by the lexer. It only marks a parser
/// lookahead slot that has not been filled yet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Undefined,
    /// A team name, possibly with embedded single spaces: `Manchester United`
    TeamName,
    /// A run of decimal digits: `42`
    TeamScore,
    /// `-`
    ScoreSeparator,
    /// `;`
    GameSeparator,
    /// Any character outside the language, carried as-is.
    Illegal,
    Eof,
}

impl TokenKind {
    /// Name used in diagnostics and token dumps.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Undefined => "UNDEFINED",
            TokenKind::TeamName => "TEAM_NAME",
            TokenKind::TeamScore => "TEAM_SCORE",
            TokenKind::ScoreSeparator => "SCORE_SEPARATOR",
            TokenKind::GameSeparator => "GAME_SEPARATOR",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        }
    }

    /// Whether this kind terminates a token stream.
    #[inline]
    pub fn is_eof(self) -> bool {
        self == TokenKind::Eof
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
