//! Error codes for all tally diagnostics.
//!
//! The first digit of a code names the phase that raised it.

use std::fmt;

/// Error codes for all tally diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Character outside the language
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Statement does not start with a team name and a score
    E1002,
    /// Score does not fit in a 32-bit unsigned integer
    E1003,

    // Evaluation Errors (E6xxx)
    /// Statement form the evaluator does not know
    E6001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E6001,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E6001 => "E6001",
        }
    }

    /// One-line explanation of the code.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "illegal character in source",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected a game statement",
            ErrorCode::E1003 => "score out of range",
            ErrorCode::E6001 => "unknown statement kind",
        }
    }

    /// Look a code up by its `E####` name.
    pub fn from_name(name: &str) -> Option<ErrorCode> {
        ErrorCode::ALL.iter().copied().find(|code| code.as_str() == name)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
