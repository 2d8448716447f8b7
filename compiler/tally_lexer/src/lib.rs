//! Lexer for the tally language.
//!
//! [`Lexer`] is pull-based: each [`Lexer::next_token`] call scans exactly
//! one token. It never fails. Characters outside the language become
//! `ILLEGAL` tokens and are left for the parser to reject, and once the
//! input is exhausted every further call returns `EOF`.
//!
//! # Team names
//!
//! A team name is a run of ASCII letters and underscores that may contain
//! single embedded spaces. A space continues the name only when the byte
//! right after it is a letter or underscore, so `Manchester United 2-0`
//! yields `Manchester United` and the space before `2` ends the name.

pub mod cursor;

pub use cursor::Cursor;

use cursor::is_name_byte;
use tally_ir::{Span, Token, TokenKind};
use tracing::trace;

/// Pull-based tokenizer over a source string.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
        }
    }

    /// Scan the next token.
    ///
    /// Returns `EOF` with empty text at end of input, and keeps returning it.
    pub fn next_token(&mut self) -> Token {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();

        let token = if self.cursor.is_eof() {
            Token::new(TokenKind::Eof, "", Span::point(offset(start)))
        } else {
            match self.cursor.current() {
                b'-' => self.single(start, TokenKind::ScoreSeparator),
                b';' => self.single(start, TokenKind::GameSeparator),
                b'0'..=b'9' => self.score(start),
                b if is_name_byte(b) => self.team_name(start),
                _ => self.illegal(start),
            }
        };

        trace!(
            kind = %token.kind,
            text = %token.text,
            span = %token.span,
            "token"
        );
        token
    }

    fn single(&mut self, start: usize, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.finish(start, kind)
    }

    fn score(&mut self, start: usize) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.finish(start, TokenKind::TeamScore)
    }

    fn team_name(&mut self, start: usize) -> Token {
        loop {
            let current = self.cursor.current();
            if is_name_byte(current) || (current == b' ' && is_name_byte(self.cursor.peek())) {
                self.cursor.advance();
            } else {
                break;
            }
        }
        self.finish(start, TokenKind::TeamName)
    }

    fn illegal(&mut self, start: usize) -> Token {
        self.cursor.advance_char();
        self.finish(start, TokenKind::Illegal)
    }

    fn finish(&self, start: usize, kind: TokenKind) -> Token {
        let span = Span::new(offset(start), offset(self.cursor.pos()));
        Token::new(kind, self.cursor.slice_from(start), span)
    }
}

/// Byte offset as a span coordinate. Offsets past `u32::MAX` saturate.
#[inline]
fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

/// Lex a whole source into tokens, ending with (and including) `EOF`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
