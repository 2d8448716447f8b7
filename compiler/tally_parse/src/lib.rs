//! Recursive descent parser for the tally language.
//!
//! The grammar has a single statement form, repeated until end of input:
//!
//! ```text
//! statement := TEAM_NAME TEAM_SCORE SCORE_SEPARATOR TEAM_SCORE TEAM_NAME GAME_SEPARATOR
//! ```
//!
//! The parser pulls tokens from a [`Lexer`] into a two-token window
//! (`current`, `peek`). A statement is chosen by looking at both, and each
//! following token is checked with an expect-peek step that either advances
//! or fails. The first failure aborts the whole parse.

mod error;

pub use error::ParseError;

use tally_ir::{GameStatement, Program, Score, Statement, Team, Token, TokenKind};
use tally_lexer::Lexer;
use tracing::{debug, trace};

/// Parser state: the lexer plus a two-token lookahead window.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
}

impl<'a> Parser<'a> {
    /// Create a parser and fill its lookahead window from `lexer`.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::undefined(),
            peek: Token::undefined(),
        };
        parser.advance();
        parser.advance();
        parser
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn peek(&self) -> &Token {
        &self.peek
    }

    /// Shift the window one token forward.
    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(
            kind = %self.current.kind,
            span = %self.current.span,
            "advance"
        );
    }

    /// Advance if the lookahead is `kind`, returning the token now current.
    fn expect_peek(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.peek.is(kind) {
            self.advance();
            Ok(self.current.clone())
        } else {
            Err(ParseError::unexpected(kind, &self.peek))
        }
    }

    fn expect_score(&mut self) -> Result<Score, ParseError> {
        let token = self.expect_peek(TokenKind::TeamScore)?;
        match token.text.parse::<u32>() {
            Ok(value) => Ok(Score::new(token, value)),
            Err(_) => Err(ParseError::ScoreOutOfRange {
                text: token.text,
                span: token.span,
            }),
        }
    }

    /// Parse one statement starting at `current`.
    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match (self.current.kind, self.peek.kind) {
            (TokenKind::TeamName, TokenKind::TeamScore) => {
                self.parse_game_statement().map(Statement::Game)
            }
            _ => Err(ParseError::bad_statement_start(&self.current, &self.peek)),
        }
    }

    /// Parse `TEAM_NAME TEAM_SCORE - TEAM_SCORE TEAM_NAME ;`.
    ///
    /// On entry `current` is the left team. On success `current` is the
    /// closing `;`.
    fn parse_game_statement(&mut self) -> Result<GameStatement, ParseError> {
        let left_team = Team::new(self.current.clone());
        let left_score = self.expect_score()?;
        self.expect_peek(TokenKind::ScoreSeparator)?;
        let right_score = self.expect_score()?;
        let right_team = Team::new(self.expect_peek(TokenKind::TeamName)?);
        let terminator = self.expect_peek(TokenKind::GameSeparator)?;

        let game = GameStatement {
            span: left_team.span().merge(terminator.span),
            left_team,
            left_score,
            right_team,
            right_score,
        };
        debug!(game = %game, span = %game.span, "parsed game");
        Ok(game)
    }

    /// Parse statements until `EOF`.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();
        while !self.current.kind.is_eof() {
            let statement = self.parse_statement()?;
            program.push(statement);
            // Step past the `;` that closed the statement.
            self.advance();
        }
        debug!(statements = program.len(), "parsed program");
        Ok(program)
    }
}

/// Lex and parse `source` in one call.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(Lexer::new(source)).parse()
}
