//! AST nodes for the tally language.
//!
//! A [`Program`] is an ordered list of [`Statement`]s. Order is significant:
//! it is the order games were played, which is the order the points table
//! replays them.
//!
//! Equality on AST nodes is structural. Team names and score values are
//! compared; spans are not. Two programs parsed from differently spaced
//! text compare equal when they describe the same games.

use std::fmt;

use crate::{Span, Token};

/// A team reference, wrapping its `TEAM_NAME` token.
#[derive(Clone, Debug)]
pub struct Team {
    token: Token,
}

impl Team {
    pub fn new(token: Token) -> Self {
        Team { token }
    }

    /// The team name as written in the source.
    #[inline]
    pub fn literal(&self) -> &str {
        &self.token.text
    }

    pub fn span(&self) -> Span {
        self.token.span
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.literal() == other.literal()
    }
}

impl Eq for Team {}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// A score, wrapping its `TEAM_SCORE` token and the parsed value.
///
/// Unlike [`Team::literal`], [`Score::literal`] returns the number, not the
/// source digits: `007` and `7` are the same score.
#[derive(Clone, Debug)]
pub struct Score {
    token: Token,
    value: u32,
}

impl Score {
    pub fn new(token: Token, value: u32) -> Self {
        Score { token, value }
    }

    #[inline]
    pub fn literal(&self) -> u32 {
        self.value
    }

    pub fn span(&self) -> Span {
        self.token.span
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Score {}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One played match: `<left_team> <left_score>-<right_score> <right_team>;`
#[derive(Clone, Debug)]
pub struct GameStatement {
    pub left_team: Team,
    pub left_score: Score,
    pub right_team: Team,
    pub right_score: Score,
    /// From the first character of the left team to the closing `;`.
    pub span: Span,
}

impl GameStatement {
    /// Canonical rendering, e.g. `Manchester United 2-0 Arsenal;`.
    pub fn literal(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for GameStatement {
    fn eq(&self, other: &Self) -> bool {
        self.left_team == other.left_team
            && self.left_score == other.left_score
            && self.right_team == other.right_team
            && self.right_score == other.right_score
    }
}

impl Eq for GameStatement {}

impl fmt::Display for GameStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {};",
            self.left_team, self.left_score, self.right_score, self.right_team
        )
    }
}

/// Every statement form the grammar knows.
///
/// Marked `#[non_exhaustive]` so consumers in other crates keep a fallback
/// arm; adding a statement form then surfaces as a handled error instead of
/// a silent miss.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Statement {
    Game(GameStatement),
}

impl Statement {
    /// Canonical source rendering of the statement.
    pub fn literal(&self) -> String {
        match self {
            Statement::Game(game) => game.literal(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Statement::Game(game) => game.span,
        }
    }

    /// Short name of the statement form, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Game(_) => "game",
        }
    }
}

impl From<GameStatement> for Statement {
    fn from(game: GameStatement) -> Self {
        Statement::Game(game)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Game(game) => fmt::Display::fmt(game, f),
        }
    }
}

/// A parsed source file: statements in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn push(&mut self, statement: impl Into<Statement>) {
        self.statements.push(statement.into());
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// Literal of the first statement, or `""` for an empty program.
    pub fn literal(&self) -> String {
        self.statements
            .first()
            .map(Statement::literal)
            .unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

impl FromIterator<Statement> for Program {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Program {
            statements: iter.into_iter().collect(),
        }
    }
}
