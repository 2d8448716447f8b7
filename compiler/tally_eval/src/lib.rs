//! Tally Eval - evaluator for tally programs.
//!
//! The evaluator walks a [`Program`] once and classifies every game as a
//! [`GameResult::Resolved`] (strict winner) or a [`GameResult::Draw`].
//! Results come back in statement order. Evaluation holds no state between
//! calls.
//!
//! The crate also carries the consumers of those results:
//! - [`PointsTable`]: per-team wins, losses, draws and points
//! - [`next_fixture`]: the idle-team rotation for a three-team round robin

mod errors;
mod result;
mod rotation;
mod table;

pub use errors::EvalError;
pub use result::GameResult;
pub use rotation::{next_fixture, Fixture};
pub use table::{PointsTable, Scoring, TeamStats};

use std::cmp::Ordering;

use tally_ir::{GameStatement, Program, Statement};
use tracing::debug;

/// Classifies the statements of a program.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }

    /// One result per statement, in statement order.
    ///
    /// Fails on the first statement form this evaluator does not know;
    /// no partial results are returned.
    pub fn evaluate(&self, program: &Program) -> Result<Vec<GameResult>, EvalError> {
        let mut results = Vec::with_capacity(program.len());
        for statement in program {
            results.push(self.evaluate_statement(statement)?);
        }
        debug!(results = results.len(), "evaluated program");
        Ok(results)
    }

    fn evaluate_statement(&self, statement: &Statement) -> Result<GameResult, EvalError> {
        match statement {
            Statement::Game(game) => Ok(self.evaluate_game(game)),
            other => Err(EvalError::UnknownStatementKind {
                kind: other.kind_name(),
                span: other.span(),
            }),
        }
    }

    /// Three-way comparison of the two scores.
    pub fn evaluate_game(&self, game: &GameStatement) -> GameResult {
        let left = game.left_score.literal();
        let right = game.right_score.literal();
        let result = match left.cmp(&right) {
            Ordering::Equal => GameResult::Draw {
                left_team: game.left_team.literal().to_owned(),
                right_team: game.right_team.literal().to_owned(),
                left_score: left,
                right_score: right,
            },
            Ordering::Greater => GameResult::Resolved {
                winning_team: game.left_team.literal().to_owned(),
                losing_team: game.right_team.literal().to_owned(),
                winning_score: left,
                losing_score: right,
            },
            Ordering::Less => GameResult::Resolved {
                winning_team: game.right_team.literal().to_owned(),
                losing_team: game.left_team.literal().to_owned(),
                winning_score: right,
                losing_score: left,
            },
        };
        debug!(game = %game, result = %result, "evaluated game");
        result
    }
}

/// Evaluate `program` with a fresh [`Evaluator`].
pub fn evaluate(program: &Program) -> Result<Vec<GameResult>, EvalError> {
    Evaluator::new().evaluate(program)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
