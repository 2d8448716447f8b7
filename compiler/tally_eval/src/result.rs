//! Evaluation output.

use std::fmt;

/// Outcome of one game.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum GameResult {
    /// One side scored strictly more.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Resolved {
        winning_team: String,
        losing_team: String,
        winning_score: u32,
        losing_score: u32,
    },
    /// Equal scores. Teams keep their source order.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Draw {
        left_team: String,
        right_team: String,
        left_score: u32,
        right_score: u32,
    },
}

impl GameResult {
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw { .. })
    }

    /// The winning team, if the game had one.
    pub fn winner(&self) -> Option<&str> {
        match self {
            GameResult::Resolved { winning_team, .. } => Some(winning_team),
            GameResult::Draw { .. } => None,
        }
    }

    /// Both teams: `(winner, loser)` or `(left, right)`.
    pub fn teams(&self) -> (&str, &str) {
        match self {
            GameResult::Resolved {
                winning_team,
                losing_team,
                ..
            } => (winning_team, losing_team),
            GameResult::Draw {
                left_team,
                right_team,
                ..
            } => (left_team, right_team),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Resolved {
                winning_team,
                losing_team,
                winning_score,
                losing_score,
            } => write!(
                f,
                "{winning_team} beat {losing_team} {winning_score}-{losing_score}"
            ),
            GameResult::Draw {
                left_team,
                right_team,
                left_score,
                right_score,
            } => write!(
                f,
                "{left_team} drew with {right_team} {left_score}-{right_score}"
            ),
        }
    }
}
