//! Points table built from game results.
//!
//! Teams are registered the first time they appear in the result stream.
//! Within one result the winner is registered before the loser, and in a
//! draw the left team before the right. Standings sort by points, highest
//! first; teams level on points keep registration order.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::GameResult;

/// Points awarded per outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoring {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for Scoring {
    /// Three for a win, one for a draw, nothing for a loss.
    fn default() -> Self {
        Scoring {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

/// Accumulated record of one team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamStats {
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl TeamStats {
    pub fn played(&self) -> u32 {
        self.wins
            .saturating_add(self.losses)
            .saturating_add(self.draws)
    }

    fn record_win(&mut self, scoring: Scoring) {
        self.wins = self.wins.saturating_add(1);
        self.points = self.points.saturating_add(scoring.win);
    }

    fn record_loss(&mut self, scoring: Scoring) {
        self.losses = self.losses.saturating_add(1);
        self.points = self.points.saturating_add(scoring.loss);
    }

    fn record_draw(&mut self, scoring: Scoring) {
        self.draws = self.draws.saturating_add(1);
        self.points = self.points.saturating_add(scoring.draw);
    }
}

/// Per-team statistics in registration order.
#[derive(Clone, Debug, Default)]
pub struct PointsTable {
    scoring: Scoring,
    teams: Vec<(String, TeamStats)>,
    index: FxHashMap<String, usize>,
}

impl PointsTable {
    /// Empty table with the default scoring.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoring(scoring: Scoring) -> Self {
        PointsTable {
            scoring,
            ..Self::default()
        }
    }

    /// Table with the default scoring, filled from `results`.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a GameResult>) -> Self {
        let mut table = Self::new();
        table.extend(results);
        table
    }

    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Add one game to both teams' records.
    pub fn record(&mut self, result: &GameResult) {
        let scoring = self.scoring;
        match result {
            GameResult::Resolved {
                winning_team,
                losing_team,
                ..
            } => {
                self.entry(winning_team).record_win(scoring);
                self.entry(losing_team).record_loss(scoring);
            }
            GameResult::Draw {
                left_team,
                right_team,
                ..
            } => {
                self.entry(left_team).record_draw(scoring);
                self.entry(right_team).record_draw(scoring);
            }
        }
    }

    pub fn extend<'a>(&mut self, results: impl IntoIterator<Item = &'a GameResult>) {
        for result in results {
            self.record(result);
        }
        debug!(teams = self.teams.len(), "updated points table");
    }

    pub fn get(&self, team: &str) -> Option<&TeamStats> {
        self.index.get(team).map(|&i| &self.teams[i].1)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Teams in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TeamStats)> {
        self.teams.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    /// Teams sorted by points, highest first. The sort is stable.
    pub fn standings(&self) -> Vec<(&str, &TeamStats)> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by(|a, b| b.1.points.cmp(&a.1.points));
        rows
    }

    fn entry(&mut self, team: &str) -> &mut TeamStats {
        let i = match self.index.get(team) {
            Some(&i) => i,
            None => {
                let i = self.teams.len();
                self.teams.push((team.to_owned(), TeamStats::default()));
                self.index.insert(team.to_owned(), i);
                i
            }
        };
        &mut self.teams[i].1
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
