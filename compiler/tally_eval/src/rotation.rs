//! Round-robin rotation for a three-team tournament.
//!
//! After each game the away side stays on as the new home side and the team
//! that sat out comes in as the new away side.

use std::fmt;

/// A scheduled or played game between two named teams.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    pub home: String,
    pub away: String,
    pub home_score: u32,
    pub away_score: u32,
}

impl Fixture {
    /// Unplayed fixture, both scores zero.
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Fixture {
            home: home.into(),
            away: away.into(),
            home_score: 0,
            away_score: 0,
        }
    }

    #[must_use]
    pub fn with_score(mut self, home_score: u32, away_score: u32) -> Self {
        self.home_score = home_score;
        self.away_score = away_score;
        self
    }

    /// Source text of this fixture as a game statement.
    pub fn to_statement(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {};",
            self.home, self.home_score, self.away_score, self.away
        )
    }
}

/// The fixture following `previous`.
///
/// Returns `None` when every team in `teams` played in `previous`.
pub fn next_fixture<S: AsRef<str>>(teams: &[S], previous: &Fixture) -> Option<Fixture> {
    let idle = teams
        .iter()
        .map(AsRef::as_ref)
        .find(|team| *team != previous.home && *team != previous.away)?;
    Some(Fixture::new(previous.away.as_str(), idle))
}
