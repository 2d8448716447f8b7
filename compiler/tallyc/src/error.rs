use std::io;

use tally_diagnostic::Diagnostic;
use tally_eval::EvalError;
use tally_parse::ParseError;

/// Any failure a command can report.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid option `{0}`")]
    InvalidOption(String),

    #[error("input should not be empty")]
    EmptyInput,

    #[error("no team is idle after `{0}`")]
    NoIdleTeam(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("cannot serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Source-located diagnostic, for errors that point into the input.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            CliError::Parse(err) => Some(err.to_diagnostic()),
            CliError::Eval(err) => Some(err.to_diagnostic()),
            CliError::Io { .. }
            | CliError::InvalidOption(_)
            | CliError::EmptyInput
            | CliError::NoIdleTeam(_)
            | CliError::Json(_) => None,
        }
    }
}
