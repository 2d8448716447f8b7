//! Command-line option parsing.

use std::path::Path;

use tally_diagnostic::emitter::ColorMode;
use tally_eval::Scoring;

use crate::CliError;

/// Options shared by all commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Input file; stdin when absent.
    pub file: Option<String>,
    pub scoring: Scoring,
    pub json: bool,
    /// Indent for statements after the first in `fmt` output.
    pub indent: usize,
    pub color: ColorMode,
}

/// Parse the arguments that follow the command name.
///
/// The first argument not starting with `-` is the input file.
pub fn parse_options(args: &[String]) -> Result<Options, CliError> {
    let mut options = Options::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--win=") {
            options.scoring.win = number(arg, value)?;
        } else if let Some(value) = arg.strip_prefix("--draw=") {
            options.scoring.draw = number(arg, value)?;
        } else if let Some(value) = arg.strip_prefix("--loss=") {
            options.scoring.loss = number(arg, value)?;
        } else if let Some(value) = arg.strip_prefix("--indent=") {
            options.indent = number(arg, value)?;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = match value {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => return Err(CliError::InvalidOption(arg.clone())),
            };
        } else if arg == "--json" {
            options.json = true;
        } else if arg == "-" && options.file.is_none() {
            // Explicit stdin.
        } else if !arg.starts_with('-') && options.file.is_none() {
            options.file = Some(arg.clone());
        } else {
            return Err(CliError::InvalidOption(arg.clone()));
        }
    }
    Ok(options)
}

/// Whether a first argument that is not a command name runs `table`.
///
/// `-` (stdin), an option, or an existing file all do.
pub fn is_table_shorthand(arg: &str) -> bool {
    arg == "-" || arg.starts_with("--") || Path::new(arg).exists()
}

fn number<T: std::str::FromStr>(arg: &str, value: &str) -> Result<T, CliError> {
    value
        .parse()
        .map_err(|_| CliError::InvalidOption(arg.to_owned()))
}
