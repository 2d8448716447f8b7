//! Command handlers for the tally CLI.
//!
//! Handlers take source text and return the text to print. Shared input
//! and error reporting helpers live here in the module root.

use std::io::{self, IsTerminal, Read};

use tally_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use tracing::debug;

use crate::CliError;

mod debug;
mod explain;
mod fmt;
mod next;
mod results;
mod table;

pub use debug::{lex, parse};
pub use explain::explain;
pub use fmt::format;
pub use next::next;
pub use results::results;
pub use table::table;

/// Display name used in diagnostics for input read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

/// Read `path`, or stdin when no path is given.
pub fn read_input(path: Option<&str>) -> Result<String, CliError> {
    let source = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_owned(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Io {
                    path: STDIN_NAME.to_owned(),
                    source,
                })?;
            Ok(buf)
        }
    }?;
    debug!(path = path.unwrap_or(STDIN_NAME), bytes = source.len(), "read input");
    Ok(source)
}

/// Print `err` to stderr, with a source snippet when it points into `source`.
pub fn report_error(err: &CliError, path: &str, source: &str, color: ColorMode) {
    let Some(diagnostic) = err.to_diagnostic() else {
        eprintln!("error: {err}");
        return;
    };
    let mut emitter =
        TerminalEmitter::stderr(color, io::stderr().is_terminal()).with_source(path, source);
    emitter.emit(&diagnostic);
    emitter.flush();
}
