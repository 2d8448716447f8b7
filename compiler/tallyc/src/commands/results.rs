use std::fmt::Write;

use crate::CliError;

/// One line per game, or a JSON array of results with `json`.
pub fn results(source: &str, json: bool) -> Result<String, CliError> {
    let program = tally_parse::parse(source)?;
    let results = tally_eval::evaluate(&program)?;

    if json {
        let mut out = serde_json::to_string_pretty(&results)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for result in &results {
        let _ = writeln!(out, "{result}");
    }
    Ok(out)
}
