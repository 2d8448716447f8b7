use tally_eval::{PointsTable, Scoring};

use crate::{render_table, CliError};

/// Parse, evaluate and render the standings of `source`.
pub fn table(source: &str, scoring: Scoring) -> Result<String, CliError> {
    if source.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }
    let program = tally_parse::parse(source)?;
    let results = tally_eval::evaluate(&program)?;
    let mut table = PointsTable::with_scoring(scoring);
    table.extend(&results);
    Ok(render_table(&table))
}
