use tally_eval::{next_fixture, Fixture, PointsTable};
use tally_ir::Statement;

use crate::CliError;

/// Statement text of the fixture following the last game in `source`.
///
/// Teams are the ones seen in `source`, in points table registration order.
pub fn next(source: &str) -> Result<String, CliError> {
    let program = tally_parse::parse(source)?;
    let results = tally_eval::evaluate(&program)?;
    let table = PointsTable::from_results(&results);
    let teams: Vec<&str> = table.iter().map(|(team, _)| team).collect();

    let Some(Statement::Game(last)) = program.statements.last() else {
        return Err(CliError::EmptyInput);
    };
    let previous = Fixture::new(last.left_team.literal(), last.right_team.literal())
        .with_score(last.left_score.literal(), last.right_score.literal());

    let fixture = next_fixture(&teams, &previous)
        .ok_or_else(|| CliError::NoIdleTeam(previous.to_statement()))?;
    Ok(format!("{}\n", fixture.to_statement()))
}
