//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::fmt::Write;

use tally_ir::Statement;

use crate::CliError;

/// Statement count, then each statement with the spans of its parts in
/// source order.
pub fn parse(source: &str) -> Result<String, CliError> {
    let program = tally_parse::parse(source)?;

    let mut out = String::new();
    let _ = writeln!(out, "Statements: {}", program.len());
    for statement in &program {
        match statement {
            Statement::Game(game) => {
                let _ = writeln!(out, "  game {:?}: {game}", statement.span());
                let (left, right) = (&game.left_team, &game.right_team);
                let (home, away) = (&game.left_score, &game.right_score);
                let _ = writeln!(out, "    team  {left} @ {:?}", left.span());
                let _ = writeln!(out, "    score {home} @ {:?}", home.span());
                let _ = writeln!(out, "    score {away} @ {:?}", away.span());
                let _ = writeln!(out, "    team  {right} @ {:?}", right.span());
            }
            other => {
                let _ = writeln!(out, "  {} {:?}: {other}", other.kind_name(), other.span());
            }
        }
    }
    Ok(out)
}

/// Token stream of `source`, end-of-input token included.
pub fn lex(source: &str) -> String {
    let tokens = tally_lexer::lex(source);
    let mut out = String::new();
    let _ = writeln!(out, "Tokens ({}):", tokens.len());
    for token in &tokens {
        let _ = writeln!(out, "  {token:?}");
    }
    out
}
