use pretty_assertions::assert_eq;
use tally_diagnostic::ErrorCode;
use tally_ir::Span;

use super::*;

fn eval_source(source: &str) -> Vec<GameResult> {
    let program = tally_parse::parse(source).unwrap();
    evaluate(&program).unwrap()
}

fn resolved(winner: &str, loser: &str, winning_score: u32, losing_score: u32) -> GameResult {
    GameResult::Resolved {
        winning_team: winner.to_owned(),
        losing_team: loser.to_owned(),
        winning_score,
        losing_score,
    }
}

fn draw(left: &str, right: &str, left_score: u32, right_score: u32) -> GameResult {
    GameResult::Draw {
        left_team: left.to_owned(),
        right_team: right.to_owned(),
        left_score,
        right_score,
    }
}

#[test]
fn tournament_results_in_statement_order() {
    let results = eval_source(
        "TeamA 2-0 TeamB;\n\
         TeamA 3-0 TeamC;\n\
         TeamB 0-1 TeamC;\n\
         TeamA 0-0 TeamB;",
    );
    assert_eq!(
        results,
        vec![
            resolved("TeamA", "TeamB", 2, 0),
            resolved("TeamA", "TeamC", 3, 0),
            resolved("TeamC", "TeamB", 1, 0),
            draw("TeamA", "TeamB", 0, 0),
        ]
    );
}

#[test]
fn left_side_wins() {
    assert_eq!(
        eval_source("Lions 5-2 Tigers;"),
        vec![resolved("Lions", "Tigers", 5, 2)]
    );
}

#[test]
fn right_side_wins() {
    assert_eq!(
        eval_source("Lions 1-4 Tigers;"),
        vec![resolved("Tigers", "Lions", 4, 1)]
    );
}

#[test]
fn draw_keeps_source_order() {
    assert_eq!(
        eval_source("Real Madrid 2-2 Manchester United;"),
        vec![draw("Real Madrid", "Manchester United", 2, 2)]
    );
}

#[test]
fn empty_program_has_no_results() {
    assert_eq!(evaluate(&Program::new()).unwrap(), vec![]);
}

#[test]
fn evaluator_is_reusable() {
    let evaluator = Evaluator::new();
    let program = tally_parse::parse("A 1-0 B; B 2-2 C;").unwrap();
    let first = evaluator.evaluate(&program).unwrap();
    let second = evaluator.evaluate(&program).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn large_scores() {
    assert_eq!(
        eval_source("A 4294967295-4294967294 B;"),
        vec![resolved("A", "B", u32::MAX, u32::MAX - 1)]
    );
}

#[test]
fn result_accessors() {
    let win = resolved("A", "B", 2, 1);
    assert!(!win.is_draw());
    assert_eq!(win.winner(), Some("A"));
    assert_eq!(win.teams(), ("A", "B"));

    let tie = draw("C", "D", 0, 0);
    assert!(tie.is_draw());
    assert_eq!(tie.winner(), None);
    assert_eq!(tie.teams(), ("C", "D"));
}

#[test]
fn result_display() {
    assert_eq!(resolved("A", "B", 2, 1).to_string(), "A beat B 2-1");
    assert_eq!(draw("C", "D", 3, 3).to_string(), "C drew with D 3-3");
}

#[test]
fn unknown_statement_error() {
    let err = EvalError::UnknownStatementKind {
        kind: "fixture",
        span: Span::new(4, 12),
    };
    assert_eq!(err.to_string(), "unknown statement kind `fixture`");
    assert_eq!(err.code(), ErrorCode::E6001);
    assert_eq!(err.span(), Span::new(4, 12));

    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E6001);
    assert_eq!(diag.message, "unknown statement kind `fixture`");
    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.labels[0].span, Span::new(4, 12));
}
