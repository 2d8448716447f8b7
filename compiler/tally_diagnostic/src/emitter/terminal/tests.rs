#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use tally_ir::Span;

fn render(emitter: TerminalEmitter<Vec<u8>>, diagnostic: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diagnostic);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message("expected SCORE_SEPARATOR, found TEAM_NAME")
        .with_label(Span::new(25, 30), "expected SCORE_SEPARATOR")
        .with_note("a game is written `Home 1-0 Away;`")
}

#[test]
fn test_terminal_emitter_no_color_without_source() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true);
    let text = render(emitter, &sample_diagnostic());

    assert!(text.starts_with("error[E1001]: expected SCORE_SEPARATOR, found TEAM_NAME\n"));
    assert!(text.contains("--> 25..30: expected SCORE_SEPARATOR"));
    assert!(text.contains("= note: a game is written"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_renders_snippet() {
    let source = "TeamA 2-0 TeamB;\nTeamA 2 TeamB;\n";
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected SCORE_SEPARATOR, found TEAM_NAME")
        .with_label(Span::new(25, 30), "expected SCORE_SEPARATOR");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("league.tally", source);

    let text = render(emitter, &diag);
    let expected = "\
error[E1001]: expected SCORE_SEPARATOR, found TEAM_NAME
  --> league.tally:2:9
  |
2 | TeamA 2 TeamB;
  |         ^^^^^ expected SCORE_SEPARATOR

";
    assert_eq!(text, expected);
}

#[test]
fn test_terminal_emitter_with_color() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    let text = render(emitter, &sample_diagnostic());
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1001"));
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_underline_counts_characters() {
    let source = "A 1\u{e9}0 B;";
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("expected SCORE_SEPARATOR, found illegal character `\u{e9}`")
        .with_label(Span::new(3, 5), "expected SCORE_SEPARATOR");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("cup.tally", source);

    let text = render(emitter, &diag);
    assert!(text.contains("  --> cup.tally:1:4\n"));
    assert!(text.contains("  |    ^ expected SCORE_SEPARATOR\n"));
}

#[test]
fn test_empty_span_gets_one_caret() {
    let source = "A 1-0 B";
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected GAME_SEPARATOR, found end of input")
        .with_label(Span::new(7, 7), "expected GAME_SEPARATOR");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("cup.tally", source);

    let text = render(emitter, &diag);
    assert!(text.contains("  |        ^ expected GAME_SEPARATOR\n"));
}

#[test]
fn test_suggestions_render_as_help() {
    let diag = sample_diagnostic().with_suggestion("put `-` between the two scores");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let text = render(emitter, &diag);
    assert!(text.ends_with(
        "  = note: a game is written `Home 1-0 Away;`\n  = help: put `-` between the two scores\n\n"
    ));
}
