//! Property-based round-trip tests.
//!
//! For generated programs:
//! 1. print(parse(text)) == text when `text` is already canonical
//! 2. parse(print(p)) == p (idempotence)
//! 3. every printed statement lexes to the fixed statement token shape

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use tally_fmt::{print_program, Printer};
use tally_ir::TokenKind;

fn team_name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex("[A-Za-z_][A-Za-z_]{0,7}").expect("valid regex"),
        1..3,
    )
    .prop_map(|words| words.join(" "))
}

fn statement_strategy() -> impl Strategy<Value = String> {
    (
        team_name_strategy(),
        0u32..200,
        0u32..200,
        team_name_strategy(),
    )
        .prop_map(|(left, ls, rs, right)| format!("{left} {ls}-{rs} {right};"))
}

fn canonical_source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(statement_strategy(), 0..8).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn canonical_text_round_trips(source in canonical_source_strategy()) {
        let program = tally_parse::parse(&source).unwrap();
        prop_assert_eq!(print_program(&program), source);
    }

    #[test]
    fn printing_is_idempotent(source in canonical_source_strategy(), indent in 0usize..6) {
        let program = tally_parse::parse(&source).unwrap();
        let printed = Printer::new().with_indent(indent).print(&program);
        let reparsed = tally_parse::parse(&printed).unwrap();
        prop_assert_eq!(&reparsed, &program);
        prop_assert_eq!(Printer::new().with_indent(indent).print(&reparsed), printed);
    }

    #[test]
    fn printed_statement_has_statement_shape(statement in statement_strategy()) {
        let program = tally_parse::parse(&statement).unwrap();
        let kinds: Vec<TokenKind> = tally_lexer::lex(&print_program(&program))
            .into_iter()
            .map(|token| token.kind)
            .collect();
        prop_assert_eq!(
            kinds,
            vec![
                TokenKind::TeamName,
                TokenKind::TeamScore,
                TokenKind::ScoreSeparator,
                TokenKind::TeamScore,
                TokenKind::TeamName,
                TokenKind::GameSeparator,
                TokenKind::Eof,
            ]
        );
    }
}
