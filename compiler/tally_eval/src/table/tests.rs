use pretty_assertions::assert_eq;

use super::*;

fn results(source: &str) -> Vec<GameResult> {
    let program = tally_parse::parse(source).unwrap();
    crate::evaluate(&program).unwrap()
}

fn stats(points: u32, wins: u32, losses: u32, draws: u32) -> TeamStats {
    TeamStats {
        points,
        wins,
        losses,
        draws,
    }
}

#[test]
fn default_scoring() {
    assert_eq!(
        Scoring::default(),
        Scoring {
            win: 3,
            draw: 1,
            loss: 0
        }
    );
}

#[test]
fn tournament_table() {
    let table = PointsTable::from_results(&results(
        "TeamA 2-0 TeamB; TeamA 3-0 TeamC; TeamB 0-1 TeamC; TeamA 0-0 TeamB;",
    ));
    assert_eq!(table.len(), 3);
    assert_eq!(table.get("TeamA"), Some(&stats(7, 2, 0, 1)));
    assert_eq!(table.get("TeamB"), Some(&stats(1, 0, 2, 1)));
    assert_eq!(table.get("TeamC"), Some(&stats(3, 1, 1, 0)));
    assert_eq!(table.get("TeamD"), None);
}

#[test]
fn standings_sort_by_points() {
    let table = PointsTable::from_results(&results(
        "TeamA 2-0 TeamB; TeamA 3-0 TeamC; TeamB 0-1 TeamC; TeamA 0-0 TeamB;",
    ));
    let order: Vec<&str> = table.standings().into_iter().map(|(team, _)| team).collect();
    assert_eq!(order, vec!["TeamA", "TeamC", "TeamB"]);
}

#[test]
fn level_teams_keep_registration_order() {
    let table = PointsTable::from_results(&results("B 1-1 A; C 0-0 D;"));
    let order: Vec<&str> = table.standings().into_iter().map(|(team, _)| team).collect();
    assert_eq!(order, vec!["B", "A", "C", "D"]);
}

#[test]
fn winner_registers_before_loser() {
    let table = PointsTable::from_results(&results("Zebras 0-3 Ants; Moles 1-0 Zebras;"));
    let order: Vec<&str> = table.iter().map(|(team, _)| team).collect();
    assert_eq!(order, vec!["Ants", "Zebras", "Moles"]);
}

#[test]
fn level_winner_and_loser_keep_registration_order() {
    let scoring = Scoring {
        win: 1,
        draw: 1,
        loss: 1,
    };
    let mut table = PointsTable::with_scoring(scoring);
    table.extend(&results("Zebras 0-3 Ants;"));
    let order: Vec<&str> = table.standings().into_iter().map(|(team, _)| team).collect();
    assert_eq!(order, vec!["Ants", "Zebras"]);
}

#[test]
fn custom_scoring() {
    let mut table = PointsTable::with_scoring(Scoring {
        win: 2,
        draw: 1,
        loss: 1,
    });
    table.extend(&results("A 1-0 B; A 2-2 B;"));
    assert_eq!(table.get("A"), Some(&stats(3, 1, 0, 1)));
    assert_eq!(table.get("B"), Some(&stats(2, 0, 1, 1)));
    assert_eq!(table.scoring().win, 2);
}

#[test]
fn played_counts_every_outcome() {
    assert_eq!(stats(4, 1, 2, 1).played(), 4);
    assert_eq!(TeamStats::default().played(), 0);
}

#[test]
fn empty_table() {
    let table = PointsTable::new();
    assert!(table.is_empty());
    assert_eq!(table.standings(), vec![]);
}

#[test]
fn record_is_incremental() {
    let mut table = PointsTable::new();
    for result in &results("A 1-0 B; B 1-0 A;") {
        table.record(result);
    }
    assert_eq!(table.get("A"), table.get("B"));
    assert_eq!(table.get("A"), Some(&stats(3, 1, 1, 0)));
}
