//! Boxed text rendering of a points table.

use std::fmt::Write;

use tally_eval::PointsTable;

const HEADER: [&str; 5] = ["Team", "Wins", "Losses", "Draws", "Points"];

/// Standings as a boxed table, one row per team.
///
/// ```text
/// +-------+------+--------+-------+--------+
/// | Team  | Wins | Losses | Draws | Points |
/// +-------+------+--------+-------+--------+
/// | TeamA |    2 |      0 |     1 |      7 |
/// +-------+------+--------+-------+--------+
/// ```
pub fn render_table(table: &PointsTable) -> String {
    let rows: Vec<[String; 5]> = table
        .standings()
        .into_iter()
        .map(|(team, stats)| {
            [
                team.to_owned(),
                stats.wins.to_string(),
                stats.losses.to_string(),
                stats.draws.to_string(),
                stats.points.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADER.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    rule(&mut out, &widths);
    let _ = write!(out, "|");
    for (heading, width) in HEADER.iter().zip(widths) {
        let _ = write!(out, " {heading:<width$} |");
    }
    out.push('\n');
    rule(&mut out, &widths);

    for row in &rows {
        let _ = write!(out, "|");
        for (i, (cell, width)) in row.iter().zip(widths).enumerate() {
            if i == 0 {
                let _ = write!(out, " {cell:<width$} |");
            } else {
                let _ = write!(out, " {cell:>width$} |");
            }
        }
        out.push('\n');
    }
    if !rows.is_empty() {
        rule(&mut out, &widths);
    }
    out
}

fn rule(out: &mut String, widths: &[usize; 5]) {
    out.push('+');
    for width in widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('+');
    }
    out.push('\n');
}
