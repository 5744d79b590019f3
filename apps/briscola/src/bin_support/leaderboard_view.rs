use std::fmt::Write;

use briscola::LeaderboardEntry;

const WIDTH: usize = 72;

/// Fixed-width leaderboard table.
pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(WIDTH);
    let thin = "-".repeat(WIDTH);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{:^WIDTH$}", "LEADERBOARD");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<5}{:<20}{:<20}{:<12}{}",
        "Pos.", "Name", "Result (W-T-L)", "Points", "Date"
    );
    let _ = writeln!(out, "{thin}");
    for (i, e) in entries.iter().enumerate() {
        let pos = format!("{}.", i + 1);
        let _ = writeln!(
            out,
            "{:<5}{:<20}{:<20}{:<12}{}",
            pos,
            e.name,
            e.score_line(),
            e.total_points,
            e.date
        );
    }
    let _ = write!(out, "{thin}");
    out
}
