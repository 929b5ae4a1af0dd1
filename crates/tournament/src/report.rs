//! Text reports for standings and pairings

use swiss_core::{Pairing, StandingRow};

/// Render the standings as a table, one row per player in rank order
pub fn standings_report(standings: &[StandingRow]) -> String {
    let mut report = String::new();
    report.push_str("=== Standings ===\n");
    report.push_str(&format!(
        "{:>4} {:>6} {:<30} {:>6} {:>8}\n",
        "Rank", "Id", "Player", "Wins", "Matches"
    ));
    report.push_str(&"-".repeat(58));
    report.push('\n');

    for (rank, row) in standings.iter().enumerate() {
        report.push_str(&format!(
            "{:>4} {:>6} {:<30} {:>6} {:>8}\n",
            rank + 1,
            row.id,
            row.name,
            row.wins,
            row.matches_played
        ));
    }

    report
}

/// Render next-round pairings, one line per board
pub fn pairings_report(pairings: &[Pairing]) -> String {
    let mut report = String::new();
    report.push_str("=== Pairings ===\n");

    for (board, pairing) in pairings.iter().enumerate() {
        report.push_str(&format!(
            "{:>3}. {:<30} ({:>4}) vs {:<30} ({:>4})\n",
            board + 1,
            pairing.name1,
            pairing.id1,
            pairing.name2,
            pairing.id2
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiss_core::PlayerId;

    fn row(id: i64, name: &str, wins: u32, matches_played: u32) -> StandingRow {
        StandingRow {
            id: PlayerId(id),
            name: name.to_string(),
            wins,
            matches_played,
        }
    }

    #[test]
    fn test_standings_report_lists_rows_in_order() {
        let report = standings_report(&[row(3, "Carol", 2, 2), row(1, "Alice", 1, 2)]);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[3].contains("Carol"));
        assert!(lines[3].trim_start().starts_with('1'));
        assert!(lines[4].contains("Alice"));
    }

    #[test]
    fn test_pairings_report_numbers_boards() {
        let pairings = vec![Pairing::new(&row(1, "Alice", 1, 1), &row(2, "Bob", 1, 1))];
        let report = pairings_report(&pairings);

        assert!(report.contains("1. Alice"));
        assert!(report.contains("vs Bob"));
    }
}
