use super::*;

fn row(id: i64, wins: u32, matches_played: u32) -> StandingRow {
    StandingRow {
        id: PlayerId(id),
        name: format!("Player {}", id),
        wins,
        matches_played,
    }
}

fn ids(standings: &[StandingRow]) -> Vec<i64> {
    standings.iter().map(|row| row.id.0).collect()
}

fn engine(scores: &[(i64, f64)]) -> RankingEngine {
    RankingEngine::from_scores(scores.iter().map(|&(id, omw)| (PlayerId(id), omw)).collect())
}

// =============================================================================
// OMW computation
// =============================================================================

#[test]
fn omw_sums_opponent_wins_over_matches_played() {
    let standings = vec![row(1, 1, 1), row(3, 1, 1), row(2, 0, 1), row(4, 0, 1)];
    let matches = vec![
        Match::decisive(PlayerId(1), PlayerId(2)),
        Match::decisive(PlayerId(3), PlayerId(4)),
    ];

    let omw = opponent_wins(&standings, &matches);

    assert_eq!(omw[&PlayerId(1)], 0.0);
    assert_eq!(omw[&PlayerId(3)], 0.0);
    assert_eq!(omw[&PlayerId(2)], 1.0);
    assert_eq!(omw[&PlayerId(4)], 1.0);
}

#[test]
fn omw_is_zero_without_matches() {
    let standings = vec![row(1, 0, 0), row(2, 0, 0)];

    let omw = opponent_wins(&standings, &[]);

    assert_eq!(omw[&PlayerId(1)], 0.0);
    assert_eq!(omw[&PlayerId(2)], 0.0);
}

#[test]
fn omw_counts_tied_matches_as_played() {
    // 2 faced the only winner once in two matches, 3 only faced winless 2
    let standings = vec![row(1, 1, 1), row(2, 0, 2), row(3, 0, 1)];
    let matches = vec![
        Match::decisive(PlayerId(1), PlayerId(2)),
        Match::tie(PlayerId(2), PlayerId(3)),
    ];

    let omw = opponent_wins(&standings, &matches);

    assert_eq!(omw[&PlayerId(2)], 0.5);
    assert_eq!(omw[&PlayerId(3)], 0.0);
}

// =============================================================================
// Single pass
// =============================================================================

#[test]
fn pass_keeps_empty_and_single_standings() {
    let engine = RankingEngine::default();

    assert!(engine.apply_pass(&[]).is_empty());
    assert_eq!(ids(&engine.apply_pass(&[row(7, 2, 3)])), vec![7]);
}

#[test]
fn pass_swaps_tied_pair_with_higher_omw_behind() {
    let engine = engine(&[(1, 0.5), (2, 1.5)]);
    let standings = vec![row(1, 1, 2), row(2, 1, 2)];

    assert_eq!(ids(&engine.apply_pass(&standings)), vec![2, 1]);
}

#[test]
fn pass_swaps_last_pair_without_losing_players() {
    let engine = engine(&[(1, 3.0), (2, 1.0), (3, 2.0)]);
    let standings = vec![row(1, 1, 2), row(2, 1, 2), row(3, 1, 2)];

    assert_eq!(ids(&engine.apply_pass(&standings)), vec![1, 3, 2]);
}

#[test]
fn pass_never_crosses_win_groups() {
    let engine = engine(&[(1, 0.0), (2, 5.0)]);
    let standings = vec![row(1, 2, 2), row(2, 1, 2)];

    assert_eq!(ids(&engine.apply_pass(&standings)), vec![1, 2]);
}

#[test]
fn pass_leaves_equal_omw_in_store_order() {
    let engine = engine(&[(1, 1.0), (2, 1.0), (3, 1.0)]);
    let standings = vec![row(1, 1, 2), row(2, 1, 2), row(3, 1, 2)];

    assert_eq!(ids(&engine.apply_pass(&standings)), vec![1, 2, 3]);
}

#[test]
fn pass_does_not_recompare_swapped_pair() {
    // After 1 and 2 swap, 1 is not compared with 3 in the same pass
    let engine = engine(&[(1, 0.0), (2, 1.0), (3, 2.0)]);
    let standings = vec![row(1, 1, 2), row(2, 1, 2), row(3, 1, 2)];

    assert_eq!(ids(&engine.apply_pass(&standings)), vec![2, 1, 3]);
}

// =============================================================================
// Fixed point
// =============================================================================

#[test]
fn rank_orders_larger_tied_group_by_omw() {
    let engine = engine(&[(1, 0.0), (2, 1.0), (3, 2.0), (4, 0.0)]);
    let standings = vec![row(1, 1, 2), row(2, 1, 2), row(3, 1, 2), row(4, 0, 2)];

    assert_eq!(ids(&engine.rank(standings)), vec![3, 2, 1, 4]);
}

#[test]
fn rank_is_idempotent() {
    let engine = engine(&[(1, 0.2), (2, 0.9), (3, 0.4), (4, 0.7), (5, 0.1), (6, 0.3)]);
    let standings = vec![
        row(1, 2, 3),
        row(2, 2, 3),
        row(3, 2, 3),
        row(4, 1, 3),
        row(5, 1, 3),
        row(6, 1, 3),
    ];

    let once = engine.rank(standings);
    let twice = engine.rank(once.clone());

    assert_eq!(once, twice);
    assert_eq!(ids(&once), vec![2, 3, 1, 4, 6, 5]);
}

#[test]
fn rank_standings_uses_match_history() {
    // 2 beat a player who went on to win, 1 beat a player who never did
    let standings = vec![row(1, 1, 1), row(2, 1, 1), row(3, 1, 2), row(4, 0, 1), row(5, 0, 1)];
    let matches = vec![
        Match::decisive(PlayerId(1), PlayerId(4)),
        Match::decisive(PlayerId(2), PlayerId(3)),
        Match::decisive(PlayerId(3), PlayerId(5)),
    ];

    let ranked = rank_standings(standings, &matches);

    assert_eq!(ids(&ranked), vec![2, 3, 1, 4, 5]);
}
