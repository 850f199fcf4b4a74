use serde::{Deserialize, Serialize};

use crate::model::{RoundBundle, Score};
use crate::score::score_aggregators::{
    PlayerStanding, holes_completed, total_stableford_points,
};

/// Ranking rule shared by every leaderboard: descending Stableford points,
/// ties broken by the lower playing handicap.
pub fn rank_standings(standings: &mut [PlayerStanding]) {
    standings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.playing_handicap.cmp(&b.playing_handicap))
    });
}

/// Walks ranked standings assigning leaderboard positions; entries equal on
/// both points and handicap share a position, and the next distinct entry
/// skips past them.
#[must_use]
pub fn standings_with_positions(standings: &[PlayerStanding]) -> Vec<(usize, &PlayerStanding)> {
    let mut pos = 1;
    let mut same_rank_count = 0;
    let mut last_key = standings
        .first()
        .map(|s| (s.total_points, s.playing_handicap))
        .unwrap_or_default();

    standings
        .iter()
        .map(|standing| {
            let key = (standing.total_points, standing.playing_handicap);
            if key != last_key {
                pos += same_rank_count;
                same_rank_count = 0;
            }
            same_rank_count += 1;
            last_key = key;
            (pos, standing)
        })
        .collect()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GlobalStanding {
    pub round_id: i64,
    pub round_name: String,
    pub player_id: i64,
    pub player_name: String,
    pub playing_handicap: i32,
    pub total_points: i32,
    pub holes_completed: usize,
    /// Hole numbers where the "not passed red" marker is set, ascending.
    pub red_marker_holes: Vec<i32>,
}

/// Flattens every (round, player) pair across the supplied rounds into one
/// board under the same ranking rule as the per-round leaderboard. A player
/// active in two rounds appears once per round.
#[must_use]
pub fn global_leaderboard(bundles: &[RoundBundle]) -> Vec<GlobalStanding> {
    let mut entries: Vec<GlobalStanding> = bundles
        .iter()
        .flat_map(|bundle| {
            bundle.players.iter().map(|player| GlobalStanding {
                round_id: bundle.round.round_id,
                round_name: bundle.round.name.clone(),
                player_id: player.player_id,
                player_name: player.name.clone(),
                playing_handicap: player.playing_handicap,
                total_points: total_stableford_points(&bundle.scores, player.player_id),
                holes_completed: holes_completed(&bundle.scores, player.player_id),
                red_marker_holes: red_marker_holes(&bundle.scores, player.player_id),
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.playing_handicap.cmp(&b.playing_handicap))
    });
    entries
}

#[must_use]
pub fn red_marker_holes(scores: &[Score], player_id: i64) -> Vec<i32> {
    let mut holes: Vec<i32> = scores
        .iter()
        .filter(|score| score.player_id == player_id && score.not_passed_red)
        .map(|score| score.hole_number)
        .collect();
    holes.sort_unstable();
    holes
}
