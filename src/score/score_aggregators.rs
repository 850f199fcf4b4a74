use std::collections::HashMap;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::model::{Hole, Player, Round, RoundMode, Score, ScoreDisplay};
use crate::score::sort_utils::rank_standings;

#[must_use]
pub fn total_stableford_points(scores: &[Score], player_id: i64) -> i32 {
    scores
        .iter()
        .filter(|score| score.player_id == player_id)
        .map(|score| score.stableford_points)
        .sum()
}

/// Holes with any committed record, abandoned ones included.
#[must_use]
pub fn holes_completed(scores: &[Score], player_id: i64) -> usize {
    scores
        .iter()
        .filter(|score| score.player_id == player_id)
        .count()
}

// Quick-mode pickups carry no strokes; tracked-mode pickups keep their
// capped gross and stay in the totals.
fn counted_for_strokes(score: &Score, mode: RoundMode) -> bool {
    !(score.abandoned && mode == RoundMode::Quick)
}

#[must_use]
pub fn total_gross_strokes(scores: &[Score], player_id: i64, mode: RoundMode) -> i32 {
    scores
        .iter()
        .filter(|score| score.player_id == player_id && counted_for_strokes(score, mode))
        .map(|score| score.gross_strokes)
        .sum()
}

#[must_use]
pub fn total_net_strokes(scores: &[Score], player_id: i64, mode: RoundMode) -> i32 {
    scores
        .iter()
        .filter(|score| score.player_id == player_id && counted_for_strokes(score, mode))
        .map(|score| score.net_strokes)
        .sum()
}

/// A round is complete once every player has a record on every hole in play.
#[must_use]
pub fn round_complete(holes: &[Hole], players: &[Player], scores: &[Score]) -> bool {
    players.iter().all(|player| {
        holes.iter().all(|hole| {
            scores
                .iter()
                .any(|score| score.player_id == player.player_id && score.hole_number == hole.number)
        })
    })
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerStanding {
    pub player_id: i64,
    pub player_name: String,
    pub playing_handicap: i32,
    pub total_points: i32,
    pub holes_completed: usize,
    pub total_gross_strokes: i32,
    pub total_net_strokes: i32,
}

/// Per-player totals for one round, ranked for the leaderboard.
#[must_use]
pub fn build_standings(round: &Round, players: &[Player], scores: &[Score]) -> Vec<PlayerStanding> {
    let mode = round.mode();
    let mut standings: Vec<PlayerStanding> = players
        .iter()
        .map(|player| PlayerStanding {
            player_id: player.player_id,
            player_name: player.name.clone(),
            playing_handicap: player.playing_handicap,
            total_points: total_stableford_points(scores, player.player_id),
            holes_completed: holes_completed(scores, player.player_id),
            total_gross_strokes: total_gross_strokes(scores, player.player_id, mode),
            total_net_strokes: total_net_strokes(scores, player.player_id, mode),
        })
        .collect();

    rank_standings(&mut standings);
    standings
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HolePoints {
    pub hole_number: i32,
    pub stableford_points: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RoundStatistics {
    pub eagles: usize,
    pub birdies: usize,
    pub pars: usize,
    pub bogeys: usize,
    pub double_bogeys: usize,
    pub worse: usize,
    pub best_hole: Option<HolePoints>,
    pub worst_hole: Option<HolePoints>,
}

/// Gross-vs-par breakdown of one player's round, plus the best and worst
/// single hole by Stableford points (first occurrence wins a tie). Quick-mode
/// pickups carry gross 0 as a sentinel, not a score, and are skipped in the
/// diff counts. Only meaningful once the round is complete.
#[must_use]
pub fn round_statistics(player_id: i64, holes: &[Hole], scores: &[Score]) -> RoundStatistics {
    let pars: HashMap<i32, i32, RandomState> = holes
        .iter()
        .map(|hole| (hole.number, hole.par))
        .collect();

    let mut player_scores: Vec<&Score> = scores
        .iter()
        .filter(|score| score.player_id == player_id)
        .collect();
    player_scores.sort_by_key(|score| score.hole_number);

    let mut stats = RoundStatistics::default();
    for score in &player_scores {
        if score.abandoned {
            continue;
        }
        let Some(&par) = pars.get(&score.hole_number) else {
            continue;
        };
        match ScoreDisplay::from_i32(score.gross_strokes - par) {
            ScoreDisplay::Eagle => stats.eagles += 1,
            ScoreDisplay::Birdie => stats.birdies += 1,
            ScoreDisplay::Par => stats.pars += 1,
            ScoreDisplay::Bogey => stats.bogeys += 1,
            ScoreDisplay::DoubleBogey => stats.double_bogeys += 1,
            ScoreDisplay::Worse => stats.worse += 1,
        }
    }

    for score in &player_scores {
        let hole = HolePoints {
            hole_number: score.hole_number,
            stableford_points: score.stableford_points,
        };
        if stats
            .best_hole
            .is_none_or(|best| hole.stableford_points > best.stableford_points)
        {
            stats.best_hole = Some(hole);
        }
        if stats
            .worst_hole
            .is_none_or(|worst| hole.stableford_points < worst.stableford_points)
        {
            stats.worst_hole = Some(hole);
        }
    }

    stats
}
