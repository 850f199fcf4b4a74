use log::debug;

use crate::error::CoreError;
use crate::model::{RoundBundle, stroke_indexes};
use crate::mvu::entry::EntryModel;
use crate::score::score_aggregators::{
    PlayerStanding, RoundStatistics, build_standings, round_complete, round_statistics,
};
use crate::score::sort_utils::{GlobalStanding, global_leaderboard};
use crate::storage::Storage;

/// # Errors
///
/// Will return `Err` if any storage call fails.
pub async fn get_round_bundle(
    storage: &dyn Storage,
    round_id: i64,
) -> Result<RoundBundle, CoreError> {
    let round = storage.get_round(round_id).await?;
    let holes = storage.get_holes_for_round(round_id).await?;
    let players = storage.get_players_for_round(round_id).await?;
    let scores = storage.get_scores(round_id).await?;
    Ok(RoundBundle {
        round,
        holes,
        players,
        scores,
    })
}

/// # Errors
///
/// Will return `Err` if any storage call fails.
pub async fn get_round_leaderboard(
    storage: &dyn Storage,
    round_id: i64,
) -> Result<Vec<PlayerStanding>, CoreError> {
    let bundle = get_round_bundle(storage, round_id).await?;
    Ok(build_standings(
        &bundle.round,
        &bundle.players,
        &bundle.scores,
    ))
}

/// One board over every active round of the group.
///
/// # Errors
///
/// Will return `Err` if any storage call fails.
pub async fn get_global_leaderboard(
    storage: &dyn Storage,
    group_id: i64,
) -> Result<Vec<GlobalStanding>, CoreError> {
    let rounds = storage.get_active_rounds_for_group(group_id).await?;
    debug!("global leaderboard over {} active rounds", rounds.len());

    let mut bundles = Vec::with_capacity(rounds.len());
    for round in rounds {
        bundles.push(get_round_bundle(storage, round.round_id).await?);
    }
    Ok(global_leaderboard(&bundles))
}

/// Per-player statistics, gated on completion: `None` until every player has
/// a record on every hole.
///
/// # Errors
///
/// Will return `Err` if any storage call fails.
pub async fn get_round_statistics(
    storage: &dyn Storage,
    round_id: i64,
) -> Result<Option<Vec<(i64, RoundStatistics)>>, CoreError> {
    let bundle = get_round_bundle(storage, round_id).await?;
    if !round_complete(&bundle.holes, &bundle.players, &bundle.scores) {
        return Ok(None);
    }
    Ok(Some(
        bundle
            .players
            .iter()
            .map(|player| {
                (
                    player.player_id,
                    round_statistics(player.player_id, &bundle.holes, &bundle.scores),
                )
            })
            .collect(),
    ))
}

/// Builds an entry session for one (player, hole) cell of a round, seeded
/// with the cell's committed score if one exists.
///
/// # Errors
///
/// Will return `Err` if a storage call fails or the player or hole is not
/// part of the round.
pub async fn open_entry_session(
    storage: &dyn Storage,
    round_id: i64,
    player_id: i64,
    hole_number: i32,
) -> Result<EntryModel, CoreError> {
    let bundle = get_round_bundle(storage, round_id).await?;

    let player = bundle
        .players
        .iter()
        .find(|player| player.player_id == player_id)
        .cloned()
        .ok_or_else(|| CoreError::NotFound(format!("player {player_id} in round {round_id}")))?;
    let hole = bundle
        .holes
        .iter()
        .find(|hole| hole.number == hole_number)
        .cloned()
        .ok_or_else(|| CoreError::NotFound(format!("hole {hole_number} in round {round_id}")))?;
    let existing = bundle
        .scores
        .iter()
        .find(|score| score.player_id == player_id && score.hole_number == hole_number)
        .cloned();

    Ok(EntryModel::new(
        &bundle.round,
        player,
        hole,
        stroke_indexes(&bundle.holes),
        existing,
    ))
}
