use log::{info, warn};

use crate::error::CoreError;
use crate::mvu::entry::{Effect, EntryModel, Msg, update};
use crate::storage::{Notifier, Storage};

/// Collaborators the effect drain needs.
#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub storage: &'a dyn Storage,
    pub notifier: &'a dyn Notifier,
}

/// Feeds one input through the entry state machine and applies the resulting
/// effects against the collaborators. Effects are terminal here: unlike a
/// full MVU loop, nothing is fed back into `update`.
///
/// # Errors
///
/// Returns `Err` if a commit or delete fails in storage. The hole-in-one
/// announcement is informational only; its failure is logged and swallowed.
pub async fn run_entry(model: &mut EntryModel, msg: Msg, deps: Deps<'_>) -> Result<(), CoreError> {
    for effect in update(model, msg) {
        match effect {
            Effect::CommitScore(score) => {
                info!(
                    "commit: round {} player {} hole {} gross {} points {}",
                    score.round_id,
                    score.player_id,
                    score.hole_number,
                    score.gross_strokes,
                    score.stableford_points
                );
                deps.storage.upsert_score(&score).await?;
            }
            Effect::ClearScore {
                round_id,
                player_id,
                hole_number,
            } => {
                deps.storage
                    .delete_score(round_id, player_id, hole_number)
                    .await?;
            }
            Effect::AnnounceHoleInOne {
                round_id,
                player_id,
                hole_number,
            } => {
                if let Err(e) = deps
                    .notifier
                    .hole_in_one(round_id, player_id, hole_number)
                    .await
                {
                    warn!("hole-in-one announcement failed: {e}");
                }
            }
        }
    }
    Ok(())
}
