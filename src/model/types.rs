use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::score::Score;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Hole {
    pub hole_id: i64,
    pub number: i32,
    pub par: i32,
    pub stroke_index: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub player_id: i64,
    pub name: String,
    pub exact_handicap: f64,
    pub playing_handicap: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Round {
    pub round_id: i64,
    pub name: String,
    pub num_holes: i32,
    /// `None` means a quick round with no persistent group behind it.
    pub group_id: Option<i64>,
    /// Whether the owning group variant tracks the "not passed red" marker.
    pub red_marker: bool,
    pub created: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundMode {
    Quick,
    Tracked,
}

impl Round {
    #[must_use]
    pub fn mode(&self) -> RoundMode {
        if self.group_id.is_some() {
            RoundMode::Tracked
        } else {
            RoundMode::Quick
        }
    }
}

/// Everything the read side needs for one round, fetched in one go.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundBundle {
    pub round: Round,
    pub holes: Vec<Hole>,
    pub players: Vec<Player>,
    pub scores: Vec<Score>,
}

/// The stroke indexes of the holes actually in play, in hole order.
#[must_use]
pub fn stroke_indexes(holes: &[Hole]) -> Vec<i32> {
    holes.iter().map(|hole| hole.stroke_index).collect()
}
