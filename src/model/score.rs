use serde::{Deserialize, Serialize};

/// One committed score, unique per (round, player, hole).
///
/// `gross_strokes` 0 is reserved for a picked-up hole; `abandoned` tags the
/// quick-mode variant of that, which aggregation drops from stroke totals.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub round_id: i64,
    pub player_id: i64,
    pub hole_number: i32,
    pub gross_strokes: i32,
    pub strokes_received: i32,
    pub net_strokes: i32,
    pub stableford_points: i32,
    pub not_passed_red: bool,
    pub abandoned: bool,
}

/// Derived fields for one hole, before they land in a [`Score`] record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputedScore {
    pub strokes_received: i32,
    pub net_strokes: i32,
    pub stableford_points: i32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    Worse,
}

impl ScoreDisplay {
    /// Names a gross-vs-par diff. Eagle covers everything at -2 or better.
    #[must_use]
    pub fn from_i32(i: i32) -> Self {
        match i {
            i if i <= -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            _ => Self::Worse,
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}
