use crate::model::{ComputedScore, Hole};
use crate::score::allocation::strokes_received;

/// Combines gross strokes, allocated strokes and par into the derived fields
/// of one hole's score.
#[must_use]
pub fn compute_score(
    gross_strokes: i32,
    playing_handicap: i32,
    hole: &Hole,
    num_holes: i32,
    holes_in_play: &[i32],
) -> ComputedScore {
    let received = strokes_received(
        playing_handicap,
        hole.stroke_index,
        num_holes,
        holes_in_play,
    );
    let net_strokes = gross_strokes - received;

    ComputedScore {
        strokes_received: received,
        net_strokes,
        stableford_points: stableford_points(net_strokes - hole.par),
    }
}

/// Stableford table over net-vs-par. Anything at double eagle or better
/// collapses to the 5-point cap; display layers may render that as "5+" but
/// the stored value is exactly 5.
#[must_use]
pub fn stableford_points(diff: i32) -> i32 {
    match diff {
        d if d >= 2 => 0,
        1 => 1,
        0 => 2,
        -1 => 3,
        -2 => 4,
        _ => 5,
    }
}

/// Formats total gross strokes against course par adjusted for the playing
/// handicap: "PAR" at level, otherwise "+N" or "-N".
#[must_use]
pub fn score_to_par(total_gross_strokes: i32, course_par: i32, playing_handicap: i32) -> String {
    let diff = total_gross_strokes - (course_par + playing_handicap);
    match diff {
        0 => "PAR".to_string(),
        d if d > 0 => format!("+{d}"),
        d => d.to_string(),
    }
}
