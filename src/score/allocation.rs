use log::warn;

/// Strokes a player receives on a hole, allocated from the playing handicap
/// by stroke index.
///
/// In an 18-hole round the raw stroke index drives the allocation. In a
/// 9-hole round the handicap is rated for a full course, so the nine stroke
/// indexes actually in play are re-ranked into 1..=9 first; that keeps the
/// relative difficulty order of the holes played instead of their full-course
/// rank.
#[must_use]
pub fn strokes_received(
    playing_handicap: i32,
    stroke_index: i32,
    num_holes: i32,
    holes_in_play: &[i32],
) -> i32 {
    if playing_handicap <= 0 {
        return 0;
    }

    let (holes_per_round, index) = if num_holes == 9 {
        (9, normalized_stroke_index(stroke_index, holes_in_play))
    } else {
        (18, stroke_index)
    };

    let full = playing_handicap / holes_per_round;
    let remainder = playing_handicap % holes_per_round;
    if index <= remainder { full + 1 } else { full }
}

/// Rank of `stroke_index` among the indexes in play, 1 = hardest hole played.
/// An index missing from the set falls back to its raw value.
fn normalized_stroke_index(stroke_index: i32, holes_in_play: &[i32]) -> i32 {
    let mut in_play = holes_in_play.to_vec();
    in_play.sort_unstable();

    match in_play.iter().position(|&idx| idx == stroke_index) {
        Some(rank) => rank as i32 + 1,
        None => {
            warn!("stroke index {stroke_index} not among the holes in play, using it unnormalized");
            stroke_index
        }
    }
}
