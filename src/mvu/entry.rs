use crate::model::{Hole, Player, Round, RoundMode, Score};
use crate::score::allocation::strokes_received;
use crate::score::compute::compute_score;

/// One score-entry session for a single (round, hole, player) cell.
///
/// Everything a transition needs travels in the model, so any number of
/// sessions can run side by side without shared state. The session holds the
/// cell's committed record (if any) to keep the red-marker toggle and
/// overwrites coherent without a storage read.
#[derive(Debug, Clone)]
pub struct EntryModel {
    pub round_id: i64,
    pub player: Player,
    pub hole: Hole,
    pub num_holes: i32,
    pub holes_in_play: Vec<i32>,
    pub mode: RoundMode,
    pub red_marker: bool,
    pub state: EntryState,
    pub committed: Option<Score>,
    /// Red-marker toggle held while no record exists yet for this cell;
    /// merged into the next commit.
    pub pending_red: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Idle,
    Open,
    /// A leading "1" has been entered and retained; the next input decides
    /// between a hole-in-one and 10..=19 strokes.
    PendingTwoDigit,
    /// The surface was closed on a pending "1", an implicit hole-in-one
    /// claim that needs explicit confirmation.
    ConfirmHoleInOne,
}

/// Discrete inputs from the entry surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Open,
    Digit(i32),
    ExplicitTen,
    Close,
    Confirm,
    Cancel,
    Delete,
    Abandon,
    ToggleRedMarker,
}

/// Side-effect signals for the runtime. Effects are terminal and never feed
/// back into [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CommitScore(Score),
    ClearScore {
        round_id: i64,
        player_id: i64,
        hole_number: i32,
    },
    AnnounceHoleInOne {
        round_id: i64,
        player_id: i64,
        hole_number: i32,
    },
}

impl EntryModel {
    #[must_use]
    pub fn new(
        round: &Round,
        player: Player,
        hole: Hole,
        holes_in_play: Vec<i32>,
        existing: Option<Score>,
    ) -> Self {
        Self {
            round_id: round.round_id,
            player,
            hole,
            num_holes: round.num_holes,
            holes_in_play,
            mode: round.mode(),
            red_marker: round.red_marker,
            state: EntryState::Idle,
            committed: existing,
            pending_red: None,
        }
    }

    fn commit(&mut self, gross_strokes: i32) -> Score {
        let computed = compute_score(
            gross_strokes,
            self.player.playing_handicap,
            &self.hole,
            self.num_holes,
            &self.holes_in_play,
        );
        let score = Score {
            round_id: self.round_id,
            player_id: self.player.player_id,
            hole_number: self.hole.number,
            gross_strokes,
            strokes_received: computed.strokes_received,
            net_strokes: computed.net_strokes,
            stableford_points: computed.stableford_points,
            not_passed_red: self.take_red_flag(),
            abandoned: false,
        };
        self.committed = Some(score.clone());
        score
    }

    fn abandon(&mut self) -> Score {
        let not_passed_red = self.take_red_flag();
        let score = match self.mode {
            RoundMode::Quick => Score {
                round_id: self.round_id,
                player_id: self.player.player_id,
                hole_number: self.hole.number,
                gross_strokes: 0,
                strokes_received: 0,
                net_strokes: 0,
                stableford_points: 0,
                not_passed_red,
                abandoned: true,
            },
            RoundMode::Tracked => {
                let received = strokes_received(
                    self.player.playing_handicap,
                    self.hole.stroke_index,
                    self.num_holes,
                    &self.holes_in_play,
                );
                let gross = self.hole.par + received + 3;
                let computed = compute_score(
                    gross,
                    self.player.playing_handicap,
                    &self.hole,
                    self.num_holes,
                    &self.holes_in_play,
                );
                Score {
                    round_id: self.round_id,
                    player_id: self.player.player_id,
                    hole_number: self.hole.number,
                    gross_strokes: gross,
                    strokes_received: computed.strokes_received,
                    net_strokes: computed.net_strokes,
                    // A pickup never scores points, whatever the cap works
                    // out to.
                    stableford_points: 0,
                    not_passed_red,
                    abandoned: false,
                }
            }
        };
        self.committed = Some(score.clone());
        score
    }

    // A pending toggle wins; otherwise an overwrite keeps the flag already
    // on the record.
    fn take_red_flag(&mut self) -> bool {
        match self.pending_red.take() {
            Some(flag) => flag,
            None => self
                .committed
                .as_ref()
                .is_some_and(|score| score.not_passed_red),
        }
    }

    fn toggle_red_marker(&mut self) -> Vec<Effect> {
        if !self.red_marker {
            return vec![];
        }
        match &mut self.committed {
            Some(score) => {
                score.not_passed_red = !score.not_passed_red;
                vec![Effect::CommitScore(score.clone())]
            }
            None => {
                let pending = self.pending_red.unwrap_or(false);
                self.pending_red = Some(!pending);
                vec![]
            }
        }
    }
}

/// The transition function. Total over its input domain: an input that is
/// not defined for the current state is ignored.
pub fn update(model: &mut EntryModel, msg: Msg) -> Vec<Effect> {
    match (model.state, msg) {
        (EntryState::Idle, Msg::Open) => {
            model.state = EntryState::Open;
            vec![]
        }
        (EntryState::Open, Msg::Digit(1)) => {
            model.state = EntryState::PendingTwoDigit;
            vec![]
        }
        (EntryState::Open, Msg::Digit(d)) if (2..=9).contains(&d) => {
            model.state = EntryState::Idle;
            vec![Effect::CommitScore(model.commit(d))]
        }
        (EntryState::Open, Msg::Close) => {
            // Nothing pending: a pure cancel.
            model.state = EntryState::Idle;
            vec![]
        }
        (EntryState::PendingTwoDigit, Msg::Digit(d)) if (1..=9).contains(&d) => {
            model.state = EntryState::Idle;
            vec![Effect::CommitScore(model.commit(10 + d))]
        }
        (EntryState::PendingTwoDigit, Msg::ExplicitTen) => {
            model.state = EntryState::Idle;
            vec![Effect::CommitScore(model.commit(10))]
        }
        (EntryState::PendingTwoDigit, Msg::Close) => {
            model.state = EntryState::ConfirmHoleInOne;
            vec![]
        }
        (EntryState::ConfirmHoleInOne, Msg::Confirm) => {
            model.state = EntryState::Idle;
            vec![
                Effect::CommitScore(model.commit(1)),
                Effect::AnnounceHoleInOne {
                    round_id: model.round_id,
                    player_id: model.player.player_id,
                    hole_number: model.hole.number,
                },
            ]
        }
        (EntryState::ConfirmHoleInOne, Msg::Cancel) => {
            // The retained "1" is still pending.
            model.state = EntryState::PendingTwoDigit;
            vec![]
        }
        (state, Msg::Delete) if state != EntryState::Idle => {
            model.state = EntryState::Idle;
            model.committed = None;
            vec![Effect::ClearScore {
                round_id: model.round_id,
                player_id: model.player.player_id,
                hole_number: model.hole.number,
            }]
        }
        (state, Msg::Abandon) if state != EntryState::Idle => {
            model.state = EntryState::Idle;
            vec![Effect::CommitScore(model.abandon())]
        }
        (_, Msg::ToggleRedMarker) => model.toggle_red_marker(),
        _ => vec![],
    }
}
