#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use rusty_stableford::model::{Hole, Player, Round, Score};
use rusty_stableford::mvu::runtime::Deps;
use rusty_stableford::score::compute::stableford_points;
use rusty_stableford::storage::{Notifier, Storage, StorageError};

/// In-memory stand-in for the persistence collaborator, upserting scores
/// last-write-wins per (round, player, hole) like the real one.
#[derive(Default)]
pub struct MemoryStorage {
    pub rounds: Mutex<Vec<Round>>,
    pub holes: Mutex<HashMap<i64, Vec<Hole>>>,
    pub players: Mutex<HashMap<i64, Vec<Player>>>,
    pub scores: Mutex<Vec<Score>>,
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_round(&self, round_id: i64) -> Result<Round, StorageError> {
        self.rounds
            .lock()
            .unwrap()
            .iter()
            .find(|round| round.round_id == round_id)
            .cloned()
            .ok_or_else(|| StorageError::new(format!("round {round_id} not found")))
    }

    async fn get_holes_for_round(&self, round_id: i64) -> Result<Vec<Hole>, StorageError> {
        Ok(self
            .holes
            .lock()
            .unwrap()
            .get(&round_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_players_for_round(&self, round_id: i64) -> Result<Vec<Player>, StorageError> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .get(&round_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_scores(&self, round_id: i64) -> Result<Vec<Score>, StorageError> {
        Ok(self
            .scores
            .lock()
            .unwrap()
            .iter()
            .filter(|score| score.round_id == round_id)
            .cloned()
            .collect())
    }

    async fn upsert_score(&self, score: &Score) -> Result<(), StorageError> {
        let mut scores = self.scores.lock().unwrap();
        scores.retain(|existing| {
            !(existing.round_id == score.round_id
                && existing.player_id == score.player_id
                && existing.hole_number == score.hole_number)
        });
        scores.push(score.clone());
        Ok(())
    }

    async fn delete_score(
        &self,
        round_id: i64,
        player_id: i64,
        hole_number: i32,
    ) -> Result<(), StorageError> {
        self.scores.lock().unwrap().retain(|existing| {
            !(existing.round_id == round_id
                && existing.player_id == player_id
                && existing.hole_number == hole_number)
        });
        Ok(())
    }

    async fn get_active_rounds_for_group(
        &self,
        group_id: i64,
    ) -> Result<Vec<Round>, StorageError> {
        Ok(self
            .rounds
            .lock()
            .unwrap()
            .iter()
            .filter(|round| round.group_id == Some(group_id))
            .cloned()
            .collect())
    }
}

/// Records hole-in-one announcements instead of delivering them.
#[derive(Default)]
pub struct RecordingNotifier {
    pub announcements: Mutex<Vec<(i64, i64, i32)>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn hole_in_one(
        &self,
        round_id: i64,
        player_id: i64,
        hole_number: i32,
    ) -> Result<(), StorageError> {
        self.announcements
            .lock()
            .unwrap()
            .push((round_id, player_id, hole_number));
        Ok(())
    }
}

pub struct TestContext {
    pub storage: MemoryStorage,
    pub notifier: RecordingNotifier,
}

impl TestContext {
    pub fn deps(&self) -> Deps<'_> {
        Deps {
            storage: &self.storage,
            notifier: &self.notifier,
        }
    }
}

pub fn setup_test_context(round: Round, holes: Vec<Hole>, players: Vec<Player>) -> TestContext {
    let storage = MemoryStorage::default();
    let round_id = round.round_id;
    storage.rounds.lock().unwrap().push(round);
    storage.holes.lock().unwrap().insert(round_id, holes);
    storage.players.lock().unwrap().insert(round_id, players);
    TestContext {
        storage,
        notifier: RecordingNotifier::default(),
    }
}

/// 18 holes, par 72, stroke indexes a permutation of 1..=18.
pub fn course_18() -> Vec<Hole> {
    let layout: [(i32, i32); 18] = [
        (4, 5),
        (4, 13),
        (3, 17),
        (5, 1),
        (4, 9),
        (3, 15),
        (5, 3),
        (4, 7),
        (4, 11),
        (4, 6),
        (3, 18),
        (5, 2),
        (4, 14),
        (4, 8),
        (3, 16),
        (5, 4),
        (4, 12),
        (4, 10),
    ];
    layout.iter()
        .enumerate()
        .map(|(i, &(par, stroke_index))| Hole {
            hole_id: i as i64 + 1,
            number: i as i32 + 1,
            par,
            stroke_index,
        })
        .collect()
}

pub fn front_nine() -> Vec<Hole> {
    course_18().into_iter().take(9).collect()
}

pub fn player(player_id: i64, name: &str, playing_handicap: i32) -> Player {
    Player {
        player_id,
        name: name.to_string(),
        exact_handicap: f64::from(playing_handicap) + 0.4,
        playing_handicap,
    }
}

pub fn quick_round(round_id: i64, num_holes: i32) -> Round {
    Round {
        round_id,
        name: format!("Quick round {round_id}"),
        num_holes,
        group_id: None,
        red_marker: false,
        created: Utc::now(),
    }
}

pub fn tracked_round(round_id: i64, num_holes: i32, group_id: i64, red_marker: bool) -> Round {
    Round {
        round_id,
        name: format!("Group round {round_id}"),
        num_holes,
        group_id: Some(group_id),
        red_marker,
        created: Utc::now(),
    }
}

/// A committed record with the derived fields filled in from the givens.
pub fn score_record(
    round_id: i64,
    player_id: i64,
    hole_number: i32,
    gross: i32,
    received: i32,
    par: i32,
) -> Score {
    let net = gross - received;
    Score {
        round_id,
        player_id,
        hole_number,
        gross_strokes: gross,
        strokes_received: received,
        net_strokes: net,
        stableford_points: stableford_points(net - par),
        not_passed_red: false,
        abandoned: false,
    }
}
