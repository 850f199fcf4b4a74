use crate::model::{Hole, Player, Round, Score};
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Persistence collaborator. The engine reads round data through this trait
/// and hands committed scores back to it; concurrent writers are resolved by
/// the implementation as last-write-wins per (player, hole) record.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_round(&self, round_id: i64) -> Result<Round, StorageError>;
    async fn get_holes_for_round(&self, round_id: i64) -> Result<Vec<Hole>, StorageError>;
    async fn get_players_for_round(&self, round_id: i64) -> Result<Vec<Player>, StorageError>;
    async fn get_scores(&self, round_id: i64) -> Result<Vec<Score>, StorageError>;
    async fn upsert_score(&self, score: &Score) -> Result<(), StorageError>;
    async fn delete_score(
        &self,
        round_id: i64,
        player_id: i64,
        hole_number: i32,
    ) -> Result<(), StorageError>;
    async fn get_active_rounds_for_group(&self, group_id: i64)
    -> Result<Vec<Round>, StorageError>;
}

/// Notification collaborator for the hole-in-one announcement. Purely
/// informational; callers treat a failure as non-fatal.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn hole_in_one(
        &self,
        round_id: i64,
        player_id: i64,
        hole_number: i32,
    ) -> Result<(), StorageError>;
}
