use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use types::{Match, NewMatch, NewPlayer, Player};
use uuid::Uuid;

use super::MatchStore;
use crate::{records::Collections, DatabaseError};

/// Store for tests and runs that do not need anything on disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(matches: Vec<Match>, players: Vec<Player>) -> Self {
        Self {
            inner: Mutex::new(Collections { matches, players }),
        }
    }
}

#[async_trait]
impl MatchStore for MemoryStore {
    async fn list_matches(&self) -> Result<Vec<Match>, DatabaseError> {
        Ok(self.inner.lock().await.matches.clone())
    }

    async fn get_match(&self, id: Uuid) -> Result<Match, DatabaseError> {
        self.inner.lock().await.get_match(id).cloned()
    }

    async fn create_match(&self, input: NewMatch) -> Result<Match, DatabaseError> {
        Ok(self.inner.lock().await.create_match(input))
    }

    async fn patch_match(
        &self,
        id: Uuid,
        patch: Value,
        expected_revision: Option<u64>,
    ) -> Result<Match, DatabaseError> {
        self.inner
            .lock()
            .await
            .patch_match(id, &patch, expected_revision)
    }

    async fn delete_match(&self, id: Uuid) -> Result<(), DatabaseError> {
        self.inner.lock().await.delete_match(id)
    }

    async fn list_players(&self, match_id: Uuid) -> Result<Vec<Player>, DatabaseError> {
        Ok(self.inner.lock().await.players_of(match_id))
    }

    async fn create_player(&self, match_id: Uuid, input: NewPlayer) -> Result<Player, DatabaseError> {
        Ok(self.inner.lock().await.create_player(match_id, input))
    }

    async fn patch_player(
        &self,
        match_id: Uuid,
        player_id: Uuid,
        patch: Value,
        expected_revision: Option<u64>,
    ) -> Result<Player, DatabaseError> {
        self.inner
            .lock()
            .await
            .patch_player(match_id, player_id, &patch, expected_revision)
    }

    async fn delete_player(&self, match_id: Uuid, player_id: Uuid) -> Result<(), DatabaseError> {
        self.inner.lock().await.delete_player(match_id, player_id)
    }
}
