use async_trait::async_trait;
use serde_json::Value;
use types::{Match, NewMatch, NewPlayer, Player};
use uuid::Uuid;

use crate::DatabaseError;

/// Match and player collections. `expected_revision` on a patch is an
/// optimistic-concurrency precondition; `None` skips the check.
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn list_matches(&self) -> Result<Vec<Match>, DatabaseError>;
    async fn get_match(&self, id: Uuid) -> Result<Match, DatabaseError>;
    async fn create_match(&self, input: NewMatch) -> Result<Match, DatabaseError>;
    async fn patch_match(
        &self,
        id: Uuid,
        patch: Value,
        expected_revision: Option<u64>,
    ) -> Result<Match, DatabaseError>;
    async fn delete_match(&self, id: Uuid) -> Result<(), DatabaseError>;

    async fn list_players(&self, match_id: Uuid) -> Result<Vec<Player>, DatabaseError>;
    async fn create_player(&self, match_id: Uuid, input: NewPlayer) -> Result<Player, DatabaseError>;
    async fn patch_player(
        &self,
        match_id: Uuid,
        player_id: Uuid,
        patch: Value,
        expected_revision: Option<u64>,
    ) -> Result<Player, DatabaseError>;
    async fn delete_player(&self, match_id: Uuid, player_id: Uuid) -> Result<(), DatabaseError>;
}
