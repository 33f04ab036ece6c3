use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use types::{Match, NewMatch, NewPlayer, Player};
use uuid::Uuid;

use super::MatchStore;
use crate::{
    json_file::{read_collection, write_json},
    records::Collections,
    DatabaseError, StoreConfig,
};

/// Matches and players kept as two JSON array files. Each operation reads the
/// whole collection; writes replace the file atomically. All read-modify-write
/// cycles run under one writer lock so concurrent patches cannot lose updates.
#[derive(Debug)]
pub struct JsonFileStore {
    config: StoreConfig,
    writer: Mutex<()>,
}

impl JsonFileStore {
    pub async fn open(config: StoreConfig) -> Result<Self, DatabaseError> {
        tokio::fs::create_dir_all(config.data_dir())
            .await
            .map_err(|e| DatabaseError::io(config.data_dir(), e))?;
        tracing::info!(data_dir = %config.data_dir().display(), "Opened JSON file store");
        Ok(Self {
            config,
            writer: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    async fn read_matches(&self) -> Result<Vec<Match>, DatabaseError> {
        read_collection(&self.config.matches_path()).await
    }

    async fn read_players(&self) -> Result<Vec<Player>, DatabaseError> {
        read_collection(&self.config.players_path()).await
    }

    async fn load(&self) -> Result<Collections, DatabaseError> {
        Ok(Collections {
            matches: self.read_matches().await?,
            players: self.read_players().await?,
        })
    }
}

#[async_trait]
impl MatchStore for JsonFileStore {
    async fn list_matches(&self) -> Result<Vec<Match>, DatabaseError> {
        let matches = self.read_matches().await?;
        tracing::debug!(count = matches.len(), "Listed matches");
        Ok(matches)
    }

    async fn get_match(&self, id: Uuid) -> Result<Match, DatabaseError> {
        self.read_matches()
            .await?
            .into_iter()
            .find(|m| m.id == id)
            .ok_or(DatabaseError::MatchNotFound(id))
    }

    async fn create_match(&self, input: NewMatch) -> Result<Match, DatabaseError> {
        let _guard = self.writer.lock().await;
        let mut collections = self.load().await?;
        let game = collections.create_match(input);
        write_json(&self.config.matches_path(), &collections.matches).await?;
        tracing::info!(match_id = %game.id, name = %game.name, "Created match");
        Ok(game)
    }

    async fn patch_match(
        &self,
        id: Uuid,
        patch: Value,
        expected_revision: Option<u64>,
    ) -> Result<Match, DatabaseError> {
        let _guard = self.writer.lock().await;
        let mut collections = self.load().await?;
        let game = collections.patch_match(id, &patch, expected_revision)?;
        write_json(&self.config.matches_path(), &collections.matches).await?;
        tracing::info!(match_id = %id, revision = game.revision, "Patched match");
        Ok(game)
    }

    async fn delete_match(&self, id: Uuid) -> Result<(), DatabaseError> {
        let _guard = self.writer.lock().await;
        let mut collections = self.load().await?;
        collections.delete_match(id)?;
        write_json(&self.config.matches_path(), &collections.matches).await?;
        tracing::info!(match_id = %id, "Deleted match");
        Ok(())
    }

    async fn list_players(&self, match_id: Uuid) -> Result<Vec<Player>, DatabaseError> {
        let collections = Collections {
            matches: Vec::new(),
            players: self.read_players().await?,
        };
        Ok(collections.players_of(match_id))
    }

    async fn create_player(&self, match_id: Uuid, input: NewPlayer) -> Result<Player, DatabaseError> {
        let _guard = self.writer.lock().await;
        let mut collections = self.load().await?;
        let player = collections.create_player(match_id, input);
        write_json(&self.config.players_path(), &collections.players).await?;
        tracing::info!(%match_id, player_id = %player.id, "Created player");
        Ok(player)
    }

    async fn patch_player(
        &self,
        match_id: Uuid,
        player_id: Uuid,
        patch: Value,
        expected_revision: Option<u64>,
    ) -> Result<Player, DatabaseError> {
        let _guard = self.writer.lock().await;
        let mut collections = self.load().await?;
        let player = collections.patch_player(match_id, player_id, &patch, expected_revision)?;
        write_json(&self.config.players_path(), &collections.players).await?;
        tracing::info!(%match_id, %player_id, revision = player.revision, "Patched player");
        Ok(player)
    }

    async fn delete_player(&self, match_id: Uuid, player_id: Uuid) -> Result<(), DatabaseError> {
        let _guard = self.writer.lock().await;
        let mut collections = self.load().await?;
        collections.delete_player(match_id, player_id)?;
        write_json(&self.config.players_path(), &collections.players).await?;
        tracing::info!(%match_id, %player_id, "Deleted player");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn new_match(name: &str) -> NewMatch {
        serde_json::from_value(json!({
            "name": name,
            "teamA": "Red",
            "teamB": "Blue",
            "quarterLength": 10
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn empty_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(StoreConfig::new(dir.path().join("data")))
            .await
            .unwrap();
        assert!(store.list_matches().await.unwrap().is_empty());
        assert!(store.list_players(Uuid::new_v4()).await.unwrap().is_empty());
        assert!(dir.path().join("data").is_dir());
    }

    #[tokio::test]
    async fn concurrent_patches_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(
            JsonFileStore::open(StoreConfig::new(dir.path()))
                .await
                .unwrap(),
        );
        let game = store.create_match(new_match("Derby")).await.unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .patch_match(game.id, json!({ "name": format!("Derby {i}") }), None)
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = store.get_match(game.id).await.unwrap();
        assert_eq!(stored.revision, 8);
    }
}
