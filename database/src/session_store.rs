use types::SessionSnapshot;
use uuid::Uuid;

use crate::{
    json_file::{read_json, write_json},
    DatabaseError, StoreConfig,
};

/// One snapshot document per match under `sessions/`.
#[derive(Clone, Debug)]
pub struct SessionStore {
    config: StoreConfig,
}

impl SessionStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub async fn load(&self, match_id: Uuid) -> Result<Option<SessionSnapshot>, DatabaseError> {
        let snapshot: Option<SessionSnapshot> = read_json(&self.config.session_path(match_id)).await?;
        if let Some(snapshot) = &snapshot {
            tracing::info!(
                %match_id,
                events = snapshot.events.len(),
                saved_at = %snapshot.saved_at,
                "Loaded session snapshot"
            );
        }
        Ok(snapshot)
    }

    pub async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), DatabaseError> {
        write_json(&self.config.session_path(snapshot.match_id), snapshot).await?;
        tracing::debug!(match_id = %snapshot.match_id, time = %snapshot.time, "Saved session snapshot");
        Ok(())
    }

    pub async fn discard(&self, match_id: Uuid) -> Result<(), DatabaseError> {
        let path = self.config.session_path(match_id);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DatabaseError::io(&path, e)),
        }
    }
}
