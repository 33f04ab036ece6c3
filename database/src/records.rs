use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use types::{Match, NewMatch, NewPlayer, Player};
use uuid::Uuid;

use crate::DatabaseError;

/// A stored document with a stable id and an optimistic-concurrency revision.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// JSON keys a patch may never overwrite.
    const PROTECTED: &'static [&'static str];

    fn id(&self) -> Uuid;
    fn revision(&self) -> u64;
    fn set_revision(&mut self, revision: u64);
    fn touch(&mut self) {}
}

impl Record for Match {
    const PROTECTED: &'static [&'static str] = &["id", "revision"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn set_revision(&mut self, revision: u64) {
        self.revision = revision;
    }
}

impl Record for Player {
    const PROTECTED: &'static [&'static str] = &["id", "matchId", "revision", "updatedAt"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn set_revision(&mut self, revision: u64) {
        self.revision = revision;
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// Shallow merge of a JSON object into `record`: top-level keys of `patch`
/// replace those of the record, except protected ones. Bumps the revision.
pub fn apply_patch<R: Record>(
    record: &R,
    patch: &Value,
    expected_revision: Option<u64>,
) -> Result<R, DatabaseError> {
    if let Some(expected) = expected_revision {
        if expected != record.revision() {
            return Err(DatabaseError::RevisionConflict {
                expected,
                actual: record.revision(),
            });
        }
    }
    let Value::Object(changes) = patch else {
        return Err(DatabaseError::InvalidPatch(
            "patch body must be a JSON object".to_string(),
        ));
    };

    let mut merged: Map<String, Value> = match serde_json::to_value(record)? {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };
    for (key, value) in changes {
        if !R::PROTECTED.contains(&key.as_str()) {
            merged.insert(key.clone(), value.clone());
        }
    }

    let mut updated: R = serde_json::from_value(Value::Object(merged))
        .map_err(|e| DatabaseError::InvalidPatch(e.to_string()))?;
    updated.set_revision(record.revision() + 1);
    updated.touch();
    Ok(updated)
}

/// Both collections held in memory. Every mutation goes through here so the
/// file-backed and in-memory stores behave the same.
#[derive(Clone, Debug, Default)]
pub struct Collections {
    pub matches: Vec<Match>,
    pub players: Vec<Player>,
}

impl Collections {
    pub fn get_match(&self, id: Uuid) -> Result<&Match, DatabaseError> {
        self.matches
            .iter()
            .find(|m| m.id == id)
            .ok_or(DatabaseError::MatchNotFound(id))
    }

    pub fn create_match(&mut self, input: NewMatch) -> Match {
        let game = Match::new(input);
        self.matches.push(game.clone());
        game
    }

    pub fn patch_match(
        &mut self,
        id: Uuid,
        patch: &Value,
        expected_revision: Option<u64>,
    ) -> Result<Match, DatabaseError> {
        let slot = self
            .matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(DatabaseError::MatchNotFound(id))?;
        *slot = apply_patch(slot, patch, expected_revision)?;
        Ok(slot.clone())
    }

    /// Players of the match are left in place.
    pub fn delete_match(&mut self, id: Uuid) -> Result<(), DatabaseError> {
        let index = self
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(DatabaseError::MatchNotFound(id))?;
        self.matches.remove(index);
        Ok(())
    }

    pub fn players_of(&self, match_id: Uuid) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| p.match_id == match_id)
            .cloned()
            .collect()
    }

    pub fn create_player(&mut self, match_id: Uuid, input: NewPlayer) -> Player {
        let player = Player::new(match_id, input);
        self.players.push(player.clone());
        player
    }

    pub fn patch_player(
        &mut self,
        match_id: Uuid,
        player_id: Uuid,
        patch: &Value,
        expected_revision: Option<u64>,
    ) -> Result<Player, DatabaseError> {
        let slot = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id && p.match_id == match_id)
            .ok_or(DatabaseError::PlayerNotFound(player_id))?;
        *slot = apply_patch(slot, patch, expected_revision)?;
        Ok(slot.clone())
    }

    pub fn delete_player(&mut self, match_id: Uuid, player_id: Uuid) -> Result<(), DatabaseError> {
        let index = self
            .players
            .iter()
            .position(|p| p.id == player_id && p.match_id == match_id)
            .ok_or(DatabaseError::PlayerNotFound(player_id))?;
        self.players.remove(index);
        Ok(())
    }
}
