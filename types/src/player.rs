use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::team::Team;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Uuid,
    pub match_id: Uuid,
    pub name: String,
    pub number: String,
    pub team: Team,
    #[serde(default)]
    pub is_starter: bool,
    /// Quarter tags of the personal fouls committed by this player.
    #[serde(default)]
    pub personal_fouls: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_number: Option<String>,
    #[serde(default)]
    pub revision: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of a player creation request.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub number: String,
    pub team: Team,
    #[serde(default)]
    pub is_starter: bool,
    #[serde(default)]
    pub personal_fouls: Vec<u8>,
    #[serde(default)]
    pub certificate_number: Option<String>,
}

impl Player {
    pub fn new(match_id: Uuid, input: NewPlayer) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_id,
            name: input.name,
            number: input.number,
            team: input.team,
            is_starter: input.is_starter,
            personal_fouls: input.personal_fouls,
            certificate_number: input.certificate_number,
            revision: 0,
            updated_at: None,
        }
    }

    /// Display label used in the event log and on the score sheet.
    pub fn label(&self) -> String {
        format!("#{} {}", self.number, self.name)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
