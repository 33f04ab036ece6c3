use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{player::Player, team::Team};

/// Players currently on court, per team. Seeded from starters and changed
/// only by substitutions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRoster {
    #[serde(rename = "A")]
    a: Vec<Uuid>,
    #[serde(rename = "B")]
    b: Vec<Uuid>,
}

impl ActiveRoster {
    pub fn from_starters(players: &[Player]) -> Self {
        let starters = |team: Team| {
            players
                .iter()
                .filter(|p| p.team == team && p.is_starter)
                .map(|p| p.id)
                .collect()
        };
        Self {
            a: starters(Team::A),
            b: starters(Team::B),
        }
    }

    /// A previously persisted roster wins over the starter flags.
    pub fn initialize(stored: Option<ActiveRoster>, players: &[Player]) -> Self {
        match stored {
            Some(roster) => roster,
            None => Self::from_starters(players),
        }
    }

    pub fn active(&self, team: Team) -> &[Uuid] {
        match team {
            Team::A => &self.a,
            Team::B => &self.b,
        }
    }

    fn active_mut(&mut self, team: Team) -> &mut Vec<Uuid> {
        match team {
            Team::A => &mut self.a,
            Team::B => &mut self.b,
        }
    }

    pub fn contains(&self, team: Team, id: Uuid) -> bool {
        self.active(team).contains(&id)
    }

    pub(crate) fn swap(&mut self, team: Team, incoming: Uuid, outgoing: Uuid) {
        let active = self.active_mut(team);
        active.retain(|&id| id != outgoing);
        if !active.contains(&incoming) {
            active.push(incoming);
        }
    }

    /// Selectable as "on court": a starter or in the active set.
    pub fn on_court<'a>(&self, team: Team, players: &'a [Player]) -> Vec<&'a Player> {
        players
            .iter()
            .filter(|p| p.team == team && (p.is_starter || self.contains(team, p.id)))
            .collect()
    }

    pub fn bench<'a>(&self, team: Team, players: &'a [Player]) -> Vec<&'a Player> {
        players
            .iter()
            .filter(|p| p.team == team && !p.is_starter && !self.contains(team, p.id))
            .collect()
    }
}
