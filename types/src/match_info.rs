use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::team::Team;

/// A pair of per-team values, serialized as `{"teamA": .., "teamB": ..}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPair<T> {
    pub team_a: T,
    pub team_b: T,
}

impl<T> TeamPair<T> {
    pub fn get(&self, team: Team) -> &T {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    pub fn get_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::A => &mut self.team_a,
            Team::B => &mut self.team_b,
        }
    }
}

/// Points per period. The wire names follow the paper score sheet, which
/// splits the game into two halves of two periods each.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodScores {
    pub first_half1: TeamPair<u32>,
    pub first_half2: TeamPair<u32>,
    pub second_half1: TeamPair<u32>,
    pub second_half2: TeamPair<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime: Option<TeamPair<u32>>,
}

impl PeriodScores {
    /// Period for a quarter tag in `1..=4`.
    pub fn quarter_mut(&mut self, quarter: u8) -> Option<&mut TeamPair<u32>> {
        match quarter {
            1 => Some(&mut self.first_half1),
            2 => Some(&mut self.first_half2),
            3 => Some(&mut self.second_half1),
            4 => Some(&mut self.second_half2),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodFouls {
    pub first_half1: Vec<u32>,
    pub first_half2: Vec<u32>,
    pub second_half1: Vec<u32>,
    pub second_half2: Vec<u32>,
}

impl PeriodFouls {
    pub fn quarter_mut(&mut self, quarter: u8) -> Option<&mut Vec<u32>> {
        match quarter {
            1 => Some(&mut self.first_half1),
            2 => Some(&mut self.first_half2),
            3 => Some(&mut self.second_half1),
            4 => Some(&mut self.second_half2),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub team_a: String,
    pub team_b: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_referee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_referee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_b: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_coach_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_coach_b: Option<String>,
    pub quarter_length: u32,
    #[serde(default)]
    pub scores: PeriodScores,
    #[serde(default)]
    pub team_fouls: TeamPair<PeriodFouls>,
    #[serde(default)]
    pub score_records: TeamPair<Vec<u32>>,
    #[serde(default)]
    pub revision: u64,
}

/// Body of a match creation request. Score fields are never taken from the
/// request; a new match always starts zeroed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub team_a: String,
    pub team_b: String,
    #[serde(default)]
    pub main_referee: Option<String>,
    #[serde(default)]
    pub assistant_referee: Option<String>,
    #[serde(default)]
    pub coach_a: Option<String>,
    #[serde(default)]
    pub coach_b: Option<String>,
    #[serde(default)]
    pub assistant_coach_a: Option<String>,
    #[serde(default)]
    pub assistant_coach_b: Option<String>,
    pub quarter_length: u32,
}

impl Match {
    pub fn new(input: NewMatch) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            date: input.date,
            time: input.time,
            location: input.location,
            team_a: input.team_a,
            team_b: input.team_b,
            main_referee: input.main_referee,
            assistant_referee: input.assistant_referee,
            coach_a: input.coach_a,
            coach_b: input.coach_b,
            assistant_coach_a: input.assistant_coach_a,
            assistant_coach_b: input.assistant_coach_b,
            quarter_length: input.quarter_length,
            scores: PeriodScores::default(),
            team_fouls: TeamPair::default(),
            score_records: TeamPair::default(),
            revision: 0,
        }
    }

    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }
}
