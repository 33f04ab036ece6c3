use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{court::CourtPosition, team::Team};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FoulKind {
    Defensive,
    Offensive,
    Technical,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReboundKind {
    Defensive,
    Offensive,
}

/// Everything the recorder can log. Each kind carries only the fields that
/// make sense for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventKind {
    Score { points: u8 },
    FreeThrow { attempts: u8, made: u8 },
    Block,
    Turnover,
    Steal,
    Assist,
    Foul { kind: FoulKind },
    Fouled,
    Rebound { kind: ReboundKind },
    Substitution { incoming: Uuid, outgoing: Uuid },
    Timeout,
    /// Compensating entry written by the manual point decrement.
    ScoreCorrection { points: i32 },
}

impl EventKind {
    /// Signed contribution of this event to its team's score.
    pub fn points(&self) -> i32 {
        match self {
            EventKind::Score { points } => i32::from(*points),
            EventKind::FreeThrow { made, .. } => i32::from(*made),
            EventKind::ScoreCorrection { points } => *points,
            _ => 0,
        }
    }

    pub fn is_foul(&self) -> bool {
        matches!(self, EventKind::Foul { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Score { .. } => "score",
            EventKind::FreeThrow { .. } => "free throw",
            EventKind::Block => "block",
            EventKind::Turnover => "turnover",
            EventKind::Steal => "steal",
            EventKind::Assist => "assist",
            EventKind::Foul {
                kind: FoulKind::Defensive,
            } => "defensive foul",
            EventKind::Foul {
                kind: FoulKind::Offensive,
            } => "offensive foul",
            EventKind::Foul {
                kind: FoulKind::Technical,
            } => "technical foul",
            EventKind::Fouled => "fouled",
            EventKind::Rebound {
                kind: ReboundKind::Defensive,
            } => "defensive rebound",
            EventKind::Rebound {
                kind: ReboundKind::Offensive,
            } => "offensive rebound",
            EventKind::Substitution { .. } => "substitution",
            EventKind::Timeout => "timeout",
            EventKind::ScoreCorrection { .. } => "score correction",
        }
    }

    pub fn description(&self) -> String {
        match self {
            EventKind::Score { points } => format!("{points} points made"),
            EventKind::FreeThrow { attempts, made } => format!("free throws {made}/{attempts}"),
            EventKind::Block => "successful block".to_string(),
            EventKind::Steal => "successful steal".to_string(),
            EventKind::Assist => "assist on a score".to_string(),
            EventKind::Fouled => "was fouled".to_string(),
            EventKind::Timeout => "timeout requested".to_string(),
            EventKind::ScoreCorrection { points } => format!("{points:+} point correction"),
            other => other.name().to_string(),
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The operator-facing event kinds recorded through the generic path, as
/// opposed to scores, free throws, and substitutions which carry extra input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MiscKind {
    Block,
    Turnover,
    Steal,
    Assist,
    DefensiveFoul,
    OffensiveFoul,
    TechnicalFoul,
    Fouled,
    DefensiveRebound,
    OffensiveRebound,
    Timeout,
}

impl MiscKind {
    pub const ALL: [MiscKind; 11] = [
        MiscKind::Block,
        MiscKind::Turnover,
        MiscKind::Steal,
        MiscKind::Assist,
        MiscKind::DefensiveFoul,
        MiscKind::OffensiveFoul,
        MiscKind::TechnicalFoul,
        MiscKind::Fouled,
        MiscKind::DefensiveRebound,
        MiscKind::OffensiveRebound,
        MiscKind::Timeout,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            MiscKind::Block => "block",
            MiscKind::Turnover => "turnover",
            MiscKind::Steal => "steal",
            MiscKind::Assist => "assist",
            MiscKind::DefensiveFoul => "dfoul",
            MiscKind::OffensiveFoul => "ofoul",
            MiscKind::TechnicalFoul => "tfoul",
            MiscKind::Fouled => "fouled",
            MiscKind::DefensiveRebound => "dreb",
            MiscKind::OffensiveRebound => "oreb",
            MiscKind::Timeout => "timeout",
        }
    }
}

impl From<MiscKind> for EventKind {
    fn from(kind: MiscKind) -> Self {
        match kind {
            MiscKind::Block => EventKind::Block,
            MiscKind::Turnover => EventKind::Turnover,
            MiscKind::Steal => EventKind::Steal,
            MiscKind::Assist => EventKind::Assist,
            MiscKind::DefensiveFoul => EventKind::Foul {
                kind: FoulKind::Defensive,
            },
            MiscKind::OffensiveFoul => EventKind::Foul {
                kind: FoulKind::Offensive,
            },
            MiscKind::TechnicalFoul => EventKind::Foul {
                kind: FoulKind::Technical,
            },
            MiscKind::Fouled => EventKind::Fouled,
            MiscKind::DefensiveRebound => EventKind::Rebound {
                kind: ReboundKind::Defensive,
            },
            MiscKind::OffensiveRebound => EventKind::Rebound {
                kind: ReboundKind::Offensive,
            },
            MiscKind::Timeout => EventKind::Timeout,
        }
    }
}

impl std::str::FromStr for MiscKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MiscKind::ALL
            .into_iter()
            .find(|kind| kind.keyword() == s)
            .ok_or_else(|| format!("unknown event type: {s}"))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    /// Monotonic within one recording session, starting at 1.
    pub id: u32,
    /// Game clock at creation, formatted `MM:SS.T`.
    pub time: String,
    pub elapsed_ms: u64,
    /// Active quarter at creation, 0 when no quarter was running.
    pub quarter: u8,
    pub team: Team,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<Uuid>,
    #[serde(flatten)]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<CourtPosition>,
    pub description: String,
}
