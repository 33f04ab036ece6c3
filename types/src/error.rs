use thiserror::Error;
use uuid::Uuid;

use crate::team::Team;

/// Rejected operator actions. A failed action never mutates the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("No player selected for team {0}")]
    NoPlayerSelected(Team),

    #[error("Click the court to mark a position first")]
    NoCourtPosition,

    #[error("Click is outside the court")]
    ClickOutsideCourt,

    #[error("A field goal is worth 1 to 3 points, got {0}")]
    InvalidPoints(u8),

    #[error("Invalid free throw input: {0}")]
    InvalidFreeThrow(String),

    #[error("Unknown player: {0}")]
    UnknownPlayer(Uuid),

    #[error("No player with number {number} on team {team}")]
    UnknownNumber { team: Team, number: String },

    #[error("Player {player} does not play for team {team}")]
    PlayerNotOnTeam { player: Uuid, team: Team },

    #[error("Substitution needs both an incoming and an outgoing player")]
    BlankSubstitution,

    #[error("Unknown quarter: {0}")]
    UnknownQuarter(u8),

    #[error("Quarter {0} is already completed")]
    QuarterCompleted(u8),
}
