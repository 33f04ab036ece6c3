use std::fmt::Display;

use uuid::Uuid;

use crate::{error::RecordError, event::MiscKind, team::Team};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockAction {
    Start,
    Pause,
    Reset,
}

/// One operator action against a recording session. Players are referred to
/// by jersey number, the way the operator sees them.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Select { team: Team, number: String },
    Click { x: f64, y: f64 },
    Score { team: Team, points: u8 },
    FreeThrow { team: Team, attempts: String, made: String },
    Misc { team: Team, kind: MiscKind },
    Decrement { team: Team },
    Substitute { team: Team, incoming: String, outgoing: String },
    StartQuarter(u8),
    CompleteQuarter(u8),
    Clock(ClockAction),
    ResetAll,
    ShowSheet,
    ShowLog,
    Quit,
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Select { team, number } => write!(f, "select {team} #{number}"),
            Command::Click { x, y } => write!(f, "click ({x}, {y})"),
            Command::Score { team, points } => write!(f, "score {team} +{points}"),
            Command::FreeThrow {
                team,
                attempts,
                made,
            } => write!(f, "free throw {team} {made}/{attempts}"),
            Command::Misc { team, kind } => write!(f, "{} {team}", kind.keyword()),
            Command::Decrement { team } => write!(f, "decrement {team}"),
            Command::Substitute {
                team,
                incoming,
                outgoing,
            } => write!(f, "substitute {team} #{incoming} for #{outgoing}"),
            Command::StartQuarter(q) => write!(f, "start quarter {q}"),
            Command::CompleteQuarter(q) => write!(f, "complete quarter {q}"),
            Command::Clock(action) => write!(f, "clock {action:?}"),
            Command::ResetAll => write!(f, "reset all"),
            Command::ShowSheet => write!(f, "show sheet"),
            Command::ShowLog => write!(f, "show log"),
            Command::Quit => write!(f, "quit"),
        }
    }
}

/// What applying a command did, so the driver knows what to persist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Recorded(u32),
    Substituted { event_id: u32, outgoing: Uuid },
    Updated,
    Unchanged,
    Clock(ClockAction),
    ShowSheet,
    ShowLog,
    Quit,
}

impl Outcome {
    pub fn changes_state(&self) -> bool {
        matches!(
            self,
            Outcome::Recorded(_)
                | Outcome::Substituted { .. }
                | Outcome::Updated
                | Outcome::Clock(_)
        )
    }
}

/// Free throw counts as typed by the operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FreeThrowInput {
    pub attempts: u8,
    pub made: u8,
}

impl FreeThrowInput {
    pub fn parse(attempts: &str, made: &str) -> Result<Self, RecordError> {
        let attempts: u8 = attempts
            .trim()
            .parse()
            .map_err(|_| RecordError::InvalidFreeThrow(format!("attempts '{attempts}'")))?;
        let made: u8 = made
            .trim()
            .parse()
            .map_err(|_| RecordError::InvalidFreeThrow(format!("made '{made}'")))?;
        if attempts == 0 {
            return Err(RecordError::InvalidFreeThrow(
                "attempts must be positive".to_string(),
            ));
        }
        if made > attempts {
            return Err(RecordError::InvalidFreeThrow(format!(
                "made {made} exceeds attempts {attempts}"
            )));
        }
        Ok(Self { attempts, made })
    }
}
