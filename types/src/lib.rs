pub mod clock;
pub mod command;
pub mod court;
pub mod error;
pub mod event;
pub mod game_state;
pub mod match_info;
pub mod operator;
pub mod player;
pub mod quarter;
pub mod roster;
pub mod score_sheet;
pub mod tally;
pub mod team;

pub use clock::Clock;
pub use command::{ClockAction, Command, FreeThrowInput, Outcome};
pub use court::{CourtBounds, CourtPosition, EventMarker, MarkerShape, MarkerStyle};
pub use error::RecordError;
pub use event::{EventKind, FoulKind, GameEvent, MiscKind, ReboundKind};
pub use game_state::{GameState, SessionSnapshot};
pub use match_info::{Match, NewMatch, PeriodFouls, PeriodScores, TeamPair};
pub use operator::Operator;
pub use player::{NewPlayer, Player};
pub use quarter::{Quarter, QuarterBoard, QuarterStatus};
pub use roster::ActiveRoster;
pub use score_sheet::ScoreSheet;
pub use tally::Tally;
pub use team::{Team, TeamScore};
