use std::fmt::Debug;

use async_trait::async_trait;

use crate::{command::Command, game_state::GameState};

/// Source of operator commands for a recording session.
#[async_trait]
pub trait Operator: Debug + Send {
    /// Next command, or `None` once the operator has nothing more to say.
    async fn next_command(&mut self, state: &GameState) -> Option<Command>;

    /// Feedback for the operator, e.g. a rejected action.
    fn notify(&mut self, _message: &str) {}
}
