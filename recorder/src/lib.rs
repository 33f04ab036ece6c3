pub mod config;
pub mod ticker;

use database::{DatabaseError, MatchStore, SessionStore};
use serde_json::json;
use thiserror::Error;
use types::{CourtBounds, GameState, Match, Operator, Outcome, ScoreSheet};
use uuid::Uuid;

pub use crate::config::RecorderConfig;
pub use crate::ticker::Ticker;

#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("Storage error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Clone, Debug, Default)]
pub struct SessionOptions {
    pub bounds: CourtBounds,
    /// Write the final score sheet back to the match record.
    pub publish: bool,
}

/// Drives one recording session until the operator quits or runs out of
/// commands. The snapshot is saved after every state change and on every
/// clock tick. Calls to `store` are best effort: failures are logged and the
/// session carries on.
pub async fn run_session(
    state: &mut GameState,
    game: &Match,
    operator: &mut dyn Operator,
    sessions: &SessionStore,
    store: Option<&dyn MatchStore>,
    options: &SessionOptions,
) -> Result<ScoreSheet, RecorderError> {
    let mut ticker = Ticker::default();
    if state.clock().is_running() {
        ticker.start();
    }

    loop {
        let command = tokio::select! {
            command = operator.next_command(state) => command,
            _ = ticker.tick() => {
                sessions.save(&state.snapshot()).await?;
                continue;
            }
        };
        let Some(command) = command else {
            log::info!("Operator finished");
            break;
        };

        let outcome = match state.apply(&command, &options.bounds) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("Rejected {command}: {err}");
                operator.notify(&err.to_string());
                continue;
            }
        };

        match outcome {
            Outcome::Quit => break,
            Outcome::ShowSheet => {
                let sheet = build_sheet(state, game);
                operator.notify(&sheet.to_string());
            }
            Outcome::ShowLog => operator.notify(&state.event_log_table()),
            Outcome::Clock(_) => {
                if state.clock().is_running() {
                    ticker.start();
                } else {
                    ticker.stop();
                }
            }
            Outcome::Substituted { outgoing, .. } => {
                if let Some(store) = store {
                    bench_player(store, state.match_id, outgoing).await;
                }
            }
            Outcome::Recorded(_) | Outcome::Updated | Outcome::Unchanged => {}
        }

        if outcome.changes_state() {
            sessions.save(&state.snapshot()).await?;
        }
    }

    ticker.stop();
    sessions.save(&state.snapshot()).await?;
    let sheet = build_sheet(state, game);
    if options.publish {
        match store {
            Some(store) => publish_sheet(store, &sheet).await,
            None => log::warn!("Nothing to publish to, no match store configured"),
        }
    }
    Ok(sheet)
}

pub fn build_sheet(state: &GameState, game: &Match) -> ScoreSheet {
    ScoreSheet::build(
        game,
        state.players(),
        state.events(),
        state.clock().elapsed_ms(),
    )
}

async fn bench_player(store: &dyn MatchStore, match_id: Uuid, player_id: Uuid) {
    match store
        .patch_player(match_id, player_id, json!({ "isStarter": false }), None)
        .await
    {
        Ok(_) => log::debug!("Cleared starter flag of {player_id}"),
        Err(err) => log::warn!("Could not clear starter flag of {player_id}: {err}"),
    }
}

pub async fn publish_sheet(store: &dyn MatchStore, sheet: &ScoreSheet) {
    let match_id = sheet.game.id;
    match store.patch_match(match_id, sheet.match_patch(), None).await {
        Ok(updated) => log::info!(
            "Published score sheet for {match_id} (revision {})",
            updated.revision
        ),
        Err(err) => log::warn!("Could not publish score sheet for {match_id}: {err}"),
    }
}
