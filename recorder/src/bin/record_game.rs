use std::path::PathBuf;

use clap::Parser;
use console::{ConsoleOperator, ScriptOperator};
use database::{JsonFileStore, MatchStore, SessionStore, StoreConfig};
use recorder::{run_session, RecorderConfig, SessionOptions};
use types::{GameState, Operator};
use uuid::Uuid;

#[derive(Parser, Debug)]
struct Params {
    /// Match to record, as created through the API.
    #[arg(short, long)]
    match_id: Uuid,

    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// YAML file with `data_dir` and `court` bounds.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Replay commands from a file instead of reading stdin.
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Write the final scores back to the match record.
    #[arg(long)]
    publish: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");

    let yaml = match &args.config {
        Some(path) => RecorderConfig::from_yaml_file(path)?,
        None => RecorderConfig::default(),
    };
    let store_config = StoreConfig::from_cli_or_env_or_yaml(args.data_dir.clone(), yaml.data_dir);
    let store = JsonFileStore::open(store_config.clone()).await?;
    let sessions = SessionStore::new(store_config);

    let game = store.get_match(args.match_id).await?;
    let players = store.list_players(game.id).await?;
    let snapshot = sessions.load(game.id).await?;
    log::info!(
        "Recording {} ({} vs {}) with {} players",
        game.name,
        game.team_a,
        game.team_b,
        players.len()
    );

    let mut state = GameState::new(game.id, players, snapshot);
    let mut operator: Box<dyn Operator> = match &args.script {
        Some(path) => Box::new(ScriptOperator::from_file(path)?),
        None => Box::new(ConsoleOperator::new()),
    };
    let options = SessionOptions {
        bounds: yaml.court.unwrap_or_default(),
        publish: args.publish,
    };

    let sheet = run_session(
        &mut state,
        &game,
        operator.as_mut(),
        &sessions,
        Some(&store as &dyn MatchStore),
        &options,
    )
    .await?;
    println!("{sheet}");
    Ok(())
}
