use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use database::{JsonFileStore, StoreConfig};
use server::{configure, telemetry, AppState};

#[derive(Parser, Debug)]
struct Params {
    #[arg(long, env = "SCOREKEEPER_HOST", default_value = "127.0.0.1")]
    host: String,

    #[arg(long, env = "SCOREKEEPER_PORT", default_value_t = 3000)]
    port: u16,

    /// Directory holding matches.json and players.json.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();
    let args = Params::parse();

    let store = JsonFileStore::open(StoreConfig::from_cli_or_env_or_yaml(args.data_dir, None)).await?;
    let state = web::Data::new(AppState::new(Arc::new(store)));

    tracing::info!(host = %args.host, port = args.port, "Starting scorekeeper API");
    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind((args.host.as_str(), args.port))?
        .run()
        .await?;
    Ok(())
}
