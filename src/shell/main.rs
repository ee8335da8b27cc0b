use clap::Parser;
use field_timesheets::shared::infrastructure::key_value_store::file::FileKeyValueStore;
use field_timesheets::shell::cli::{Cli, handle_command};
use field_timesheets::shell::state::{AppState, current_day};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(store_path = %cli.config.store_path.display(), "opening store");

    let store = Arc::new(FileKeyValueStore::new(cli.config.store_path.clone()));
    let state = AppState::new(store, current_day(), cli.config.conflict_retries);

    let output = handle_command(cli.command, &state).await?;
    println!("{output}");
    Ok(())
}
