use anyhow::Result;
use api::Api;
use clap::Parser;
use cli::{Cli, Commands};
use types::Config;

mod api;
mod cli;
mod commands;
mod models;
mod runner;
mod types;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = commands::config::config_path()?;
    let cfg = Config::load(&config_path)?;
    let api = Api::new(&cfg.api_url(), cfg.token());

    match cli.cmd {
        Commands::Agenda => commands::agenda::handle(&api).await?,
        Commands::Session(cmd) => commands::session::handle(cmd, &api).await?,
        Commands::History { days } => commands::history::handle(&api, days).await?,
        Commands::Config(cmd) => commands::config::handle(cmd).await?,
    }

    Ok(())
}
