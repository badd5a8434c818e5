pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::core::rates::RateClient;
use crate::providers::frankfurter::FrankfurterClient;

const DEFAULT_RATES_URL: &str = "https://api.frankfurter.app";

pub enum AppCommand {
    Convert,
    Rate { from: String, to: String },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Exchange rate checker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let base_url = config
        .providers
        .rates
        .as_ref()
        .map_or(DEFAULT_RATES_URL, |p| &p.base_url);
    let client: Arc<dyn RateClient> = Arc::new(FrankfurterClient::new(base_url));

    match command {
        AppCommand::Convert => cli::convert::run(client, &config.base_currency).await,
        AppCommand::Rate { from, to } => cli::rate::run(client, &from, &to).await,
    }
}
