use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing::info;

mod bot;
mod config;
mod remote;
mod schedule;

use bot::{CommandHandler, Dispatcher, SportsCache};
use config::Config;
use remote::{FootballClient, TelegramClient};
use schedule::LocalZone;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let telegram = TelegramClient::new(
        &config.telegram_api_url,
        &config.telegram_token,
        config.long_poll_timeout_secs,
    )?;
    let football = FootballClient::new(
        &config.football_api_url,
        &config.football_token,
        &config.competition,
    )?;

    let zone = LocalZone::resolve(&config.timezone);
    let cache = SportsCache::new(Duration::from_secs(config.cache_ttl_secs));
    let handler = CommandHandler::new(telegram.clone(), football, cache, zone);

    info!(
        "Relaying competition {} (timezone {}, cache TTL {}s)",
        config.competition, config.timezone, config.cache_ttl_secs
    );

    let mut dispatcher = Dispatcher::new(
        telegram,
        handler,
        config.long_poll_timeout_secs,
        Duration::from_secs(config.error_backoff_secs),
    );
    dispatcher.run().await;

    Ok(())
}
