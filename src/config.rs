use clap::Parser;

/// Brasileirão standings, scorers and fixtures Telegram bot
#[derive(Parser, Debug, Clone)]
#[command(name = "brasileirao-bot", version, about)]
pub struct Config {
    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_TOKEN")]
    pub telegram_token: String,

    /// football-data.org API token
    #[arg(long, env = "FOOTBALL_TOKEN")]
    pub football_token: String,

    /// Telegram Bot API base URL
    #[arg(long, env = "TELEGRAM_API_URL", default_value = "https://api.telegram.org")]
    pub telegram_api_url: String,

    /// football-data.org API base URL
    #[arg(
        long,
        env = "FOOTBALL_API_URL",
        default_value = "https://api.football-data.org/v4"
    )]
    pub football_api_url: String,

    /// Competition code to relay
    #[arg(long, env = "COMPETITION", default_value = "BSA")]
    pub competition: String,

    /// Timezone fixtures are presented in
    #[arg(long, env = "TIMEZONE", default_value = "America/Sao_Paulo")]
    pub timezone: String,

    /// getUpdates long-poll timeout in seconds
    #[arg(long, env = "LONG_POLL_TIMEOUT_SECS", default_value = "100")]
    pub long_poll_timeout_secs: u64,

    /// Pause after a failed getUpdates call, in seconds
    #[arg(long, env = "ERROR_BACKOFF_SECS", default_value = "5")]
    pub error_backoff_secs: u64,

    /// Sports-data cache TTL in seconds (0 fetches on every command)
    #[arg(long, env = "CACHE_TTL_SECS", default_value = "60")]
    pub cache_ttl_secs: u64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.telegram_token.trim().is_empty() {
            anyhow::bail!("TELEGRAM_TOKEN must not be empty");
        }
        if self.football_token.trim().is_empty() {
            anyhow::bail!("FOOTBALL_TOKEN must not be empty");
        }
        if self.competition.trim().is_empty() {
            anyhow::bail!("competition code must not be empty");
        }
        if self.long_poll_timeout_secs == 0 {
            anyhow::bail!("long_poll_timeout_secs must be positive");
        }
        Ok(())
    }
}
