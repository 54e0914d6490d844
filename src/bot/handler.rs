use async_trait::async_trait;
use tracing::{info, warn};

use crate::remote::{FootballClient, RemoteError, TelegramClient};
use crate::remote::models::{Fixture, ScorerEntry, StandingsRow};
use crate::schedule::{group_and_select, LocalZone};

use super::cache::SportsCache;
use super::dispatcher::UpdateHandler;
use super::replies;
use super::router::{route, Action};

/// Routes each inbound message and produces its reply.
///
/// Per-update failures are self-contained: a remote error becomes the
/// corresponding "could not fetch" reply, a failed send is logged, and in
/// either case the dispatch loop moves on to the next update.
pub struct CommandHandler {
    telegram: TelegramClient,
    football: FootballClient,
    cache: SportsCache,
    zone: LocalZone,
}

impl CommandHandler {
    pub fn new(
        telegram: TelegramClient,
        football: FootballClient,
        cache: SportsCache,
        zone: LocalZone,
    ) -> Self {
        CommandHandler {
            telegram,
            football,
            cache,
            zone,
        }
    }

    /// Best-effort send: delivery failure never aborts the loop.
    async fn send(&self, chat_id: i64, text: &str) {
        if let Err(e) = self.telegram.send_message(chat_id, text).await {
            warn!("Failed to send reply to chat {}: {}", chat_id, e);
        }
    }

    async fn standings_cached(&mut self) -> Result<Vec<StandingsRow>, RemoteError> {
        if let Some(rows) = self.cache.standings.get() {
            return Ok(rows);
        }
        let rows = self.football.fetch_standings().await?;
        self.cache.standings.put(rows.clone());
        Ok(rows)
    }

    async fn scorers_cached(&mut self) -> Result<Vec<ScorerEntry>, RemoteError> {
        if let Some(scorers) = self.cache.scorers.get() {
            return Ok(scorers);
        }
        let scorers = self.football.fetch_scorers().await?;
        self.cache.scorers.put(scorers.clone());
        Ok(scorers)
    }

    async fn fixtures_cached(&mut self) -> Result<Vec<Fixture>, RemoteError> {
        if let Some(fixtures) = self.cache.fixtures.get() {
            return Ok(fixtures);
        }
        let fixtures = self.football.fetch_fixtures().await?;
        self.cache.fixtures.put(fixtures.clone());
        Ok(fixtures)
    }

    async fn standings_reply(&mut self) -> String {
        match self.standings_cached().await {
            Ok(rows) if rows.is_empty() => replies::NO_STANDINGS.to_string(),
            Ok(rows) => replies::format_standings(&rows),
            Err(e) => {
                warn!("Standings fetch failed: {}", e);
                replies::STANDINGS_UNAVAILABLE.to_string()
            }
        }
    }

    async fn scorers_reply(&mut self) -> String {
        match self.scorers_cached().await {
            Ok(scorers) if scorers.is_empty() => replies::NO_SCORERS.to_string(),
            Ok(scorers) => replies::format_scorers(&scorers),
            Err(e) => {
                warn!("Scorers fetch failed: {}", e);
                replies::SCORERS_UNAVAILABLE.to_string()
            }
        }
    }

    async fn fixtures_reply(&mut self) -> String {
        let fixtures = match self.fixtures_cached().await {
            Ok(fixtures) if fixtures.is_empty() => return replies::NO_FIXTURES.to_string(),
            Ok(fixtures) => fixtures,
            Err(e) => {
                warn!("Fixtures fetch failed: {}", e);
                return replies::FIXTURES_UNAVAILABLE.to_string();
            }
        };

        // No upcoming matchday is a normal outcome, not a failure.
        match group_and_select(&fixtures, self.zone.today(), &self.zone) {
            Some(day) => replies::format_matchday(&day),
            None => replies::NO_UPCOMING_FIXTURES.to_string(),
        }
    }
}

#[async_trait]
impl UpdateHandler for CommandHandler {
    async fn handle(&mut self, chat_id: i64, text: &str) {
        info!("📩 Message from chat {}: {}", chat_id, text);

        match route(text) {
            Action::Standings => {
                self.send(chat_id, replies::FETCHING_STANDINGS).await;
                let reply = self.standings_reply().await;
                self.send(chat_id, &reply).await;
            }
            Action::Scorers => {
                self.send(chat_id, replies::FETCHING_SCORERS).await;
                let reply = self.scorers_reply().await;
                self.send(chat_id, &reply).await;
            }
            Action::Fixtures => {
                self.send(chat_id, replies::FETCHING_FIXTURES).await;
                let reply = self.fixtures_reply().await;
                self.send(chat_id, &reply).await;
            }
            Action::Chant(rule) => self.send(chat_id, rule.pick()).await,
            Action::Help => self.send(chat_id, replies::HELP).await,
        }
    }
}
