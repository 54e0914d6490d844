use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::RemoteError;

/// Extra headroom on the HTTP client timeout so the long-poll can run its
/// full server-side interval without the client cutting it off.
const LONG_POLL_TIMEOUT_MARGIN_SECS: u64 = 10;

// ── Wire types ─────────────────────────────────────────────────────────────

/// A Telegram Update (subset of fields the bot consumes).
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    /// Present when the update is a message; other update kinds are still
    /// acknowledged by the dispatcher's cursor advance.
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    /// Absent for photos, stickers and the like.
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
struct UpdatesResponse {
    ok: bool,
    #[serde(default)]
    result: Vec<Update>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    parse_mode: &'a str,
}

// ── Client ─────────────────────────────────────────────────────────────────

/// Client for the Telegram Bot API: the inbound long-poll and the outbound
/// reply endpoint.
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    base_url: String,
}

impl TelegramClient {
    /// `api_url` is the host root (overridable in tests); the bot token is
    /// baked into the base URL the way the Bot API expects.
    pub fn new(api_url: &str, token: &str, long_poll_timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(
                long_poll_timeout_secs + LONG_POLL_TIMEOUT_MARGIN_SECS,
            ))
            .build()
            .context("Failed to build HTTP client for Telegram")?;
        Ok(TelegramClient {
            http,
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        })
    }

    /// Long-poll for updates with ids >= `offset`.
    ///
    /// The server holds the connection open for up to `timeout_secs` before
    /// returning an empty batch; this call is the dispatch loop's natural
    /// suspension point.
    pub async fn get_updates(
        &self,
        offset: i64,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, RemoteError> {
        let url = format!("{}/getUpdates", self.base_url);
        debug!("Polling {} (offset={})", url, offset);

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("timeout", timeout_secs.to_string()),
                ("offset", offset.to_string()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: UpdatesResponse = resp
            .json()
            .await
            .map_err(|e| RemoteError::Payload(e.to_string()))?;
        if !parsed.ok {
            return Err(RemoteError::Payload(format!(
                "getUpdates returned ok=false: {}",
                parsed.description.unwrap_or_default()
            )));
        }

        Ok(parsed.result)
    }

    /// Send an HTML-formatted reply to a chat. Best-effort from the loop's
    /// point of view: the caller logs failures and moves on.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), RemoteError> {
        let url = format!("{}/sendMessage", self.base_url);
        let body = SendMessageRequest {
            chat_id,
            text,
            parse_mode: "HTML",
        };

        let resp = self.http.post(&url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SendResponse = resp
            .json()
            .await
            .map_err(|e| RemoteError::Payload(e.to_string()))?;
        if !parsed.ok {
            return Err(RemoteError::Payload(format!(
                "sendMessage returned ok=false: {}",
                parsed.description.unwrap_or_default()
            )));
        }

        Ok(())
    }
}
