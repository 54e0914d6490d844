use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};

use crate::remote::{RemoteError, TelegramClient};

/// Seam between the poll loop and command handling, so the drain logic can
/// be exercised without a live handler.
#[async_trait]
pub trait UpdateHandler: Send {
    /// Process one inbound text message. Implementations absorb their own
    /// failures; the dispatcher treats every call as handled.
    async fn handle(&mut self, chat_id: i64, text: &str);
}

/// The long-poll loop. Owns the update cursor: the id boundary between
/// already-processed inbound messages and new ones.
pub struct Dispatcher<H> {
    telegram: TelegramClient,
    handler: H,
    /// Never decreases; always passed as the lower bound of the next fetch.
    cursor: i64,
    long_poll_timeout_secs: u64,
    error_backoff: Duration,
}

impl<H: UpdateHandler> Dispatcher<H> {
    pub fn new(
        telegram: TelegramClient,
        handler: H,
        long_poll_timeout_secs: u64,
        error_backoff: Duration,
    ) -> Self {
        Dispatcher {
            telegram,
            handler,
            cursor: 0,
            long_poll_timeout_secs,
            error_backoff,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// One Polling → Draining cycle: fetch the next batch and route every
    /// update in ascending id order, exactly once each.
    ///
    /// The cursor moves to `update_id + 1` only after the route attempt for
    /// that update completes; an error from `get_updates` leaves it
    /// untouched so nothing is skipped on retry. Updates without a text
    /// message are acknowledged by the cursor advance alone.
    pub async fn poll_once(&mut self) -> Result<usize, RemoteError> {
        let updates = self
            .telegram
            .get_updates(self.cursor, self.long_poll_timeout_secs)
            .await?;
        let count = updates.len();

        for update in updates {
            if let Some(message) = update.message {
                if let Some(text) = message.text {
                    self.handler.handle(message.chat.id, &text).await;
                }
            }
            self.cursor = update.update_id + 1;
        }

        Ok(count)
    }

    /// Run until process shutdown. The long-poll is the loop's only
    /// suspension point; an empty batch re-polls immediately, and a failed
    /// poll backs off for the configured pause so a broken remote is not
    /// hammered.
    pub async fn run(&mut self) {
        info!(
            "Update dispatcher started (cursor={}, long-poll timeout {}s)",
            self.cursor(),
            self.long_poll_timeout_secs
        );

        loop {
            if let Err(e) = self.poll_once().await {
                warn!("getUpdates failed: {}; retrying in {:?}", e, self.error_backoff);
                tokio::time::sleep(self.error_backoff).await;
            }
        }
    }
}
