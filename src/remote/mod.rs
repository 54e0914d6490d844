pub mod football;
pub mod models;
pub mod telegram;

pub use football::FootballClient;
pub use telegram::TelegramClient;

use thiserror::Error;

/// Classification of a failed remote call.
///
/// Non-2xx responses become `Status`, connection-level failures (refused,
/// timed out, DNS) are caught at the gateway boundary as `Transport`, and a
/// 2xx body that cannot be decoded becomes `Payload`. Callers decide whether
/// to retry; none of these ever panic or tear down the dispatch loop.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected payload: {0}")]
    Payload(String),
}
