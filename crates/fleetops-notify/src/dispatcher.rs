//! Message dispatcher port.

use async_trait::async_trait;

use fleetops_core::result::AppResult;

/// Rich-text mode understood by the dispatcher channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    /// HTML tags (`<b>`, `<i>`, ...).
    Html,
    /// Markdown markers.
    Markdown,
    /// No formatting.
    Plain,
}

impl MessageFormat {
    /// Telegram `parse_mode` value, if any.
    pub fn parse_mode(&self) -> Option<&'static str> {
        match self {
            Self::Html => Some("HTML"),
            Self::Markdown => Some("Markdown"),
            Self::Plain => None,
        }
    }
}

/// Outbound channel used to deliver human-readable alert text to an
/// operator — decouples the batch jobs from the Telegram Bot API.
///
/// A `send` failure is always per-message: implementations must not
/// carry failure state across calls.
#[async_trait]
pub trait MessageDispatcher: Send + Sync + std::fmt::Debug {
    /// Deliver `text` to an explicit target (chat) identifier.
    async fn send(&self, target: &str, text: &str, format: MessageFormat) -> AppResult<()>;

    /// Deliver `text` to the configured admin target.
    async fn send_to_admin(&self, text: &str, format: MessageFormat) -> AppResult<()>;
}
