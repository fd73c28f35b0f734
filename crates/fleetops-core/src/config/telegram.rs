//! Telegram dispatcher configuration.

use serde::{Deserialize, Serialize};

/// Telegram Bot API dispatcher configuration.
///
/// Both `bot_token` and `admin_chat_id` are optional: when either is
/// absent, every dispatch attempt fails fast with a configuration error
/// instead of making a network call. The batch jobs treat that the same
/// as any other per-alert delivery failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather.
    #[serde(default)]
    pub bot_token: Option<String>,
    /// Chat ID that receives operational alerts.
    #[serde(default)]
    pub admin_chat_id: Option<String>,
    /// Base URL of the Bot API (overridable for testing).
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            admin_chat_id: None,
            api_base: default_api_base(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_timeout() -> u64 {
    10
}
