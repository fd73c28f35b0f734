//! Telegram Bot API dispatcher implementation.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use fleetops_core::config::telegram::TelegramConfig;
use fleetops_core::error::{AppError, ErrorKind};
use fleetops_core::result::AppResult;

use crate::dispatcher::{MessageDispatcher, MessageFormat};

/// Dispatches messages through the Telegram Bot API `sendMessage` call.
///
/// Credentials are optional: a missing bot token or admin chat ID makes
/// the corresponding send fail fast with a configuration error before
/// any network I/O.
#[derive(Clone)]
pub struct TelegramDispatcher {
    client: reqwest::Client,
    api_base: String,
    bot_token: Option<String>,
    admin_chat_id: Option<String>,
}

impl fmt::Debug for TelegramDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramDispatcher")
            .field("api_base", &self.api_base)
            .field("has_token", &self.bot_token.is_some())
            .field("admin_chat_id", &self.admin_chat_id)
            .finish()
    }
}

/// Subset of the Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramDispatcher {
    /// Create a new dispatcher from configuration.
    pub fn new(config: &TelegramConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone(),
            admin_chat_id: config.admin_chat_id.clone(),
        })
    }
}

#[async_trait]
impl MessageDispatcher for TelegramDispatcher {
    async fn send(&self, target: &str, text: &str, format: MessageFormat) -> AppResult<()> {
        let token = self.bot_token.as_deref().ok_or_else(|| {
            AppError::configuration("Telegram bot token is not configured")
        })?;

        let url = format!("{}/bot{}/sendMessage", self.api_base, token);
        let mut body = serde_json::json!({
            "chat_id": target,
            "text": text,
        });
        if let Some(mode) = format.parse_mode() {
            body["parse_mode"] = serde_json::Value::String(mode.to_string());
        }

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Telegram request failed: {e}"),
                    e,
                )
            })?;

        let api: ApiResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                "Failed to decode Telegram response",
                e,
            )
        })?;

        if !api.ok {
            return Err(AppError::external_service(format!(
                "Telegram API rejected message: {}",
                api.description.unwrap_or_else(|| "no description".to_string())
            )));
        }

        debug!(chat_id = target, "Telegram message delivered");
        Ok(())
    }

    async fn send_to_admin(&self, text: &str, format: MessageFormat) -> AppResult<()> {
        let chat_id = self
            .admin_chat_id
            .clone()
            .ok_or_else(|| AppError::configuration("Telegram admin chat ID is not configured"))?;

        self.send(&chat_id, text, format).await
    }
}
