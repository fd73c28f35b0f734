//! # fleetops-notify
//!
//! Outbound message dispatch for the FleetOps batch engine. Defines the
//! [`MessageDispatcher`] port the alerting engine depends on, the
//! Telegram Bot API implementation, and the human-readable alert
//! message templates.

pub mod dispatcher;
pub mod message;
pub mod telegram;

pub use dispatcher::{MessageDispatcher, MessageFormat};
pub use telegram::TelegramDispatcher;
