//! Integration tests for the FleetOps batch engine.
//!
//! Both daily jobs run end to end against in-memory store fakes and a
//! recording dispatcher, so every scenario here exercises the same
//! wiring the cron runner uses, minus PostgreSQL and Telegram.

mod helpers;
mod recurring_test;
