//! Catty reminders: owner-scoped reminder lists on SQLite, plus the CLI that
//! drives them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod storage;

pub use config::Config;
pub use storage::{ConnectionConfig, InMemoryStorage, InMemoryStore, SqliteStorage};
