//! Storage backend implementations.
//!
//! Concrete implementations of the [`catty_core::storage::ReminderStore`]
//! trait:
//!
//! - [`SqliteStorage`]: the persistent backend, one connection per instance
//! - [`InMemoryStore`]: shared in-process state for tests and demos

pub mod inmemory;
pub mod sqlite;

pub use inmemory::{InMemoryStorage, InMemoryStore};
pub use sqlite::{ConnectionConfig, SqliteStorage};
