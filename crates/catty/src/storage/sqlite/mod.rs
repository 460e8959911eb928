//! SQLite storage backend.
//!
//! One `rusqlite` connection per [`SqliteStorage`] instance. The database
//! and its tables are provisioned on construction.

mod conversions;
mod error;
mod provision;
mod repository;
mod schema;

pub use provision::ConnectionConfig;
pub use repository::SqliteStorage;
