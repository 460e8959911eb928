//! In-memory storage backend for testing.
//!
//! Keeps lists, items and selections in maps behind an `Arc<Mutex<_>>` and
//! reproduces the SQLite backend's ownership, cascade and selection rules.
//! Useful for exercising callers without a database file.
//!
//! # Example
//!
//! ```rust
//! use catty::storage::InMemoryStore;
//! use catty_core::storage::ReminderStore;
//!
//! let store = InMemoryStore::new();
//! let mut alice = store.for_owner("alice");
//! let list_id = alice.create_list("Groceries").unwrap();
//! assert_eq!(alice.get_list(list_id).unwrap().name, "Groceries");
//! ```

mod repository;

pub use repository::{InMemoryStorage, InMemoryStore};
