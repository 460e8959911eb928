//! Reminder list CLI commands.

use catty_core::reminders::ListId;
use clap::{Parser, Subcommand};

/// Reminder list management commands.
#[derive(Debug, Parser)]
pub struct ListsCommand {
    #[command(subcommand)]
    pub action: ListsAction,
}

/// Available list actions.
#[derive(Debug, Subcommand)]
pub enum ListsAction {
    /// Show all of your lists.
    List,
    /// Create a new list.
    Create {
        /// List name.
        name: String,
    },
    /// Get list by ID.
    Get {
        /// List ID.
        id: ListId,
    },
    /// Rename a list.
    Rename {
        /// List ID.
        id: ListId,
        /// New name.
        name: String,
    },
    /// Delete list by ID, along with its items.
    Delete {
        /// List ID.
        id: ListId,
    },
    /// Delete all of your lists.
    Clear,
}
