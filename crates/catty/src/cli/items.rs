//! Reminder item CLI commands.

use catty_core::reminders::{ItemId, ListId};
use clap::{Parser, Subcommand};

/// Reminder item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// Show the items of a list.
    List {
        /// List ID.
        list_id: ListId,
    },
    /// Add an item to a list.
    Add {
        /// List ID.
        list_id: ListId,
        /// Item description.
        description: String,
    },
    /// Get item by ID.
    Get {
        /// Item ID.
        id: ItemId,
    },
    /// Toggle the completed flag of an item.
    Strike {
        /// Item ID.
        id: ItemId,
    },
    /// Replace the description of an item.
    Edit {
        /// Item ID.
        id: ItemId,
        /// New description.
        description: String,
    },
    /// Delete item by ID.
    Delete {
        /// Item ID.
        id: ItemId,
    },
}
