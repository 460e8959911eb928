//! Selected list CLI commands.

use catty_core::reminders::ListId;
use clap::{Parser, Subcommand};

/// Selected list commands.
#[derive(Debug, Parser)]
pub struct SelectedCommand {
    #[command(subcommand)]
    pub action: SelectedAction,
}

/// Available selection actions.
#[derive(Debug, Subcommand)]
pub enum SelectedAction {
    /// Show the selected list with its items.
    Show,
    /// Print the selected list ID.
    Id,
    /// Select a list.
    Set {
        /// List ID.
        list_id: ListId,
    },
    /// Clear the selection.
    Clear,
}
