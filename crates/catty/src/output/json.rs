//! JSON output formatting.

use catty_core::reminders::{ItemId, ListId};
use serde::Serialize;

/// Format a value as JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Body returned after creating a list or an item (both IDs share a type).
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: ListId,
}

/// Body returned after striking an item.
#[derive(Debug, Serialize)]
pub struct Struck {
    pub id: ItemId,
    pub completed: bool,
}

/// Body returned for the selected list ID.
#[derive(Debug, Serialize)]
pub struct Selection {
    pub list_id: Option<ListId>,
}
