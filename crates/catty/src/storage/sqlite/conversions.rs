//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows into domain types.

use catty_core::reminders::{ReminderItem, ReminderList};
use rusqlite::Row;

/// Convert a SQLite row to a ReminderList.
///
/// Expected columns: id, owner, name
pub fn row_to_list(row: &Row) -> rusqlite::Result<ReminderList> {
    Ok(ReminderList {
        id: row.get(0)?,
        owner: row.get(1)?,
        name: row.get(2)?,
    })
}

/// Convert a SQLite row to a ReminderItem.
///
/// Expected columns: id, list_id, description, completed
pub fn row_to_item(row: &Row) -> rusqlite::Result<ReminderItem> {
    Ok(ReminderItem {
        id: row.get(0)?,
        list_id: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
    })
}
