use serde::{Deserialize, Serialize};

/// Engine-assigned identifier of a reminder list.
pub type ListId = i64;

/// Engine-assigned identifier of a reminder item.
pub type ItemId = i64;

/// A named list of reminders belonging to exactly one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderList {
    pub id: ListId,
    pub owner: String,
    pub name: String,
}

impl ReminderList {
    pub fn new(id: ListId, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Returns true if `owner` owns this list.
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner == owner
    }
}

/// A single reminder inside a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderItem {
    pub id: ItemId,
    pub list_id: ListId,
    pub description: String,
    pub completed: bool,
}

impl ReminderItem {
    /// Creates a new, not yet completed item.
    pub fn new(id: ItemId, list_id: ListId, description: impl Into<String>) -> Self {
        Self {
            id,
            list_id,
            description: description.into(),
            completed: false,
        }
    }

    /// Sets the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// The list an owner currently has open, together with its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedList {
    pub id: ListId,
    pub owner: String,
    pub name: String,
    pub items: Vec<ReminderItem>,
}

impl SelectedList {
    pub fn from_parts(list: ReminderList, items: Vec<ReminderItem>) -> Self {
        Self {
            id: list.id,
            owner: list.owner,
            name: list.name,
            items,
        }
    }

    /// Number of items not yet struck.
    pub fn pending(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }
}
