mod access;
mod selection;
mod types;

pub use access::{authorize_item, authorize_list, require_item};
pub use selection::{selection_after_delete, SelectionUpdate};
pub use types::{ItemId, ListId, ReminderItem, ReminderList, SelectedList};
