//! Ownership checks for lists and items.
//!
//! Backends fetch the raw rows and hand them to these functions, so every
//! operation reports the same error kinds for the same situations:
//!
//! - no row with the id -> [`StorageError::NotFound`]
//! - row exists but belongs to someone else -> [`StorageError::Forbidden`]
//!
//! Items have no owner column. An item is accessible only if its parent list
//! is accessible.

use crate::storage::{Result, StorageError};

use super::{ItemId, ListId, ReminderItem, ReminderList};

const LIST: &str = "ReminderList";
const ITEM: &str = "ReminderItem";

/// Checks a fetched list row against the acting owner.
pub fn authorize_list(
    owner: &str,
    list_id: ListId,
    found: Option<ReminderList>,
) -> Result<ReminderList> {
    match found {
        None => Err(StorageError::not_found(LIST, list_id)),
        Some(list) if !list.is_owned_by(owner) => Err(StorageError::forbidden(LIST, list_id)),
        Some(list) => Ok(list),
    }
}

/// Fails with `NotFound` when no item row was fetched.
pub fn require_item(item_id: ItemId, found: Option<ReminderItem>) -> Result<ReminderItem> {
    found.ok_or_else(|| StorageError::not_found(ITEM, item_id))
}

/// Checks an item through its parent list.
///
/// `parent` is the list row fetched with `item.list_id`. Errors are reported
/// against the item so callers see which id they asked for.
pub fn authorize_item(
    owner: &str,
    item: ReminderItem,
    parent: Option<ReminderList>,
) -> Result<ReminderItem> {
    match authorize_list(owner, item.list_id, parent) {
        Ok(_) => Ok(item),
        Err(StorageError::Forbidden { .. }) => Err(StorageError::forbidden(ITEM, item.id)),
        Err(_) => Err(StorageError::not_found(ITEM, item.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> ReminderList {
        ReminderList::new(1, "alice", "Groceries")
    }

    #[test]
    fn test_missing_list_is_not_found() {
        let result = authorize_list("alice", 1, None);

        assert_eq!(
            result,
            Err(StorageError::NotFound {
                entity_type: "ReminderList",
                id: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_foreign_list_is_forbidden() {
        let result = authorize_list("bob", 1, Some(groceries()));

        assert_eq!(
            result,
            Err(StorageError::Forbidden {
                entity_type: "ReminderList",
                id: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_own_list_passes() {
        let result = authorize_list("alice", 1, Some(groceries()));

        assert_eq!(result, Ok(groceries()));
    }

    #[test]
    fn test_missing_item_is_not_found() {
        let result = require_item(9, None);

        assert!(matches!(
            result,
            Err(StorageError::NotFound {
                entity_type: "ReminderItem",
                ..
            })
        ));
    }

    #[test]
    fn test_item_in_foreign_list_is_forbidden() {
        let item = ReminderItem::new(4, 1, "Milk");

        let result = authorize_item("bob", item, Some(groceries()));

        assert_eq!(
            result,
            Err(StorageError::Forbidden {
                entity_type: "ReminderItem",
                id: "4".to_string(),
            })
        );
    }

    #[test]
    fn test_item_with_missing_parent_is_not_found() {
        let item = ReminderItem::new(4, 1, "Milk");

        let result = authorize_item("alice", item, None);

        assert_eq!(
            result,
            Err(StorageError::NotFound {
                entity_type: "ReminderItem",
                id: "4".to_string(),
            })
        );
    }

    #[test]
    fn test_item_in_own_list_passes() {
        let item = ReminderItem::new(4, 1, "Milk");

        let result = authorize_item("alice", item.clone(), Some(groceries()));

        assert_eq!(result, Ok(item));
    }
}
