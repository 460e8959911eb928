use crate::reminders::{ItemId, ListId, ReminderItem, ReminderList, SelectedList};

use super::Result;

/// Owner-scoped access to reminder lists, items and the selected list.
///
/// An implementation is bound to one owner for its whole life. Every list or
/// item operation verifies that the list (or the item's list) belongs to that
/// owner and fails with `NotFound` or `Forbidden` otherwise.
pub trait ReminderStore: Send {
    /// The owner this store acts for.
    fn owner(&self) -> &str;

    /// Creates a list owned by the caller and returns its id.
    fn create_list(&mut self, name: &str) -> Result<ListId>;

    /// Gets one of the caller's lists.
    fn get_list(&self, list_id: ListId) -> Result<ReminderList>;

    /// Gets all of the caller's lists, ordered by id.
    fn get_lists(&self) -> Result<Vec<ReminderList>>;

    /// Renames one of the caller's lists.
    fn update_list_name(&mut self, list_id: ListId, new_name: &str) -> Result<()>;

    /// Deletes a list and its items.
    ///
    /// When the list was the selected one, the selection moves to the first
    /// remaining list or is cleared.
    fn delete_list(&mut self, list_id: ListId) -> Result<()>;

    /// Deletes every list of the caller, one at a time.
    fn delete_lists(&mut self) -> Result<()> {
        for list in self.get_lists()? {
            self.delete_list(list.id)?;
        }
        Ok(())
    }

    /// Adds an item to one of the caller's lists and returns its id.
    fn add_item(&mut self, list_id: ListId, description: &str) -> Result<ItemId>;

    /// Gets an item whose list belongs to the caller.
    fn get_item(&self, item_id: ItemId) -> Result<ReminderItem>;

    /// Gets the items of one of the caller's lists, ordered by id.
    fn get_items(&self, list_id: ListId) -> Result<Vec<ReminderItem>>;

    /// Flips the completion flag of an item and returns the new value.
    fn strike_item(&mut self, item_id: ItemId) -> Result<bool>;

    /// Replaces the description of an item.
    fn update_item_description(&mut self, item_id: ItemId, new_description: &str) -> Result<()>;

    /// Deletes an item.
    fn delete_item(&mut self, item_id: ItemId) -> Result<()>;

    /// The raw selection pointer, `None` when unset.
    fn get_selected_list_id(&self) -> Result<Option<ListId>>;

    /// Points the caller's selection at `list_id`, or unsets it.
    ///
    /// The id is stored as given. A pointer to a list the caller cannot
    /// access is cleared by the next [`ReminderStore::get_selected_list`].
    fn set_selected_list(&mut self, list_id: Option<ListId>) -> Result<()>;

    /// Resolves the selection to the list and its items.
    ///
    /// A pointer to a missing or foreign list is cleared and reported as
    /// `None`. Engine failures are returned as errors.
    fn get_selected_list(&mut self) -> Result<Option<SelectedList>> {
        let Some(list_id) = self.get_selected_list_id()? else {
            return Ok(None);
        };

        let resolved = self.get_list(list_id).and_then(|list| {
            let items = self.get_items(list_id)?;
            Ok(SelectedList::from_parts(list, items))
        });

        match resolved {
            Ok(selected) => Ok(Some(selected)),
            Err(e) if e.is_inaccessible() => {
                self.set_selected_list(None)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Moves the selection off `deleted_id` if it still points there.
    fn reset_selected_after_delete(&mut self, deleted_id: ListId) -> Result<()>;
}
