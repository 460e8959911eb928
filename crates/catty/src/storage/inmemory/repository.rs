//! In-memory repository implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use catty_core::reminders::{
    authorize_item, authorize_list, require_item, selection_after_delete, ItemId, ListId,
    ReminderItem, ReminderList,
};
use catty_core::storage::{ReminderStore, Result, StorageError};

#[derive(Debug, Default)]
struct State {
    lists: BTreeMap<ListId, ReminderList>,
    items: BTreeMap<ItemId, ReminderItem>,
    selections: HashMap<String, Option<ListId>>,
    last_list_id: ListId,
    last_item_id: ItemId,
}

impl State {
    fn owned_list(&self, owner: &str, list_id: ListId) -> Result<ReminderList> {
        authorize_list(owner, list_id, self.lists.get(&list_id).cloned())
    }

    fn owned_item(&self, owner: &str, item_id: ItemId) -> Result<ReminderItem> {
        let item = require_item(item_id, self.items.get(&item_id).cloned())?;
        let parent = self.lists.get(&item.list_id).cloned();
        authorize_item(owner, item, parent)
    }

    fn owned_lists(&self, owner: &str) -> Vec<ReminderList> {
        self.lists
            .values()
            .filter(|list| list.is_owned_by(owner))
            .cloned()
            .collect()
    }

    fn selected(&self, owner: &str) -> Option<ListId> {
        self.selections.get(owner).copied().flatten()
    }

    fn repair_selection(&mut self, owner: &str, current: Option<ListId>, deleted: ListId) {
        let remaining = self.owned_lists(owner);
        if let Some(target) = selection_after_delete(current, deleted, &remaining).target() {
            self.selections.insert(owner.to_string(), target);
        }
    }

    /// Mirrors the SQLite foreign keys: items cascade, selections go null.
    fn remove_list(&mut self, list_id: ListId) {
        self.lists.remove(&list_id);
        self.items.retain(|_, item| item.list_id != list_id);
        for selection in self.selections.values_mut() {
            if *selection == Some(list_id) {
                *selection = None;
            }
        }
    }
}

/// Shared in-memory reminders database.
///
/// Clones share the same data. Hand out owner-scoped handles with
/// [`InMemoryStore::for_owner`]. Data is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [`ReminderStore`] acting for `owner`.
    pub fn for_owner(&self, owner: impl Into<String>) -> InMemoryStorage {
        InMemoryStorage {
            owner: owner.into(),
            state: Arc::clone(&self.state),
        }
    }
}

/// Owner-scoped handle onto an [`InMemoryStore`].
///
/// Each operation runs under a single lock, so read-then-write sequences
/// are atomic.
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    owner: String,
    state: Arc<Mutex<State>>,
}

impl InMemoryStorage {
    fn state(&self) -> Result<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| StorageError::QueryFailed("In-memory store lock poisoned".to_string()))
    }
}

impl ReminderStore for InMemoryStorage {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn create_list(&mut self, name: &str) -> Result<ListId> {
        let mut state = self.state()?;
        state.last_list_id += 1;
        let id = state.last_list_id;
        state
            .lists
            .insert(id, ReminderList::new(id, self.owner.as_str(), name));
        Ok(id)
    }

    fn get_list(&self, list_id: ListId) -> Result<ReminderList> {
        self.state()?.owned_list(&self.owner, list_id)
    }

    fn get_lists(&self) -> Result<Vec<ReminderList>> {
        Ok(self.state()?.owned_lists(&self.owner))
    }

    fn update_list_name(&mut self, list_id: ListId, new_name: &str) -> Result<()> {
        let mut state = self.state()?;
        state.owned_list(&self.owner, list_id)?;
        if let Some(list) = state.lists.get_mut(&list_id) {
            list.name = new_name.to_string();
        }
        Ok(())
    }

    fn delete_list(&mut self, list_id: ListId) -> Result<()> {
        let mut state = self.state()?;
        state.owned_list(&self.owner, list_id)?;
        let selected = state.selected(&self.owner);
        state.remove_list(list_id);
        state.repair_selection(&self.owner, selected, list_id);
        Ok(())
    }

    fn add_item(&mut self, list_id: ListId, description: &str) -> Result<ItemId> {
        let mut state = self.state()?;
        state.owned_list(&self.owner, list_id)?;
        state.last_item_id += 1;
        let id = state.last_item_id;
        state
            .items
            .insert(id, ReminderItem::new(id, list_id, description));
        Ok(id)
    }

    fn get_item(&self, item_id: ItemId) -> Result<ReminderItem> {
        self.state()?.owned_item(&self.owner, item_id)
    }

    fn get_items(&self, list_id: ListId) -> Result<Vec<ReminderItem>> {
        let state = self.state()?;
        state.owned_list(&self.owner, list_id)?;
        Ok(state
            .items
            .values()
            .filter(|item| item.list_id == list_id)
            .cloned()
            .collect())
    }

    fn strike_item(&mut self, item_id: ItemId) -> Result<bool> {
        let mut state = self.state()?;
        state.owned_item(&self.owner, item_id)?;
        let item = state
            .items
            .get_mut(&item_id)
            .ok_or_else(|| StorageError::not_found("ReminderItem", item_id))?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    fn update_item_description(&mut self, item_id: ItemId, new_description: &str) -> Result<()> {
        let mut state = self.state()?;
        state.owned_item(&self.owner, item_id)?;
        if let Some(item) = state.items.get_mut(&item_id) {
            item.description = new_description.to_string();
        }
        Ok(())
    }

    fn delete_item(&mut self, item_id: ItemId) -> Result<()> {
        let mut state = self.state()?;
        state.owned_item(&self.owner, item_id)?;
        state.items.remove(&item_id);
        Ok(())
    }

    fn get_selected_list_id(&self) -> Result<Option<ListId>> {
        Ok(self.state()?.selected(&self.owner))
    }

    fn set_selected_list(&mut self, list_id: Option<ListId>) -> Result<()> {
        self.state()?
            .selections
            .insert(self.owner.clone(), list_id);
        Ok(())
    }

    fn reset_selected_after_delete(&mut self, deleted_id: ListId) -> Result<()> {
        let mut state = self.state()?;
        let current = state.selected(&self.owner);
        state.repair_selection(&self.owner, current, deleted_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_assigned_sequentially() {
        let store = InMemoryStore::new();
        let mut alice = store.for_owner("alice");

        let list_id = alice.create_list("Groceries").unwrap();
        let milk = alice.add_item(list_id, "Milk").unwrap();
        let eggs = alice.add_item(list_id, "Eggs").unwrap();

        assert_eq!((list_id, milk, eggs), (1, 1, 2));
    }

    #[test]
    fn test_handles_share_data() {
        let store = InMemoryStore::new();
        let mut first = store.for_owner("alice");
        let second = store.for_owner("alice");

        let list_id = first.create_list("Groceries").unwrap();

        assert_eq!(second.get_list(list_id).unwrap().name, "Groceries");
    }

    #[test]
    fn test_owner_isolation() {
        let store = InMemoryStore::new();
        let mut alice = store.for_owner("alice");
        let mut bob = store.for_owner("bob");
        let list_id = alice.create_list("Groceries").unwrap();
        let milk = alice.add_item(list_id, "Milk").unwrap();

        assert!(matches!(
            bob.get_list(list_id),
            Err(StorageError::Forbidden { .. })
        ));
        assert!(matches!(
            bob.strike_item(milk),
            Err(StorageError::Forbidden { .. })
        ));
        assert!(bob.get_lists().unwrap().is_empty());
        assert!(!alice.get_item(milk).unwrap().completed);
    }

    #[test]
    fn test_delete_list_cascades() {
        let store = InMemoryStore::new();
        let mut alice = store.for_owner("alice");
        let list_id = alice.create_list("Groceries").unwrap();
        let milk = alice.add_item(list_id, "Milk").unwrap();

        alice.delete_list(list_id).unwrap();

        assert!(matches!(
            alice.get_item(milk),
            Err(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_deleting_selected_list_repoints() {
        let store = InMemoryStore::new();
        let mut alice = store.for_owner("alice");
        let one = alice.create_list("One").unwrap();
        let two = alice.create_list("Two").unwrap();
        alice.set_selected_list(Some(one)).unwrap();

        alice.delete_list(one).unwrap();
        assert_eq!(alice.get_selected_list_id().unwrap(), Some(two));

        alice.delete_list(two).unwrap();
        assert_eq!(alice.get_selected_list_id().unwrap(), None);
    }

    #[test]
    fn test_foreign_delete_nulls_other_selection() {
        let store = InMemoryStore::new();
        let mut alice = store.for_owner("alice");
        let mut bob = store.for_owner("bob");
        let list_id = alice.create_list("Groceries").unwrap();
        bob.set_selected_list(Some(list_id)).unwrap();

        alice.delete_list(list_id).unwrap();

        assert_eq!(bob.get_selected_list_id().unwrap(), None);
    }

    #[test]
    fn test_stale_selection_is_cleared_on_read() {
        let store = InMemoryStore::new();
        let mut alice = store.for_owner("alice");

        alice.set_selected_list(Some(404)).unwrap();

        assert_eq!(alice.get_selected_list().unwrap(), None);
        assert_eq!(alice.get_selected_list_id().unwrap(), None);
    }

    #[test]
    fn test_strike_is_an_involution() {
        let store = InMemoryStore::new();
        let mut alice = store.for_owner("alice");
        let list_id = alice.create_list("Groceries").unwrap();
        let milk = alice.add_item(list_id, "Milk").unwrap();

        alice.strike_item(milk).unwrap();
        alice.strike_item(milk).unwrap();

        assert!(!alice.get_item(milk).unwrap().completed);
    }

    #[test]
    fn test_delete_lists() {
        let store = InMemoryStore::new();
        let mut alice = store.for_owner("alice");
        let mut bob = store.for_owner("bob");
        alice.create_list("One").unwrap();
        alice.create_list("Two").unwrap();
        bob.create_list("Bob's").unwrap();

        alice.delete_lists().unwrap();

        assert!(alice.get_lists().unwrap().is_empty());
        assert_eq!(bob.get_lists().unwrap().len(), 1);
    }
}
