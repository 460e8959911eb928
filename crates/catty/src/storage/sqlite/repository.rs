//! SQLite storage implementation.
//!
//! Implements [`ReminderStore`] from `catty_core::storage` on one `rusqlite`
//! connection owned by the instance.

use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

use catty_core::reminders::{
    authorize_item, authorize_list, require_item, selection_after_delete, ItemId, ListId,
    ReminderItem, ReminderList,
};
use catty_core::storage::{ReminderStore, Result, StorageError};

use super::conversions::{row_to_item, row_to_list};
use super::error::map_rusqlite_error;
use super::provision::{provision, ConnectionConfig};
use super::schema;

const LIST: &str = "ReminderList";
const ITEM: &str = "ReminderItem";
const SELECTION: &str = "SelectedList";

/// Owner-scoped reminders storage backed by SQLite.
///
/// Construct one per request with [`SqliteStorage::connect`] and release it
/// with [`SqliteStorage::close`].
pub struct SqliteStorage {
    owner: String,
    conn: Connection,
}

impl SqliteStorage {
    /// Provisions the database described by `config` and binds the storage
    /// to `owner`.
    ///
    /// Safe to call repeatedly against the same database.
    pub fn connect(owner: impl Into<String>, config: &ConnectionConfig) -> Result<Self> {
        let conn = provision(config)?;
        Ok(Self {
            owner: owner.into(),
            conn,
        })
    }

    /// Closes the underlying connection.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| StorageError::ConnectionFailed(format!("Close failed: {e}")))
    }

    fn begin(&mut self, entity_type: &'static str) -> Result<Transaction<'_>> {
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| map_rusqlite_error(&e, entity_type))
    }
}

fn commit(tx: Transaction<'_>, entity_type: &'static str) -> Result<()> {
    tx.commit().map_err(|e| map_rusqlite_error(&e, entity_type))
}

fn fetch_list(conn: &Connection, list_id: ListId) -> Result<Option<ReminderList>> {
    conn.query_row(schema::SELECT_LIST_BY_ID, [list_id], row_to_list)
        .optional()
        .map_err(|e| map_rusqlite_error(&e, LIST))
}

fn fetch_item(conn: &Connection, item_id: ItemId) -> Result<Option<ReminderItem>> {
    conn.query_row(schema::SELECT_ITEM_BY_ID, [item_id], row_to_item)
        .optional()
        .map_err(|e| map_rusqlite_error(&e, ITEM))
}

fn log_denied(owner: &str, err: &StorageError) {
    if let StorageError::Forbidden { entity_type, id } = err {
        tracing::warn!(
            owner,
            entity_type = *entity_type,
            id = %id,
            "Access denied: owned by another user"
        );
    }
}

/// Fetches a list and checks it belongs to `owner`.
fn owned_list(conn: &Connection, owner: &str, list_id: ListId) -> Result<ReminderList> {
    let found = fetch_list(conn, list_id)?;
    authorize_list(owner, list_id, found).inspect_err(|e| log_denied(owner, e))
}

/// Fetches an item and checks its list belongs to `owner`.
fn owned_item(conn: &Connection, owner: &str, item_id: ItemId) -> Result<ReminderItem> {
    let item = require_item(item_id, fetch_item(conn, item_id)?)?;
    let parent = fetch_list(conn, item.list_id)?;
    authorize_item(owner, item, parent).inspect_err(|e| log_denied(owner, e))
}

fn owned_lists(conn: &Connection, owner: &str) -> Result<Vec<ReminderList>> {
    let mut stmt = conn
        .prepare(schema::SELECT_LISTS_BY_OWNER)
        .map_err(|e| map_rusqlite_error(&e, LIST))?;
    let rows = stmt
        .query_map([owner], row_to_list)
        .map_err(|e| map_rusqlite_error(&e, LIST))?;

    let mut lists = Vec::new();
    for row_result in rows {
        lists.push(row_result.map_err(|e| map_rusqlite_error(&e, LIST))?);
    }
    Ok(lists)
}

fn selected_list_id(conn: &Connection, owner: &str) -> Result<Option<ListId>> {
    conn.query_row(schema::SELECT_SELECTED_LIST_ID, [owner], |row| {
        row.get::<_, Option<ListId>>(0)
    })
    .optional()
    .map(Option::flatten)
    .map_err(|e| map_rusqlite_error(&e, SELECTION))
}

fn write_selection(conn: &Connection, owner: &str, list_id: Option<ListId>) -> Result<()> {
    conn.execute(schema::UPSERT_SELECTED_LIST, params![owner, list_id])
        .map_err(|e| map_rusqlite_error(&e, SELECTION))?;
    Ok(())
}

/// Moves `owner`'s selection off `deleted` if it still points there.
fn repair_selection(
    conn: &Connection,
    owner: &str,
    current: Option<ListId>,
    deleted: ListId,
) -> Result<()> {
    if current != Some(deleted) {
        return Ok(());
    }
    let remaining = owned_lists(conn, owner)?;
    if let Some(target) = selection_after_delete(current, deleted, &remaining).target() {
        tracing::debug!(owner, deleted, ?target, "Moving selection off deleted list");
        write_selection(conn, owner, target)?;
    }
    Ok(())
}

impl ReminderStore for SqliteStorage {
    fn owner(&self) -> &str {
        &self.owner
    }

    // ========================================================================
    // Lists
    // ========================================================================

    fn create_list(&mut self, name: &str) -> Result<ListId> {
        self.conn
            .execute(schema::INSERT_LIST, params![self.owner, name])
            .map_err(|e| map_rusqlite_error(&e, LIST))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_list(&self, list_id: ListId) -> Result<ReminderList> {
        owned_list(&self.conn, &self.owner, list_id)
    }

    fn get_lists(&self) -> Result<Vec<ReminderList>> {
        owned_lists(&self.conn, &self.owner)
    }

    fn update_list_name(&mut self, list_id: ListId, new_name: &str) -> Result<()> {
        owned_list(&self.conn, &self.owner, list_id)?;
        self.conn
            .execute(schema::UPDATE_LIST_NAME, params![list_id, new_name])
            .map_err(|e| map_rusqlite_error(&e, LIST))?;
        Ok(())
    }

    fn delete_list(&mut self, list_id: ListId) -> Result<()> {
        let owner = self.owner.clone();
        let tx = self.begin(LIST)?;

        owned_list(&tx, &owner, list_id)?;
        // Read before deleting: ON DELETE SET NULL wipes the pointer.
        let selected = selected_list_id(&tx, &owner)?;
        tx.execute(schema::DELETE_LIST, [list_id])
            .map_err(|e| map_rusqlite_error(&e, LIST))?;
        repair_selection(&tx, &owner, selected, list_id)?;

        commit(tx, LIST)
    }

    // ========================================================================
    // Items
    // ========================================================================

    fn add_item(&mut self, list_id: ListId, description: &str) -> Result<ItemId> {
        owned_list(&self.conn, &self.owner, list_id)?;
        self.conn
            .execute(schema::INSERT_ITEM, params![list_id, description])
            .map_err(|e| map_rusqlite_error(&e, ITEM))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_item(&self, item_id: ItemId) -> Result<ReminderItem> {
        owned_item(&self.conn, &self.owner, item_id)
    }

    fn get_items(&self, list_id: ListId) -> Result<Vec<ReminderItem>> {
        owned_list(&self.conn, &self.owner, list_id)?;

        let mut stmt = self
            .conn
            .prepare(schema::SELECT_ITEMS_BY_LIST)
            .map_err(|e| map_rusqlite_error(&e, ITEM))?;
        let rows = stmt
            .query_map([list_id], row_to_item)
            .map_err(|e| map_rusqlite_error(&e, ITEM))?;

        let mut items = Vec::new();
        for row_result in rows {
            items.push(row_result.map_err(|e| map_rusqlite_error(&e, ITEM))?);
        }
        Ok(items)
    }

    fn strike_item(&mut self, item_id: ItemId) -> Result<bool> {
        let owner = self.owner.clone();
        let tx = self.begin(ITEM)?;

        let item = owned_item(&tx, &owner, item_id)?;
        let completed = !item.completed;
        tx.execute(schema::UPDATE_ITEM_COMPLETED, params![item_id, completed])
            .map_err(|e| map_rusqlite_error(&e, ITEM))?;

        commit(tx, ITEM)?;
        Ok(completed)
    }

    fn update_item_description(&mut self, item_id: ItemId, new_description: &str) -> Result<()> {
        owned_item(&self.conn, &self.owner, item_id)?;
        self.conn
            .execute(schema::UPDATE_ITEM_DESCRIPTION, params![item_id, new_description])
            .map_err(|e| map_rusqlite_error(&e, ITEM))?;
        Ok(())
    }

    fn delete_item(&mut self, item_id: ItemId) -> Result<()> {
        owned_item(&self.conn, &self.owner, item_id)?;
        self.conn
            .execute(schema::DELETE_ITEM, [item_id])
            .map_err(|e| map_rusqlite_error(&e, ITEM))?;
        Ok(())
    }

    // ========================================================================
    // Selection
    // ========================================================================

    fn get_selected_list_id(&self) -> Result<Option<ListId>> {
        selected_list_id(&self.conn, &self.owner)
    }

    fn set_selected_list(&mut self, list_id: Option<ListId>) -> Result<()> {
        write_selection(&self.conn, &self.owner, list_id)
    }

    fn reset_selected_after_delete(&mut self, deleted_id: ListId) -> Result<()> {
        let owner = self.owner.clone();
        let tx = self.begin(SELECTION)?;

        let current = selected_list_id(&tx, &owner)?;
        repair_selection(&tx, &owner, current, deleted_id)?;

        commit(tx, SELECTION)
    }
}
