//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Table DDL deliberately omits `IF NOT EXISTS`: the
//! provisioning step creates each table and treats the engine's
//! "already exists" failure as the normal outcome on a warm database.

/// Turns on foreign key enforcement for the connection.
///
/// SQLite ignores `ON DELETE CASCADE` / `SET NULL` without it.
pub const ENABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = ON";

pub const CREATE_REMINDER_LISTS: &str = r#"
CREATE TABLE reminder_lists (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner TEXT NOT NULL,
    name TEXT NOT NULL
)
"#;

pub const CREATE_REMINDER_ITEMS: &str = r#"
CREATE TABLE reminder_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    list_id INTEGER NOT NULL,
    description TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT 0,
    FOREIGN KEY (list_id) REFERENCES reminder_lists(id) ON DELETE CASCADE
)
"#;

pub const CREATE_SELECTED_LISTS: &str = r#"
CREATE TABLE selected_lists (
    owner TEXT NOT NULL PRIMARY KEY,
    list_id INTEGER,
    FOREIGN KEY (list_id) REFERENCES reminder_lists(id) ON DELETE SET NULL
)
"#;

/// Tables in creation order (referenced tables first).
pub const TABLES: [(&str, &str); 3] = [
    ("reminder_lists", CREATE_REMINDER_LISTS),
    ("reminder_items", CREATE_REMINDER_ITEMS),
    ("selected_lists", CREATE_SELECTED_LISTS),
];

// List queries
pub const INSERT_LIST: &str = r#"
INSERT INTO reminder_lists (owner, name)
VALUES (?1, ?2)
"#;

pub const SELECT_LIST_BY_ID: &str = r#"
SELECT id, owner, name
FROM reminder_lists
WHERE id = ?1
"#;

pub const SELECT_LISTS_BY_OWNER: &str = r#"
SELECT id, owner, name
FROM reminder_lists
WHERE owner = ?1
ORDER BY id ASC
"#;

pub const UPDATE_LIST_NAME: &str = r#"
UPDATE reminder_lists
SET name = ?2
WHERE id = ?1
"#;

pub const DELETE_LIST: &str = r#"
DELETE FROM reminder_lists
WHERE id = ?1
"#;

// Item queries
pub const INSERT_ITEM: &str = r#"
INSERT INTO reminder_items (list_id, description, completed)
VALUES (?1, ?2, 0)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, list_id, description, completed
FROM reminder_items
WHERE id = ?1
"#;

pub const SELECT_ITEMS_BY_LIST: &str = r#"
SELECT id, list_id, description, completed
FROM reminder_items
WHERE list_id = ?1
ORDER BY id ASC
"#;

pub const UPDATE_ITEM_COMPLETED: &str = r#"
UPDATE reminder_items
SET completed = ?2
WHERE id = ?1
"#;

pub const UPDATE_ITEM_DESCRIPTION: &str = r#"
UPDATE reminder_items
SET description = ?2
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM reminder_items
WHERE id = ?1
"#;

// Selection queries
pub const SELECT_SELECTED_LIST_ID: &str = r#"
SELECT list_id
FROM selected_lists
WHERE owner = ?1
"#;

pub const UPSERT_SELECTED_LIST: &str = r#"
INSERT INTO selected_lists (owner, list_id)
VALUES (?1, ?2)
ON CONFLICT (owner) DO UPDATE SET list_id = excluded.list_id
"#;
