//! SQLite error mapping.
//!
//! Maps `rusqlite::Error` to `StorageError` from `catty_core::storage` and
//! recognizes the "already exists" outcome that provisioning tolerates.

use catty_core::storage::StorageError;

/// Maps a rusqlite error to a StorageError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_FOREIGNKEY` → `StorageError::InvalidData`
/// - `SQLITE_CONSTRAINT_NOTNULL` → `StorageError::InvalidData`
/// - Cannot open the database file → `StorageError::ConnectionFailed`
/// - All other errors → `StorageError::QueryFailed`
pub fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str) -> StorageError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            StorageError::InvalidData(format!(
                "Foreign key constraint violation for {entity_type}"
            ))
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL =>
        {
            StorageError::InvalidData(format!("Missing required value for {entity_type}"))
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            StorageError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        _ => StorageError::QueryFailed(err.to_string()),
    }
}

/// Returns true when the engine refused to create an object because it
/// already exists (e.g. "table reminder_lists already exists").
///
/// SQLite reports this as a generic `SQLITE_ERROR`, so the message is the
/// only thing that tells it apart from a syntax error. Errors raised while
/// preparing a statement arrive as `SqlInputError`.
pub fn is_already_exists(err: &rusqlite::Error) -> bool {
    let (code, msg) = match err {
        rusqlite::Error::SqlInputError { error, msg, .. } => (error.code, msg.as_str()),
        rusqlite::Error::SqliteFailure(error, Some(msg)) => (error.code, msg.as_str()),
        _ => return false,
    };
    code == rusqlite::ErrorCode::Unknown && msg.contains("already exists")
}
