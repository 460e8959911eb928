//! Pure functions for mapping storage errors to HTTP status codes.
//!
//! The web layer owns the response format; this only picks the status.

use super::StorageError;

/// Maps a [`StorageError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Forbidden` -> 404 (Not Found), so a foreign list looks like a missing one
/// - `InvalidData` -> 400 (Bad Request)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use catty_core::storage::{StorageError, storage_error_to_status_code};
///
/// let error = StorageError::forbidden("ReminderList", 1);
/// assert_eq!(storage_error_to_status_code(&error), 404);
/// ```
pub fn storage_error_to_status_code(error: &StorageError) -> u16 {
    match error {
        StorageError::NotFound { .. } => 404,
        StorageError::Forbidden { .. } => 404,
        StorageError::InvalidData(_) => 400,
        StorageError::ConnectionFailed(_) => 503,
        StorageError::QueryFailed(_) => 500,
    }
}
