use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} belongs to another owner: {id}")]
    Forbidden {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl StorageError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn forbidden(entity_type: &'static str, id: impl ToString) -> Self {
        Self::Forbidden {
            entity_type,
            id: id.to_string(),
        }
    }

    /// True for the ownership outcomes (`NotFound` and `Forbidden`), false for
    /// engine failures.
    pub fn is_inaccessible(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Forbidden { .. })
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_not_found_display() {
        let error = StorageError::not_found("ReminderList", 42);
        assert_eq!(error.to_string(), "ReminderList not found: 42");
    }

    #[test]
    fn test_storage_error_forbidden_display() {
        let error = StorageError::forbidden("ReminderItem", 7);
        assert_eq!(
            error.to_string(),
            "ReminderItem belongs to another owner: 7"
        );
    }

    #[test]
    fn test_storage_error_connection_failed_display() {
        let error = StorageError::ConnectionFailed("cannot open catty.db".to_string());
        assert_eq!(error.to_string(), "Connection failed: cannot open catty.db");
    }

    #[test]
    fn test_storage_error_query_failed_display() {
        let error = StorageError::QueryFailed("no such table: reminder_lists".to_string());
        assert_eq!(
            error.to_string(),
            "Query failed: no such table: reminder_lists"
        );
    }

    #[test]
    fn test_storage_error_invalid_data_display() {
        let error = StorageError::InvalidData("database name is empty".to_string());
        assert_eq!(error.to_string(), "Invalid data: database name is empty");
    }

    #[test]
    fn test_is_inaccessible() {
        assert!(StorageError::not_found("ReminderList", 1).is_inaccessible());
        assert!(StorageError::forbidden("ReminderList", 1).is_inaccessible());
        assert!(!StorageError::QueryFailed("disk I/O error".to_string()).is_inaccessible());
        assert!(!StorageError::ConnectionFailed("gone".to_string()).is_inaccessible());
    }
}
