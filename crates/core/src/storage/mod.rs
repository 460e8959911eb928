mod error;
mod http_mapping;
mod traits;

pub use error::{Result, StorageError};
pub use http_mapping::storage_error_to_status_code;
pub use traits::ReminderStore;
