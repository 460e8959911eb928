//! Database provisioning.
//!
//! Runs on every construction of a [`super::SqliteStorage`]:
//!
//! 1. reach the engine (the data directory) without selecting a database
//! 2. create the database file unless it already exists
//! 3. open that database and enable foreign keys
//! 4. create each table unless it already exists
//!
//! "Already exists" outcomes are logged and skipped. Anything else fails the
//! construction.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use catty_core::storage::{Result, StorageError};
use rusqlite::{Connection, OpenFlags};

use super::error::{is_already_exists, map_rusqlite_error};
use super::schema;

/// Where the reminders database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Directory holding database files.
    pub data_dir: PathBuf,
    /// Database name; stored as `<data_dir>/<database>.db`.
    pub database: String,
}

impl ConnectionConfig {
    pub fn new(data_dir: impl Into<PathBuf>, database: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            database: database.into(),
        }
    }

    /// Path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.db", self.database))
    }

    fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(StorageError::InvalidData(
                "database name must not be empty".to_string(),
            ));
        }
        if self.database.contains(['/', '\\']) {
            return Err(StorageError::InvalidData(format!(
                "database name must not contain path separators: {}",
                self.database
            )));
        }
        Ok(())
    }
}

/// Provisions the database and returns a connection to it.
pub fn provision(config: &ConnectionConfig) -> Result<Connection> {
    let provisioned = config
        .validate()
        .and_then(|()| connect_engine(&config.data_dir))
        .and_then(|()| create_database(&config.database_path()))
        .and_then(|()| select_database(&config.database_path()))
        .and_then(|conn| {
            create_tables(&conn)?;
            Ok(conn)
        });

    if let Err(e) = &provisioned {
        tracing::error!(
            error = %e,
            database = %config.database_path().display(),
            "Provisioning failed"
        );
    }

    provisioned
}

fn connect_engine(data_dir: &Path) -> Result<()> {
    match fs::metadata(data_dir) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(StorageError::ConnectionFailed(format!(
            "{} is not a directory",
            data_dir.display()
        ))),
        Err(e) => Err(StorageError::ConnectionFailed(format!(
            "Cannot reach data directory {}: {e}",
            data_dir.display()
        ))),
    }
}

fn create_database(path: &Path) -> Result<()> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            tracing::info!(database = %path.display(), "Created database");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            tracing::debug!(database = %path.display(), "Database already exists");
            Ok(())
        }
        Err(e) => Err(StorageError::ConnectionFailed(format!(
            "Cannot create database {}: {e}",
            path.display()
        ))),
    }
}

fn select_database(path: &Path) -> Result<Connection> {
    // No SQLITE_OPEN_CREATE: the file must be the one create_database made.
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags)
        .map_err(|e| StorageError::ConnectionFailed(format!("{}: {e}", path.display())))?;

    conn.execute_batch(schema::ENABLE_FOREIGN_KEYS)
        .map_err(|e| map_rusqlite_error(&e, "Database"))?;

    Ok(conn)
}

fn create_tables(conn: &Connection) -> Result<()> {
    for (table, ddl) in schema::TABLES {
        match conn.execute(ddl, []) {
            Ok(_) => tracing::info!(table, "Created table"),
            Err(e) if is_already_exists(&e) => tracing::debug!(table, "Table already exists"),
            Err(e) => return Err(map_rusqlite_error(&e, "Table")),
        }
    }
    Ok(())
}
