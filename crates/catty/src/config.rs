use std::{env, path::PathBuf};

use crate::storage::ConnectionConfig;

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding database files (default: ".")
    pub data_dir: PathBuf,
    /// Database name (default: "catty")
    pub database: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CATTY_DATA_DIR` - Directory holding database files (default: ".")
    /// - `CATTY_DATABASE` - Database name (default: "catty")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_dir: lookup("CATTY_DATA_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            database: lookup("CATTY_DATABASE")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "catty".to_string()),
        }
    }

    /// Replaces values that were given explicitly (e.g. on the command line).
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, database: Option<String>) -> Self {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        if let Some(database) = database {
            self.database = database;
        }
        self
    }

    /// Connection parameters for the storage layer.
    pub fn connection(&self) -> ConnectionConfig {
        ConnectionConfig::new(self.data_dir.clone(), self.database.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup(&[]));

        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.database, "catty");
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_lookup(lookup(&[
            ("CATTY_DATA_DIR", "/var/lib/catty"),
            ("CATTY_DATABASE", "reminders"),
        ]));

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/catty"));
        assert_eq!(config.database, "reminders");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("CATTY_DATA_DIR", ""), ("CATTY_DATABASE", "")]));

        assert_eq!(config, Config::from_lookup(lookup(&[])));
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::from_lookup(lookup(&[("CATTY_DATABASE", "reminders")]))
            .with_overrides(Some(PathBuf::from("/tmp")), None);

        assert_eq!(config.data_dir, PathBuf::from("/tmp"));
        assert_eq!(config.database, "reminders");
    }

    #[test]
    fn test_connection_config() {
        let config = Config::from_lookup(lookup(&[("CATTY_DATA_DIR", "/srv")]));

        assert_eq!(
            config.connection().database_path(),
            PathBuf::from("/srv/catty.db")
        );
    }
}
