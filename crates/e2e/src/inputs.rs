//! Test inputs read from `inputs.json`.
//!
//! ```json
//! {
//!   "base_url": "http://localhost:8000",
//!   "users": [{ "username": "alice", "password": "secret" }]
//! }
//! ```
//!
//! Keys are optional at parse time so that a missing key is reported by the
//! accessor that needs it.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{E2eError, Result};

/// Login credentials of a test user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawUser {
    username: Option<String>,
    password: Option<String>,
}

/// Parsed `inputs.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestInputs {
    base_url: Option<String>,
    users: Option<Vec<RawUser>>,
}

impl TestInputs {
    /// Reads inputs from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parses inputs from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Base URL of the app under test, without a trailing slash.
    pub fn base_url(&self) -> Result<&str> {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .ok_or(E2eError::MissingKey("base_url"))
    }

    /// The primary test user.
    pub fn user(&self) -> Result<User> {
        self.user_at(0)
    }

    /// The alternate test user.
    pub fn alt_user(&self) -> Result<User> {
        self.user_at(1)
    }

    /// Builds the user at `index`.
    pub fn user_at(&self, index: usize) -> Result<User> {
        let users = self.users.as_ref().ok_or(E2eError::MissingKey("users"))?;
        let raw = users
            .get(index)
            .ok_or(E2eError::IndexOutOfRange { index })?;

        let username = raw.username.clone().ok_or(E2eError::MissingField {
            index,
            field: "username",
        })?;
        let password = raw.password.clone().ok_or(E2eError::MissingField {
            index,
            field: "password",
        })?;

        Ok(User { username, password })
    }
}
