//! End-to-end test support: test inputs, an HTTP client for a running
//! Catty app, and checks against the pages it serves.

pub mod api;
pub mod error;
pub mod inputs;
pub mod page;

pub use api::{CattyApi, LoginResponse, SESSION_COOKIE};
pub use error::{E2eError, Result};
pub use inputs::{TestInputs, User};
pub use page::{RemindersPage, REMINDERS_TITLE};
