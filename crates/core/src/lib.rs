//! Core domain logic for the Catty reminders app.
//!
//! Pure types and functions only. Storage backends live in the `catty` crate
//! and implement [`storage::ReminderStore`] on top of these rules.

pub mod reminders;
pub mod storage;
