//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;

/// Format a value as JSON, or with `pretty` for human-readable output.
pub fn format_output<T, F>(value: &T, format: OutputFormat, pretty: F) -> String
where
    T: serde::Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => pretty(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catty_core::reminders::ReminderList;

    #[test]
    fn test_format_output_picks_formatter() {
        let list = ReminderList::new(1, "alice", "Groceries");

        let json = format_output(&list, OutputFormat::Json, pretty::format_list);
        let text = format_output(&list, OutputFormat::Pretty, pretty::format_list);

        assert_eq!(json, r#"{"id":1,"owner":"alice","name":"Groceries"}"#);
        assert_eq!(text, "Groceries\n  ID: 1");
    }
}
