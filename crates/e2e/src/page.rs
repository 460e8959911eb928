//! Checks against the HTML of the reminders page.

use reqwest::StatusCode;
use scraper::{Html, Selector};

/// Expected `<title>` of the reminders page.
pub const REMINDERS_TITLE: &str = "Reminders | Catty reminders app";

/// The reminders page as served after login.
#[derive(Debug, Clone)]
pub struct RemindersPage {
    pub status: StatusCode,
    html: String,
}

impl RemindersPage {
    pub fn new(status: StatusCode, html: impl Into<String>) -> Self {
        Self {
            status,
            html: html.into(),
        }
    }

    /// Trimmed text of every element matching `selector`.
    fn texts(&self, selector: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        Html::parse_document(&self.html)
            .select(&selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .collect()
    }

    /// Document title.
    pub fn title(&self) -> Option<String> {
        self.texts("title").into_iter().next()
    }

    /// Text of the element with the given id.
    pub fn text_by_id(&self, id: &str) -> Option<String> {
        self.texts(&format!("#{id}")).into_iter().next()
    }

    /// Returns true if an element with the given id exists.
    pub fn has_id(&self, id: &str) -> bool {
        self.text_by_id(id).is_some()
    }

    /// Returns true if a button labelled `label` exists.
    pub fn has_button(&self, label: &str) -> bool {
        self.texts("button").iter().any(|text| text == label)
    }

    /// The "Reminders for ..." greeting.
    pub fn reminders_message(&self) -> Option<String> {
        self.text_by_id("reminders-message")
    }
}
