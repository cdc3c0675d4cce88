//! Book model as returned by the catalog search

use serde::{Deserialize, Serialize};

/// Catalog entry summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: i32,
    pub code: String,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl BookSummary {
    /// Label used in book pickers: `CODE - Title (Author)`
    pub fn label(&self) -> String {
        format!("{} - {} ({})", self.code, self.title, self.author)
    }

    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "On loan"
        }
    }
}
