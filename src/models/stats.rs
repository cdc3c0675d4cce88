//! Statistics snapshot returned by `GET /loans/statistics`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub total_books: i64,
    pub available_books: i64,
    pub loaned_books: i64,
    pub active_loans: i64,
    pub overdue_loans: i64,
}

impl StatisticsSnapshot {
    /// Share of the catalog currently available, rounded to a whole percent
    pub fn availability_percent(&self) -> i64 {
        if self.total_books <= 0 {
            return 0;
        }
        (self.available_books as f64 / self.total_books as f64 * 100.0).round() as i64
    }

    /// Active loans that are not overdue
    pub fn on_time_loans(&self) -> i64 {
        (self.active_loans - self.overdue_loans).max(0)
    }
}
