//! Due date computation for new loans
//!
//! The due date is today's local calendar date plus the requested number of
//! days. A landing on Saturday moves two days forward and a landing on Sunday
//! one day forward, so a book is always due on a weekday. The shift is a
//! fixed lookup per landing weekday; holidays are not considered.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use std::fmt;

use crate::models::LoanDays;

pub const ADJUSTED_HINT: &str = "Date adjusted automatically (does not fall on a weekend)";

/// Computed return date for a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDate {
    pub date: NaiveDate,
    /// True when the raw landing fell on a weekend and was moved to Monday
    pub adjusted: bool,
}

impl DueDate {
    /// Advisory text shown next to an adjusted date
    pub fn hint(&self) -> Option<&'static str> {
        self.adjusted.then_some(ADJUSTED_HINT)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%d/%m/%Y"))
    }
}

/// Days to add to a landing date so it does not fall on a weekend
pub fn weekend_shift(weekday: Weekday) -> u64 {
    match weekday {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    }
}

/// Compute the due date for a loan starting on `today`.
///
/// Returns `None` only when the result would leave chrono's date range.
pub fn compute_due_date(today: NaiveDate, days: LoanDays) -> Option<DueDate> {
    let landing = today.checked_add_days(Days::new(u64::from(days.get())))?;
    let shift = weekend_shift(landing.weekday());
    let date = landing.checked_add_days(Days::new(shift))?;

    Some(DueDate {
        date,
        adjusted: shift > 0,
    })
}

/// Same as [`compute_due_date`], reading today from the local clock
pub fn due_date_from_today(days: LoanDays) -> Option<DueDate> {
    compute_due_date(Local::now().date_naive(), days)
}
