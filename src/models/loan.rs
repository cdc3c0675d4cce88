//! Loan models and related types

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use validator::Validate;

pub const MIN_LOAN_DAYS: u32 = 1;
pub const MAX_LOAN_DAYS: u32 = 15;

pub const DAYS_RANGE_MESSAGE: &str = "Days must be a number between 1 and 15";

/// Number of days requested for a loan, always within 1..=15
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoanDays(u32);

impl LoanDays {
    pub fn new(days: u32) -> Option<Self> {
        (MIN_LOAN_DAYS..=MAX_LOAN_DAYS)
            .contains(&days)
            .then_some(Self(days))
    }

    /// Parse the raw text of the days field
    pub fn parse(raw: &str) -> Result<Self, &'static str> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(|n| u32::try_from(n).ok())
            .and_then(Self::new)
            .ok_or(DAYS_RANGE_MESSAGE)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LoanDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body of `POST /loans`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    #[validate(range(min = 1, message = "A book must be selected"))]
    pub book_id: i32,
    #[validate(range(min = 1, max = 15, message = "Days must be a number between 1 and 15"))]
    pub days_requested: u32,
    #[validate(length(min = 1, message = "Reader first name is required"))]
    pub reader_first_name: String,
    #[validate(length(min = 1, message = "Reader last name is required"))]
    pub reader_last_name: String,
}

/// Loan currently open on the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLoan {
    pub id: i32,
    pub code: String,
    pub title: String,
    pub author: String,
    pub reader_first_name: String,
    pub reader_last_name: String,
    #[serde(deserialize_with = "deserialize_api_date")]
    pub loan_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_api_date")]
    pub return_date: NaiveDate,
}

/// Where an active loan stands relative to its return date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanStatus {
    Active,
    DueToday,
    Overdue,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoanStatus::Active => "Active",
            LoanStatus::DueToday => "Due today",
            LoanStatus::Overdue => "Overdue",
        };
        write!(f, "{}", label)
    }
}

impl ActiveLoan {
    pub fn status(&self, today: NaiveDate) -> LoanStatus {
        if self.return_date < today {
            LoanStatus::Overdue
        } else if self.return_date == today {
            LoanStatus::DueToday
        } else {
            LoanStatus::Active
        }
    }

    pub fn reader_name(&self) -> String {
        format!("{} {}", self.reader_first_name, self.reader_last_name)
    }
}

/// Parse a date sent by the API.
///
/// Plain `YYYY-MM-DD` values are taken as-is; full timestamps are converted
/// to the local calendar date.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    if raw.contains('T') {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Local).date_naive())
    } else {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

fn deserialize_api_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_api_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
}
