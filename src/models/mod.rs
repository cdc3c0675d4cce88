//! Data models exchanged with the loan API

pub mod book;
pub mod envelope;
pub mod loan;
pub mod stats;

// Re-export commonly used types
pub use book::BookSummary;
pub use envelope::ApiEnvelope;
pub use loan::{ActiveLoan, CreateLoanRequest, LoanDays, LoanStatus};
pub use stats::StatisticsSnapshot;
