//! Client side of the loan API endpoints

pub mod books;
pub mod client;
pub mod health;
pub mod loans;
pub mod stats;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{ActiveLoan, BookSummary, CreateLoanRequest, StatisticsSnapshot},
};

pub use client::ApiClient;

/// Operations offered by the loan API.
///
/// Services depend on this trait rather than on [`ApiClient`] so they can be
/// exercised against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryApi: Send + Sync {
    /// `GET /books/search?query=`; an empty query lists the whole catalog
    async fn search_books(&self, query: &str) -> AppResult<Vec<BookSummary>>;

    /// `GET /loans/active`
    async fn active_loans(&self) -> AppResult<Vec<ActiveLoan>>;

    /// `POST /loans`, returning the server message on success
    async fn create_loan(&self, request: &CreateLoanRequest) -> AppResult<Option<String>>;

    /// `POST /loans/return/{id}`, returning the server message on success
    async fn return_loan(&self, loan_id: i32) -> AppResult<Option<String>>;

    /// `GET /loans/statistics`
    async fn statistics(&self) -> AppResult<StatisticsSnapshot>;

    /// `GET /health`
    async fn health(&self) -> AppResult<()>;
}

#[async_trait]
impl LibraryApi for ApiClient {
    async fn search_books(&self, query: &str) -> AppResult<Vec<BookSummary>> {
        ApiClient::search_books(self, query).await
    }

    async fn active_loans(&self) -> AppResult<Vec<ActiveLoan>> {
        ApiClient::active_loans(self).await
    }

    async fn create_loan(&self, request: &CreateLoanRequest) -> AppResult<Option<String>> {
        ApiClient::create_loan(self, request).await
    }

    async fn return_loan(&self, loan_id: i32) -> AppResult<Option<String>> {
        ApiClient::return_loan(self, loan_id).await
    }

    async fn statistics(&self) -> AppResult<StatisticsSnapshot> {
        ApiClient::statistics(self).await
    }

    async fn health(&self) -> AppResult<()> {
        ApiClient::health(self).await
    }
}
