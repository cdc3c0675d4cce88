//! Loan management endpoints

use serde_json::Value;

use crate::{
    api::ApiClient,
    error::AppResult,
    models::{ActiveLoan, CreateLoanRequest},
};

impl ApiClient {
    /// List loans that have not been returned yet
    pub async fn active_loans(&self) -> AppResult<Vec<ActiveLoan>> {
        self.get::<Vec<ActiveLoan>>("/loans/active", &[])
            .await?
            .into_data("Error loading active loans")
    }

    /// Register a new loan
    pub async fn create_loan(&self, request: &CreateLoanRequest) -> AppResult<Option<String>> {
        tracing::info!(
            "Creating loan: book={} days={}",
            request.book_id,
            request.days_requested
        );
        self.post::<CreateLoanRequest, Value>("/loans", Some(request))
            .await?
            .into_ack("Error registering the loan")
    }

    /// Record the return of a loaned book
    pub async fn return_loan(&self, loan_id: i32) -> AppResult<Option<String>> {
        tracing::info!("Returning loan {}", loan_id);
        self.post::<(), Value>(&format!("/loans/return/{}", loan_id), None)
            .await?
            .into_ack("Error returning the book")
    }
}
