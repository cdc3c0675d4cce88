//! Loan management service

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

use crate::{
    api::LibraryApi,
    error::{AppError, AppResult, FormErrors, FormField},
    models::loan::{ActiveLoan, CreateLoanRequest, LoanDays},
    services::due_date::{compute_due_date, due_date_from_today, DueDate},
};

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("valid regex"));

/// Order in which field messages are reported
const FIELD_ORDER: [FormField; 4] = [
    FormField::ReaderFirstName,
    FormField::ReaderLastName,
    FormField::Book,
    FormField::Days,
];

/// Raw state of the new-loan form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanForm {
    pub book_id: Option<i32>,
    pub days: String,
    pub reader_first_name: String,
    pub reader_last_name: String,
}

impl LoanForm {
    /// Check every field and build the request to send.
    ///
    /// All failing fields are reported at once.
    pub fn validate(&self) -> Result<CreateLoanRequest, FormErrors> {
        let mut messages: HashMap<FormField, String> = HashMap::new();

        let days_requested = match LoanDays::parse(&self.days) {
            Ok(days) => days.get(),
            Err(msg) => {
                messages.insert(FormField::Days, msg.to_string());
                0
            }
        };

        let request = CreateLoanRequest {
            book_id: self.book_id.unwrap_or(0),
            days_requested,
            reader_first_name: self.reader_first_name.trim().to_string(),
            reader_last_name: self.reader_last_name.trim().to_string(),
        };

        if let Err(validation) = request.validate() {
            for (field, errors) in validation.field_errors() {
                let name: &str = &field;
                let Some(form_field) = form_field(name) else {
                    continue;
                };
                let message = errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string());
                messages.entry(form_field).or_insert(message);
            }
        }

        if messages.is_empty() {
            return Ok(request);
        }

        let mut errors = FormErrors::new();
        for field in FIELD_ORDER {
            if let Some(message) = messages.remove(&field) {
                errors.add(field, message);
            }
        }
        Err(errors)
    }

    /// Due date shown while the form is being filled.
    ///
    /// Only computed once a book is selected and the day count is valid.
    pub fn due_date_preview(&self, today: NaiveDate) -> Option<DueDate> {
        self.book_id?;
        let days = LoanDays::parse(&self.days).ok()?;
        compute_due_date(today, days)
    }

    /// Take a pasted value for the days field, keeping only its digits.
    ///
    /// The field is left untouched when the digits do not form a valid count.
    pub fn paste_days(&mut self, pasted: &str) -> bool {
        match sanitize_pasted_days(pasted) {
            Some(days) => {
                self.days = days.to_string();
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn form_field(name: &str) -> Option<FormField> {
    match name {
        "book_id" | "bookId" => Some(FormField::Book),
        "days_requested" | "daysRequested" => Some(FormField::Days),
        "reader_first_name" | "readerFirstName" => Some(FormField::ReaderFirstName),
        "reader_last_name" | "readerLastName" => Some(FormField::ReaderLastName),
        _ => None,
    }
}

/// Strip every non-digit from pasted text and accept it if it is 1..=15
pub fn sanitize_pasted_days(pasted: &str) -> Option<LoanDays> {
    let digits = NON_DIGITS.replace_all(pasted, "");
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u32>().ok().and_then(LoanDays::new)
}

#[derive(Clone)]
pub struct LoansService {
    api: Arc<dyn LibraryApi>,
}

impl LoansService {
    pub fn new(api: Arc<dyn LibraryApi>) -> Self {
        Self { api }
    }

    /// Get loans not yet returned
    pub async fn active_loans(&self) -> AppResult<Vec<ActiveLoan>> {
        self.api.active_loans().await
    }

    /// Validate the form and register the loan.
    ///
    /// Invalid forms never reach the network.
    pub async fn register(&self, form: &LoanForm) -> AppResult<Option<String>> {
        let request = form.validate().map_err(AppError::InvalidForm)?;
        let message = self.api.create_loan(&request).await?;
        tracing::info!(
            "Loan registered for book {} ({} days)",
            request.book_id,
            request.days_requested
        );
        Ok(message)
    }

    /// Record the return of a loaned book
    pub async fn close(&self, loan_id: i32) -> AppResult<Option<String>> {
        let message = self.api.return_loan(loan_id).await?;
        tracing::info!("Loan {} returned", loan_id);
        Ok(message)
    }

    /// Due date for a loan starting today
    pub fn due_date(&self, days: LoanDays) -> AppResult<DueDate> {
        due_date_from_today(days)
            .ok_or_else(|| AppError::Validation("Due date out of range".to_string()))
    }
}
