//! Error types for Loan Desk

use std::fmt;

use thiserror::Error;

/// Generic text shown for every transport-level failure
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error with the server";

/// Broad classes of failure, used to decide how an error is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The server answered with `success: false`
    Rejected,
    /// Network unreachable, non-OK status or malformed response
    Transport,
    /// Client-side validation, never reaches the network
    Validation,
}

/// Loan form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Book,
    Days,
    ReaderFirstName,
    ReaderLastName,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Book => "book",
            FormField::Days => "days",
            FormField::ReaderFirstName => "reader first name",
            FormField::ReaderLastName => "reader last name",
        };
        write!(f, "{}", label)
    }
}

/// Per-field validation messages collected from a loan form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<(FormField, String)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; only the first message per field is kept
    pub fn add(&mut self, field: FormField, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.errors.push((field, message.into()));
        }
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(f, msg)| (*f, msg.as_str()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Server answered but refused the operation; message is shown verbatim
    #[error("{0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Please complete all fields correctly ({0})")]
    InvalidForm(FormErrors),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Rejected(_) => ErrorKind::Rejected,
            AppError::Transport(_) | AppError::HttpStatus { .. } | AppError::MalformedResponse(_) => {
                ErrorKind::Transport
            }
            AppError::InvalidForm(_) | AppError::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Text presented to the user for this error
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Rejected | ErrorKind::Validation => self.to_string(),
            ErrorKind::Transport => {
                tracing::error!("Transport failure: {}", self);
                CONNECTION_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
