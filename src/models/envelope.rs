//! Response envelope shared by every loan API endpoint

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// `{ success, data?, message? }` wrapper around every API answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning `success: false` into [`AppError::Rejected`].
    /// `fallback` is used when the server rejects without a message.
    pub fn into_data(self, fallback: &str) -> AppResult<T> {
        if !self.success {
            return Err(AppError::Rejected(
                self.message.unwrap_or_else(|| fallback.to_string()),
            ));
        }
        self.data
            .ok_or_else(|| AppError::MalformedResponse("successful response without data".to_string()))
    }

    /// Acknowledge a payload-less answer, returning the server message if any
    pub fn into_ack(self, fallback: &str) -> AppResult<Option<String>> {
        if self.success {
            Ok(self.message)
        } else {
            Err(AppError::Rejected(
                self.message.unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}
