//! Health check endpoint

use serde_json::Value;

use crate::{api::ApiClient, error::AppResult};

impl ApiClient {
    /// Connectivity probe against `GET /health`
    pub async fn health(&self) -> AppResult<()> {
        self.get::<Value>("/health", &[])
            .await?
            .into_ack("Backend reported an unhealthy status")
            .map(|_| ())
    }
}
