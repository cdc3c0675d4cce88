//! Statistics endpoint

use crate::{api::ApiClient, error::AppResult, models::StatisticsSnapshot};

impl ApiClient {
    /// Fetch the aggregate loan statistics
    pub async fn statistics(&self) -> AppResult<StatisticsSnapshot> {
        self.get::<StatisticsSnapshot>("/loans/statistics", &[])
            .await?
            .into_data("Error loading statistics")
    }
}
