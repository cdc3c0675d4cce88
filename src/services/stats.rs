//! Statistics service

use std::sync::Arc;

use crate::{api::LibraryApi, error::AppResult, models::StatisticsSnapshot};

#[derive(Clone)]
pub struct StatsService {
    api: Arc<dyn LibraryApi>,
}

impl StatsService {
    pub fn new(api: Arc<dyn LibraryApi>) -> Self {
        Self { api }
    }

    pub async fn snapshot(&self) -> AppResult<StatisticsSnapshot> {
        let stats = self.api.statistics().await?;
        tracing::debug!(
            "Statistics: {} books, {} active loans ({} overdue)",
            stats.total_books,
            stats.active_loans,
            stats.overdue_loans
        );
        Ok(stats)
    }
}
