//! Client-side services built on the loan API

pub mod catalog;
pub mod due_date;
pub mod loans;
pub mod search;
pub mod stats;

use std::sync::Arc;

use crate::{api::LibraryApi, error::AppResult};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
    pub stats: stats::StatsService,
    api: Arc<dyn LibraryApi>,
}

impl Services {
    /// Create all services sharing one API implementation
    pub fn new(api: Arc<dyn LibraryApi>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(api.clone()),
            loans: loans::LoansService::new(api.clone()),
            stats: stats::StatsService::new(api.clone()),
            api,
        }
    }

    /// One-time connectivity check run before anything else
    pub async fn probe(&self) -> AppResult<()> {
        match self.api.health().await {
            Ok(()) => {
                tracing::info!("Backend connected");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Could not reach the backend: {}", e);
                Err(e)
            }
        }
    }
}
