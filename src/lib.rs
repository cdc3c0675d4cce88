//! Loan Desk
//!
//! Client for a library loan management API: catalog search with debounced
//! dispatch, loan registration with due-date computation, active loan
//! tracking and statistics. All business rules live on the server.

use std::sync::Arc;

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared by the front-end handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state around the HTTP client described by `config`
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let client = api::ApiClient::new(&config.api)?;
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(Arc::new(client))),
        })
    }
}
