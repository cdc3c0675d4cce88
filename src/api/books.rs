//! Catalog search endpoint

use crate::{api::ApiClient, error::AppResult, models::BookSummary};

impl ApiClient {
    /// Search the catalog; an empty query returns every book
    pub async fn search_books(&self, query: &str) -> AppResult<Vec<BookSummary>> {
        self.get::<Vec<BookSummary>>("/books/search", &[("query", query)])
            .await?
            .into_data("Error searching books")
    }
}
