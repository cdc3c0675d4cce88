//! Catalog service

use std::sync::Arc;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::{api::LibraryApi, error::AppResult, models::BookSummary};

#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn LibraryApi>,
}

impl CatalogService {
    pub fn new(api: Arc<dyn LibraryApi>) -> Self {
        Self { api }
    }

    /// Search books; blank queries list the whole catalog
    pub async fn search(&self, query: &str) -> AppResult<Vec<BookSummary>> {
        self.api.search_books(query.trim()).await
    }

    /// Books that can be loaned right now, ordered by title
    pub async fn available_books(&self) -> AppResult<Vec<BookSummary>> {
        let books = self.api.search_books("").await?;
        let available = sort_by_title(books.into_iter().filter(|b| b.available).collect());
        if available.is_empty() {
            tracing::warn!("No books available for loan");
        }
        Ok(available)
    }
}

/// Comparison key ignoring case and accents ("Él" sorts with "el")
pub fn title_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

pub fn sort_by_title(mut books: Vec<BookSummary>) -> Vec<BookSummary> {
    books.sort_by_cached_key(|b| title_key(&b.title));
    books
}
