//! Book catalog service

use crate::{
    api_client::ApiClient,
    error::AppResult,
    models::{Book, NewBook},
};

#[derive(Clone)]
pub struct BooksService {
    client: ApiClient,
}

impl BooksService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List every book
    pub async fn fetch_books(&self) -> AppResult<Vec<Book>> {
        self.client.get_json("/Books").await
    }

    /// Create a book; the draft is sent as-is
    pub async fn add_book(&self, book: &NewBook) -> AppResult<()> {
        self.client.post_json("/Books", book).await
    }
}
