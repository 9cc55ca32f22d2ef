//! Request builders for the library backend

pub mod books;
pub mod users;

use async_trait::async_trait;

use crate::{
    api_client::ApiClient,
    error::AppResult,
    models::{Book, NewBook, NewUser, User},
};

/// Every backend operation the synchronizer relies on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryBackend: Send + Sync {
    async fn fetch_books(&self) -> AppResult<Vec<Book>>;
    async fn add_book(&self, book: &NewBook) -> AppResult<()>;
    async fn fetch_users(&self) -> AppResult<Vec<User>>;
    async fn add_user(&self, user: &NewUser) -> AppResult<()>;
    async fn borrow_book(&self, user_id: &str, book_id: &str) -> AppResult<()>;
    async fn return_book(&self, user_id: &str, book_id: &str) -> AppResult<()>;
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services on top of the given client
    pub fn new(client: ApiClient) -> Self {
        Self {
            books: books::BooksService::new(client.clone()),
            users: users::UsersService::new(client),
        }
    }
}

#[async_trait]
impl LibraryBackend for Services {
    async fn fetch_books(&self) -> AppResult<Vec<Book>> {
        self.books.fetch_books().await
    }

    async fn add_book(&self, book: &NewBook) -> AppResult<()> {
        self.books.add_book(book).await
    }

    async fn fetch_users(&self) -> AppResult<Vec<User>> {
        self.users.fetch_users().await
    }

    async fn add_user(&self, user: &NewUser) -> AppResult<()> {
        self.users.add_user(user).await
    }

    async fn borrow_book(&self, user_id: &str, book_id: &str) -> AppResult<()> {
        self.users.borrow_book(user_id, book_id).await
    }

    async fn return_book(&self, user_id: &str, book_id: &str) -> AppResult<()> {
        self.users.return_book(user_id, book_id).await
    }
}
