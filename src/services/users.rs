//! User and loan service

use crate::{
    api_client::ApiClient,
    error::AppResult,
    models::{LoanRequest, NewUser, User},
};

#[derive(Clone)]
pub struct UsersService {
    client: ApiClient,
}

impl UsersService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List every user with their borrowed books
    pub async fn fetch_users(&self) -> AppResult<Vec<User>> {
        self.client.get_json("/Users").await
    }

    /// Create a user; the draft is sent as-is
    pub async fn add_user(&self, user: &NewUser) -> AppResult<()> {
        self.client.post_json("/Users", user).await
    }

    /// Lend a book to a user
    pub async fn borrow_book(&self, user_id: &str, book_id: &str) -> AppResult<()> {
        self.client
            .post_json("/users/borrow", &Self::loan(user_id, book_id))
            .await
    }

    /// Take a book back from a user
    pub async fn return_book(&self, user_id: &str, book_id: &str) -> AppResult<()> {
        self.client
            .post_json("/users/return", &Self::loan(user_id, book_id))
            .await
    }

    fn loan(user_id: &str, book_id: &str) -> LoanRequest {
        LoanRequest {
            user_id: user_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}
