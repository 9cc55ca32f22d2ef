//! User model and related types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::book::Book;

/// User as served by `GET /Users`, with the books currently on loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl User {
    pub fn has_loans(&self) -> bool {
        !self.books.is_empty()
    }
}

/// Create user request body for `POST /Users`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body of `POST /users/borrow` and `POST /users/return`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub user_id: String,
    pub book_id: String,
}

/// Book chosen in each user's borrow control, keyed by user id
///
/// Entries are only ever overwritten. An empty book id is the placeholder
/// option and counts as no selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMap(IndexMap<String, String>);

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, user_id: impl Into<String>, book_id: impl Into<String>) {
        self.0.insert(user_id.into(), book_id.into());
    }

    /// Raw stored value, placeholder included
    pub fn get(&self, user_id: &str) -> Option<&str> {
        self.0.get(user_id).map(String::as_str)
    }

    /// Selected book id, `None` when nothing or the placeholder is selected
    pub fn selected(&self, user_id: &str) -> Option<&str> {
        self.get(user_id).filter(|id| !id.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
