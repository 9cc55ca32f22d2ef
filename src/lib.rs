//! Library Desk
//!
//! Terminal front end for a library management REST backend: lists books and
//! users, filters them, and issues add, borrow and return requests. All
//! business rules live on the server; this crate keeps a local view of its
//! collections in step with it.

pub mod api_client;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod services;
pub mod synchronizer;
pub mod view;

pub use api_client::ApiClient;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::{LibraryBackend, Services};
pub use synchronizer::{Outcome, Synchronizer};
