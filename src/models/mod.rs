//! Data models for Library Desk

pub mod book;
pub mod draft;
pub mod enums;
pub mod user;

// Re-export commonly used types
pub use book::{Book, NewBook};
pub use draft::{DraftField, NewEntityDraft};
pub use enums::{AvailabilityFilter, Tab};
pub use user::{LoanRequest, NewUser, SelectionMap, User};
