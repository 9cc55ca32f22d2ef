//! View state enums

use std::fmt;

use super::book::Book;

// ---------------------------------------------------------------------------
// Tab
// ---------------------------------------------------------------------------

/// Collection currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Books,
    Users,
}

impl Tab {
    /// Singular noun used in "Add ..." labels and notifications
    pub fn entity(&self) -> &'static str {
        match self {
            Tab::Books => "Book",
            Tab::Users => "User",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tab::Books => "Books",
            Tab::Users => "Users",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// AvailabilityFilter
// ---------------------------------------------------------------------------

/// Tri-state book filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    #[default]
    All,
    Available,
    Unavailable,
}

impl AvailabilityFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Available => book.is_available,
            AvailabilityFilter::Unavailable => !book.is_available,
        }
    }
}
