//! In-progress form input for the add modals

use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

use super::book::NewBook;
use super::user::NewUser;

/// Form field of the add modals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Author,
    Isbn,
    PublicationYear,
    Name,
}

impl DraftField {
    pub const BOOK_FIELDS: [DraftField; 4] = [
        DraftField::Title,
        DraftField::Author,
        DraftField::Isbn,
        DraftField::PublicationYear,
    ];

    pub const USER_FIELDS: [DraftField; 1] = [DraftField::Name];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Author => "Author",
            DraftField::Isbn => "ISBN",
            DraftField::PublicationYear => "Publication Year",
            DraftField::Name => "Full Name",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftField::Title => "Example: One Hundred Years of Solitude",
            DraftField::Author => "Example: Gabriel García Márquez",
            DraftField::Isbn => "Example: 978-0307474728",
            DraftField::PublicationYear => "Example: 1967",
            DraftField::Name => "Example: John Doe",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(DraftField::Title),
            "author" => Ok(DraftField::Author),
            "isbn" => Ok(DraftField::Isbn),
            "year" | "publicationyear" | "publication_year" => Ok(DraftField::PublicationYear),
            "name" => Ok(DraftField::Name),
            other => Err(format!("unknown field '{}'", other)),
        }
    }
}

/// Partially filled book or user staged in the add modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntityDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub publication_year: Option<i32>,
    pub name: Option<String>,
}

impl NewEntityDraft {
    /// Store form input; only the year is parsed
    pub fn set(&mut self, field: DraftField, value: &str) -> AppResult<()> {
        match field {
            DraftField::Title => self.title = Some(value.to_string()),
            DraftField::Author => self.author = Some(value.to_string()),
            DraftField::Isbn => self.isbn = Some(value.to_string()),
            DraftField::Name => self.name = Some(value.to_string()),
            DraftField::PublicationYear => {
                let year = value.trim().parse::<i32>().map_err(|_| {
                    AppError::Validation(format!("'{}' is not a year", value))
                })?;
                self.publication_year = Some(year);
            }
        }
        Ok(())
    }

    /// Current input of a field, rendered for display
    pub fn value(&self, field: DraftField) -> Option<String> {
        match field {
            DraftField::Title => self.title.clone(),
            DraftField::Author => self.author.clone(),
            DraftField::Isbn => self.isbn.clone(),
            DraftField::PublicationYear => self.publication_year.map(|y| y.to_string()),
            DraftField::Name => self.name.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_new_book(&self) -> NewBook {
        NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            publication_year: self.publication_year,
        }
    }

    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name.clone(),
        }
    }
}
