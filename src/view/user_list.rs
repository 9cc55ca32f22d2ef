//! User list tab with borrow and return actions

use std::fmt;

use crate::{
    models::{AvailabilityFilter, Book, SelectionMap, User},
    synchronizer::{filter_books, filter_users},
};

use super::{
    filter::{Color, FilterBar, FilterOption},
    table::Table,
};

pub fn borrowed_options() -> [FilterOption<bool>; 2] {
    [
        FilterOption { label: "With Loans", value: true, color: Color::Yellow },
        FilterOption { label: "All", value: false, color: Color::Blue },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowOption {
    pub book_id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnAction {
    pub book_id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub borrowed: usize,
    pub borrow_options: Vec<BorrowOption>,
    /// Book picked in the borrow control, `None` on the placeholder
    pub selected: Option<String>,
    pub returns: Vec<ReturnAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListView {
    pub filters: FilterBar,
    pub rows: Vec<UserRow>,
}

/// Rows for the visible users; `books` feeds every borrow control
pub fn user_list(
    users: &[User],
    books: &[Book],
    borrowed_only: bool,
    selection: &SelectionMap,
) -> UserListView {
    let borrow_options: Vec<BorrowOption> = filter_books(books, AvailabilityFilter::Available)
        .into_iter()
        .map(|b| BorrowOption {
            book_id: b.id.clone(),
            title: b.title.clone(),
        })
        .collect();

    let rows = filter_users(users, borrowed_only)
        .into_iter()
        .map(|user| UserRow {
            id: user.id.clone(),
            name: user.name.clone(),
            borrowed: user.books.len(),
            borrow_options: borrow_options.clone(),
            selected: selection.selected(&user.id).map(str::to_owned),
            returns: user
                .books
                .iter()
                .map(|b| ReturnAction {
                    book_id: b.id.clone(),
                    label: format!("Return {}", b.title),
                })
                .collect(),
        })
        .collect();

    UserListView {
        filters: FilterBar::new(&borrowed_options(), &borrowed_only),
        rows,
    }
}

impl fmt::Display for UserListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Users List    {}", self.filters)?;

        let table = Table {
            headers: vec!["Name".into(), "ID".into(), "Borrowed Books".into()],
            rows: self
                .rows
                .iter()
                .map(|r| vec![r.name.clone(), r.id.clone(), r.borrowed.to_string()])
                .collect(),
        };
        write!(f, "{}", table)?;

        for row in &self.rows {
            let options = row
                .borrow_options
                .iter()
                .map(|o| {
                    if row.selected.as_deref() == Some(o.book_id.as_str()) {
                        format!("*{}:{}", o.book_id, o.title)
                    } else {
                        format!("{}:{}", o.book_id, o.title)
                    }
                })
                .collect::<Vec<_>>();
            let options = if options.is_empty() {
                "no books available".to_string()
            } else {
                options.join(", ")
            };
            writeln!(f, "  {} borrow <{}>", row.id, options)?;

            for action in &row.returns {
                writeln!(f, "  {} {} ({})", row.id, action.label, action.book_id)?;
            }
        }
        Ok(())
    }
}
