//! Book list tab

use std::fmt;

use crate::{
    models::{AvailabilityFilter, Book},
    synchronizer::filter_books,
};

use super::{
    filter::{Color, FilterBar, FilterOption},
    table::{CellValue, Column, Table},
};

pub fn availability_options() -> [FilterOption<AvailabilityFilter>; 3] {
    [
        FilterOption {
            label: "Available",
            value: AvailabilityFilter::Available,
            color: Color::Green,
        },
        FilterOption {
            label: "Not Available",
            value: AvailabilityFilter::Unavailable,
            color: Color::Red,
        },
        FilterOption {
            label: "All",
            value: AvailabilityFilter::All,
            color: Color::Blue,
        },
    ]
}

fn state_label(value: &CellValue) -> String {
    match value {
        CellValue::Flag(true) => "Available".to_string(),
        _ => "Borrowed".to_string(),
    }
}

pub fn book_columns() -> Vec<Column<Book>> {
    vec![
        Column::new("ISBN", |b: &Book| CellValue::Text(b.isbn.clone())),
        Column::new("Title", |b: &Book| CellValue::Text(b.title.clone())),
        Column::new("Author", |b: &Book| CellValue::Text(b.author.clone())),
        Column::new("Year", |b: &Book| match b.publication_year {
            Some(year) => CellValue::Number(i64::from(year)),
            None => CellValue::Text(String::new()),
        }),
        Column::new("State", |b: &Book| CellValue::Flag(b.is_available))
            .with_render(state_label),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookListView {
    pub filters: FilterBar,
    pub table: Table,
}

pub fn book_list(books: &[Book], filter: AvailabilityFilter) -> BookListView {
    BookListView {
        filters: FilterBar::new(&availability_options(), &filter),
        table: Table::build(&book_columns(), filter_books(books, filter)),
    }
}

impl fmt::Display for BookListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Book List    {}", self.filters)?;
        write!(f, "{}", self.table)
    }
}
