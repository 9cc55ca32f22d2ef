//! Generic column-driven table

use std::fmt;

/// Raw value pulled out of a row by a column accessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Number(i64),
    Flag(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Column descriptor: header label, field accessor, optional renderer
pub struct Column<T> {
    pub header: &'static str,
    pub accessor: fn(&T) -> CellValue,
    pub render: Option<fn(&CellValue) -> String>,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, accessor: fn(&T) -> CellValue) -> Self {
        Self {
            header,
            accessor,
            render: None,
        }
    }

    pub fn with_render(mut self, render: fn(&CellValue) -> String) -> Self {
        self.render = Some(render);
        self
    }

    fn cell(&self, item: &T) -> String {
        let value = (self.accessor)(item);
        match self.render {
            Some(render) => render(&value),
            None => value.to_string(),
        }
    }
}

/// Rendered table: one row per item, one cell per column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn build<'a, T: 'a>(columns: &[Column<T>], data: impl IntoIterator<Item = &'a T>) -> Self {
        let headers = columns.iter().map(|c| c.header.to_string()).collect();
        let rows = data
            .into_iter()
            .map(|item| columns.iter().map(|c| c.cell(item)).collect())
            .collect();

        Self { headers, rows }
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_line(f, &self.headers, &widths)?;

        let rule = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(f, "{}", rule)?;

        for row in &self.rows {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}
