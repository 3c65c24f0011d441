//! Click-to-sort tables.
//!
//! Leaderboards and contest archives sort by whichever column header was
//! clicked last; clicking the same header again flips the order.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{CrypticError, CrypticResult};

fn as_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Compare two cell values.
///
/// Numbers compare numerically; if either side is not a number both compare
/// as case-insensitive strings.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_uppercase().cmp(&b.to_uppercase()),
    }
}

/// Sort direction applied by a header click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A header row plus body rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Parse delimited text; the first non-blank line is the header.
    pub fn parse(text: &str, delimiter: char) -> Self {
        let mut lines = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split(delimiter).map(str::to_string).collect::<Vec<_>>());

        let header = lines.next().unwrap_or_default();
        Self {
            header,
            rows: lines.collect(),
        }
    }

    pub fn render(&self, delimiter: char) -> String {
        let separator = delimiter.to_string();
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .map(|row| row.join(separator.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Resolve a column by header name (case-insensitive) or 1-based position.
    pub fn column_index(&self, column: &str) -> CrypticResult<usize> {
        let wanted = column.trim();
        if let Some(idx) = self
            .header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        {
            return Ok(idx);
        }

        match wanted.parse::<usize>() {
            Ok(n) if n >= 1 && n <= self.header.len() => Ok(n - 1),
            _ => Err(CrypticError::ColumnNotFound(column.to_string())),
        }
    }

    /// Text of a cell; missing cells read as empty.
    pub fn cell(row: &[String], idx: usize) -> &str {
        row.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Stable ascending sort of the body rows by column `idx`.
    pub fn sort_by_column(&mut self, idx: usize) {
        self.rows
            .sort_by(|a, b| compare_values(Self::cell(a, idx), Self::cell(b, idx)));
    }
}

/// Per-table click state.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    /// Columns whose last click left them ascending.
    ascending: HashMap<usize, bool>,
    active: Option<usize>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click on header `idx`.
    pub fn click(&mut self, table: &mut Table, idx: usize) -> SortDirection {
        table.sort_by_column(idx);

        let was_ascending = self.ascending.get(&idx).copied().unwrap_or(false);
        if was_ascending {
            table.rows.reverse();
        }
        self.ascending.insert(idx, !was_ascending);
        self.active = Some(idx);

        if was_ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    /// The highlighted column.
    pub fn active_column(&self) -> Option<usize> {
        self.active
    }
}
