//! JOIN clause and the join-condition helper

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::clause::{Clause, Fragments};
use crate::error::{Error, Result};

/// JOIN clause: each fragment is a table expression prefixed with the join
/// keyword in effect when it was appended
///
/// Changing the join type only affects fragments added afterwards; earlier
/// fragments keep the prefix they were stored with.
#[derive(Debug, Clone)]
pub struct JoinClause {
    tables: Clause,
    join_type: String,
}

impl JoinClause {
    pub fn new() -> Self {
        Self {
            tables: Clause::new("", ""),
            join_type: String::new(),
        }
    }

    /// Join keyword modifier (`LEFT`, `INNER`, ...); empty for a plain JOIN
    pub fn join_type(&self) -> &str {
        &self.join_type
    }

    /// Set the modifier applied to subsequently added tables; stored
    /// upper-cased
    pub fn set_join_type(&mut self, value: &str) {
        self.join_type = value.to_uppercase();
    }

    /// Append a table expression (or several), each prefixed with the
    /// current join keyword
    pub fn add<F: Into<Fragments>>(&mut self, item: F) {
        let prefix = if self.join_type.is_empty() {
            String::from("JOIN")
        } else {
            format!("{} JOIN", self.join_type)
        };
        self.tables.add_prefixed(item, &prefix);
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn fragments(&self) -> &[String] {
        self.tables.fragments()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tables.iter()
    }

    /// Renders without a header: the fragments already carry their JOIN
    /// keyword
    pub fn render(&self) -> String {
        self.tables.body()
    }
}

impl Default for JoinClause {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for JoinClause {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.tables[index]
    }
}

impl IndexMut<usize> for JoinClause {
    fn index_mut(&mut self, index: usize) -> &mut String {
        &mut self.tables[index]
    }
}

impl fmt::Display for JoinClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tables, f)
    }
}

/// Build an `ON` join condition for a table from pairs of columns
///
/// `columns` is consumed pairwise, so `build_join("t", &["a", "b"])`
/// produces `"t ON a = b"` and additional pairs are connected with `AND`.
/// An odd or zero number of columns is rejected.
pub fn build_join(table: &str, columns: &[&str]) -> Result<String> {
    if columns.is_empty() || columns.len() % 2 != 0 {
        return Err(Error::invalid_argument(
            "must provide an even, non-zero number of columns to join on",
        ));
    }
    let pairs: Vec<String> = columns
        .chunks(2)
        .map(|pair| format!("{} = {}", pair[0], pair[1]))
        .collect();
    Ok(format!("{table} ON {}", pairs.join(" AND ")))
}
