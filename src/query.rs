//! Query aggregate: owns one instance of every clause and assembles the
//! canonical statement

use std::fmt;

use crate::clause::{Clause, JoinClause, PreambleClause, SelectClause, WhereClause};
use crate::error::Result;
use crate::formatter;

/// An incrementally built SQL statement
///
/// Clauses are created once at construction and live for the query's
/// lifetime; callers mutate them in place and read [`Query::statement`]
/// whenever a snapshot of the canonical text is needed. The [`fmt::Display`]
/// form is the multi-line pretty-printed rendering.
///
/// ```
/// use sqlbrick::Query;
///
/// let mut query = Query::new();
/// query.select.add(["col1", "col2"]);
/// query.from.add("dbo.a_table");
/// assert_eq!(query.statement(), "SELECT col1, col2 FROM dbo.a_table");
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    pub preamble: PreambleClause,
    pub select: SelectClause,
    pub from: Clause,
    pub join: JoinClause,
    pub where_clause: WhereClause,
    pub group_by: Clause,
    pub order_by: Clause,
    pub limit: Clause,
}

impl Query {
    pub fn new() -> Self {
        Self {
            preamble: PreambleClause::new(),
            select: SelectClause::new(),
            from: Clause::new("FROM", ""),
            join: JoinClause::new(),
            where_clause: WhereClause::new(),
            group_by: Clause::new("GROUP BY", ","),
            order_by: Clause::new("ORDER BY", ","),
            limit: Clause::new("LIMIT", ","),
        }
    }

    /// Canonical single-line statement
    ///
    /// Clause renderings are concatenated in fixed order, the connector the
    /// WHERE clause tags onto its first condition is stripped, and
    /// whitespace runs are collapsed to single spaces.
    pub fn statement(&self) -> String {
        let parts = [
            self.preamble.render(),
            self.select.render(),
            self.from.render(),
            self.join.render(),
            self.where_clause.render(),
            self.group_by.render(),
            self.order_by.render(),
            self.limit.render(),
        ];
        let assembled = parts.join(" ");
        normalize_whitespace(&strip_where_connector(&assembled))
    }

    /// Multi-line rendering of [`Query::statement`]
    pub fn pretty(&self) -> String {
        formatter::pretty_print(&self.statement())
    }

    pub fn distinct(&self) -> bool {
        self.select.distinct()
    }

    pub fn set_distinct(&mut self, value: bool) {
        self.select.set_distinct(value);
    }

    pub fn top(&self) -> Option<u64> {
        self.select.top()
    }

    pub fn set_top(&mut self, value: Option<u64>) -> Result<()> {
        self.select.set_top(value)
    }

    pub fn join_type(&self) -> &str {
        self.join.join_type()
    }

    pub fn set_join_type(&mut self, value: &str) {
        self.join.set_join_type(value);
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}

/// Remove the connector immediately following the `WHERE` keyword
///
/// The WHERE clause tags every stored condition with a connector, the first
/// one included; that extra token surfaces right after the header and is
/// dropped here. Only the first `WHERE ` occurrence is treated this way,
/// and only one token is removed.
fn strip_where_connector(statement: &str) -> String {
    if let Some(pos) = statement.find("WHERE ") {
        let after = pos + "WHERE ".len();
        let rest = &statement[after..];
        for connector in ["AND ", "OR "] {
            if let Some(stripped) = rest.strip_prefix(connector) {
                return format!("{}{}", &statement[..after], stripped);
            }
        }
    }
    statement.to_string()
}

/// Collapse whitespace runs to single spaces and trim both ends
fn normalize_whitespace(statement: &str) -> String {
    statement.split_whitespace().collect::<Vec<_>>().join(" ")
}
