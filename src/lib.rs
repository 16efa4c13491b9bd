//! sqlbrick - an incremental SQL statement builder
//!
//! Queries are assembled by pushing text fragments into named clause
//! containers (SELECT, FROM, JOIN, WHERE, ...) and read back either as a
//! canonical single-line statement or as an indented multi-line rendering.
//! Fragments are trusted verbatim; execution, validation, and dialect
//! concerns belong to whatever database client consumes the text.
//!
//! ```
//! use sqlbrick::Query;
//!
//! let mut query = Query::new();
//! query.from.add("ex_db.dbo.ex_table tbl");
//! query.select.add(["col1", "col2", "col3"]);
//! query.select.add("col4");
//! query.where_clause.add("col1 = 1");
//! query.where_clause.add_or("col2 IS NULL");
//! assert_eq!(
//!     query.statement(),
//!     "SELECT col1, col2, col3, col4 FROM ex_db.dbo.ex_table tbl \
//!      WHERE col1 = 1 OR col2 IS NULL",
//! );
//! ```

pub mod clause;
pub mod error;
pub mod formatter;
pub mod query;

pub use clause::{
    build_join, Clause, Fragments, JoinClause, PreambleClause, PreambleMode, SelectClause,
    WhereClause,
};
pub use error::{Error, Result};
pub use formatter::pretty_print;
pub use query::Query;
