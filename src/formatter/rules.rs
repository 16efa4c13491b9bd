//! Pattern constants for the formatting passes
//!
//! Indentation depths:
//! - clause keywords: 2 spaces
//! - clause bodies and comma-separated items: 4 spaces
//! - JOIN tables and boolean connectors: 6 spaces
//!
//! The patterns are immutable and lazily compiled on first use; they are
//! the only process-wide shared state in the crate.

use std::sync::LazyLock;

use regex::Regex;

/// Two-space indent preceding clause keywords
pub const CLAUSE_INDENT: &str = "\n  ";

/// Four-space indent for clause bodies and list items
pub const BODY_INDENT: &str = "\n    ";

/// Six-space indent for JOIN tables and boolean connectors
pub const CONNECTOR_INDENT: &str = "\n      ";

/// Clause keywords that move to their own line
pub static CLAUSE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+(FROM\b|WHERE\b|GROUP BY\b|ORDER BY\b|LIMIT\b)").unwrap()
});

/// Clause headers whose body starts on the next line
pub static CLAUSE_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(SELECT|FROM|WHERE|GROUP BY|ORDER BY|LIMIT)\s+").unwrap()
});

/// A JOIN keyword together with its optional type modifier, matched as one
/// unit so the break lands before the modifier
pub static JOIN_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+((?:LEFT |RIGHT |INNER |OUTER )?JOIN\b)").unwrap());

/// Comma followed by whitespace
pub static COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s+").unwrap());

/// A standalone AND token
pub static AND_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bAND\b").unwrap());

/// A standalone OR token
pub static OR_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bOR\b").unwrap());

/// A BETWEEN range whose AND was pushed to a new line by the conjunction
/// pass; the range is rejoined onto one line
pub static SPLIT_BETWEEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(BETWEEN \w+ )\n\s+(AND)").unwrap());
