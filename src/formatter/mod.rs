//! Multi-line statement formatting
//!
//! Turns the canonical single-line statement into an indented rendering by
//! running an ordered sequence of text substitution passes. The order
//! matters: the WHERE-scoped conjunction pass relies on the clause breaks
//! already being in place, and the BETWEEN repair only recognizes line
//! breaks introduced by the conjunction pass itself.

pub mod rules;

use rules::{
    AND_TOKEN, BODY_INDENT, CLAUSE_BODY, CLAUSE_INDENT, CLAUSE_KEYWORD, COMMA, CONNECTOR_INDENT,
    JOIN_KEYWORD, OR_TOKEN, SPLIT_BETWEEN,
};

/// Pretty-print a canonical statement
///
/// The input is expected to be the single-line, whitespace-normalized text
/// produced by [`crate::Query::statement`]. The output is deterministic and
/// a pure function of the input.
pub fn pretty_print(statement: &str) -> String {
    let broken = break_before_clauses(statement);
    let broken = break_after_clause_headers(&broken);
    let broken = break_before_joins(&broken);
    let broken = break_after_commas(&broken);
    let broken = break_where_conjunctions(&broken);
    break_disjunctions(&broken)
}

/// Start a clause-indented line before FROM, WHERE, GROUP BY, ORDER BY,
/// and LIMIT
fn break_before_clauses(statement: &str) -> String {
    let replacement = format!("{CLAUSE_INDENT}${{1}}");
    CLAUSE_KEYWORD
        .replace_all(statement, replacement.as_str())
        .into_owned()
}

/// Push each clause body onto its own indented line
fn break_after_clause_headers(statement: &str) -> String {
    let replacement = format!("${{1}}{BODY_INDENT}");
    CLAUSE_BODY
        .replace_all(statement, replacement.as_str())
        .into_owned()
}

/// Give every JOIN (typed or plain) its own line
fn break_before_joins(statement: &str) -> String {
    let replacement = format!("{CONNECTOR_INDENT}${{1}}");
    JOIN_KEYWORD
        .replace_all(statement, replacement.as_str())
        .into_owned()
}

/// Break list items after each comma
fn break_after_commas(statement: &str) -> String {
    let replacement = format!(",{BODY_INDENT}");
    COMMA
        .replace_all(statement, replacement.as_str())
        .into_owned()
}

/// Within the span from the first WHERE keyword to the end of the
/// statement, give each AND its own line; `BETWEEN x AND y` ranges are
/// rejoined so they stay single-line
///
/// Scoping to WHERE keeps `JOIN ... ON ... AND ...` conditions intact.
fn break_where_conjunctions(statement: &str) -> String {
    let Some(pos) = statement.find("WHERE") else {
        return statement.to_string();
    };
    let (head, tail) = statement.split_at(pos + "WHERE".len());
    let replacement = format!("{CONNECTOR_INDENT}AND");
    let broken = AND_TOKEN.replace_all(tail, replacement.as_str());
    let repaired = SPLIT_BETWEEN.replace_all(&broken, "${1}${2}");
    format!("{head}{repaired}")
}

/// Give every OR its own line, statement-wide
fn break_disjunctions(statement: &str) -> String {
    let replacement = format!("{CONNECTOR_INDENT}OR");
    OR_TOKEN
        .replace_all(statement, replacement.as_str())
        .into_owned()
}
