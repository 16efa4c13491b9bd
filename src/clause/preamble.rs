//! CREATE TABLE / INSERT INTO statement preamble

/// Which preamble header to synthesize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreambleMode {
    /// `CREATE TABLE <name> AS`
    Create,
    /// `INSERT INTO <name>`
    Insert,
}

/// Single-slot clause that prefixes the statement with a
/// `CREATE TABLE ... AS` or `INSERT INTO ...` header
///
/// Unlike the other clauses this holds no fragment list; assigning a table
/// replaces the previous assignment wholesale, so there is at most one
/// active preamble at a time.
#[derive(Debug, Clone, Default)]
pub struct PreambleClause {
    mode: Option<PreambleMode>,
    table: String,
}

impl PreambleClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the preamble at a table, replacing any previous assignment
    pub fn set_table(&mut self, name: impl Into<String>, mode: PreambleMode) {
        self.table = name.into();
        self.mode = Some(mode);
    }

    pub fn mode(&self) -> Option<PreambleMode> {
        self.mode
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Deactivate the preamble
    pub fn clear(&mut self) {
        self.mode = None;
        self.table.clear();
    }

    /// The synthesized header, or `""` while inactive
    pub fn render(&self) -> String {
        match self.mode {
            Some(PreambleMode::Create) => format!("CREATE TABLE {} AS", self.table),
            Some(PreambleMode::Insert) => format!("INSERT INTO {}", self.table),
            None => String::new(),
        }
    }
}
