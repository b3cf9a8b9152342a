//! The migration payload and statement classification

/// Statements run against the FE, in order. Later entries depend on the
/// side effects of earlier ones (database before table, table before rows).
pub const MIGRATION_STATEMENTS: &[&str] = &[
    "CREATE DATABASE IF NOT EXISTS migration_test;",
    "USE migration_test;",
    "CREATE TABLE IF NOT EXISTS agent_test_table (\n\
     \x20   id INT,\n\
     \x20   name VARCHAR(50)\n\
     ) \n\
     DISTRIBUTED BY HASH(id) BUCKETS 1 \n\
     PROPERTIES(\"replication_num\" = \"1\");",
    "INSERT INTO agent_test_table VALUES (1, 'Bq2Doris_Success');",
    "SELECT id, name FROM agent_test_table;",
];

/// How a statement's success is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Rows are fetched and printed.
    Query,
    /// Nothing beyond success or failure is reported.
    Command,
}

impl StatementKind {
    /// Classify by the leading keyword, ignoring case and surrounding whitespace.
    pub fn classify(sql: &str) -> Self {
        let is_select = sql
            .trim()
            .get(..6)
            .is_some_and(|keyword| keyword.eq_ignore_ascii_case("SELECT"));

        if is_select {
            Self::Query
        } else {
            Self::Command
        }
    }
}
