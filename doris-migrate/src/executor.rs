//! Statement execution
//!
//! Runs the statement list over one connection, best-effort: a failing
//! statement is reported and the next one is attempted anyway.

use crate::error::Result;
use crate::row::Row;
use crate::session::{Connector, Session};
use crate::statements::StatementKind;
use tracing::{debug, error, info};

/// What happened to a single statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementOutcome {
    Executed,
    Rows(Vec<Row>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementReport {
    /// Statement text with surrounding whitespace trimmed
    pub sql: String,
    pub outcome: StatementOutcome,
}

/// Outcome of a run that got as far as opening its connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub statements: Vec<StatementReport>,
}

impl RunReport {
    pub fn failed(&self) -> usize {
        self.statements
            .iter()
            .filter(|s| matches!(s.outcome, StatementOutcome::Failed(_)))
            .count()
    }

    pub fn succeeded(&self) -> usize {
        self.statements.len() - self.failed()
    }
}

/// Open a connection and run every statement in order.
///
/// Returns an error only when the connection itself cannot be opened.
/// The connection is closed once the list is exhausted; close errors are ignored.
pub async fn run_statements<C: Connector>(connector: &C, statements: &[&str]) -> Result<RunReport> {
    let mut session = match connector.connect().await {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to connect: {}", e);
            return Err(e);
        }
    };

    let report = execute_all(&mut session, statements).await;

    if let Err(e) = session.close().await {
        debug!(error = %e, "Ignoring error while closing connection");
    }

    debug!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Statement list exhausted"
    );

    Ok(report)
}

/// Run each statement, capturing failures instead of propagating them.
pub async fn execute_all<S: Session>(session: &mut S, statements: &[&str]) -> RunReport {
    let mut report = RunReport::default();

    for sql in statements {
        let trimmed = sql.trim();
        info!("---> Executing SQL:\n{}", trimmed);

        let outcome = match StatementKind::classify(sql) {
            StatementKind::Query => match session.query(sql).await {
                Ok(rows) => {
                    info!("Query returned {} row(s):", rows.len());
                    for row in &rows {
                        info!("{}", row);
                    }
                    StatementOutcome::Rows(rows)
                }
                Err(e) => StatementOutcome::Failed(e.to_string()),
            },
            StatementKind::Command => match session.execute(sql).await {
                Ok(()) => StatementOutcome::Executed,
                Err(e) => StatementOutcome::Failed(e.to_string()),
            },
        };

        if let StatementOutcome::Failed(message) = &outcome {
            error!("ERROR executing statement: {}", message);
        }

        report.statements.push(StatementReport {
            sql: trimmed.to_string(),
            outcome,
        });
    }

    report
}
