//! Migration runner for a Doris FE MySQL endpoint
//!
//! Waits for the FE to accept connections, then runs a fixed list of SQL
//! statements over a single connection:
//! - Readiness polling at a fixed interval, bounded by a timeout
//! - Best-effort execution (a failing statement does not stop the rest)
//! - Row dumps for `SELECT` statements

pub mod config;
pub mod error;
pub mod executor;
pub mod row;
pub mod session;
pub mod statements;

#[cfg(test)]
mod testing;

use common::{wait_until_ready, WaitError};
use tracing::{error, info};

pub use config::{Args, ConnectionParams, Settings};
pub use error::{MigrationError, Result};
pub use executor::{run_statements, RunReport, StatementOutcome};
pub use row::{Cell, Row};
pub use session::{Connector, MySqlConnector, Session};
pub use statements::{StatementKind, MIGRATION_STATEMENTS};

/// Name the FE goes by in progress output.
pub const FE_LABEL: &str = "FE MySQL";

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every statement was attempted, whether or not it succeeded.
    Completed,
    /// The FE became ready but the executor could not open its connection.
    ConnectFailed,
    /// The FE never accepted a connection within the timeout.
    NotReady,
}

impl RunStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Completed => 0,
            Self::ConnectFailed => 2,
            Self::NotReady => 3,
        }
    }
}

/// Poll until a trial connection succeeds. Each trial connection is closed right away.
pub async fn wait_for_endpoint<C: Connector>(
    connector: &C,
    settings: &Settings,
) -> std::result::Result<u32, WaitError> {
    wait_until_ready(FE_LABEL, settings.timeout, settings.interval, || {
        try_connect(connector)
    })
    .await
}

async fn try_connect<C: Connector>(connector: &C) -> Result<()> {
    let session = connector.connect().await?;
    // A failed close still proves the endpoint accepts connections
    let _ = session.close().await;
    Ok(())
}

/// Wait for the FE, then run `statements` against it.
pub async fn migrate<C: Connector>(
    connector: &C,
    settings: &Settings,
    statements: &[&str],
) -> RunStatus {
    info!(
        "Waiting up to {}s for {} at {}...",
        settings.timeout.as_secs(),
        FE_LABEL,
        connector.endpoint()
    );

    if let Err(e) = wait_for_endpoint(connector, settings).await {
        error!(
            reason = %e,
            "{} did not become ready in time. Check `docker compose ps` and FE logs.",
            FE_LABEL
        );
        return RunStatus::NotReady;
    }

    match run_statements(connector, statements).await {
        Ok(_) => {
            info!("All done.");
            RunStatus::Completed
        }
        Err(_) => RunStatus::ConnectFailed,
    }
}
