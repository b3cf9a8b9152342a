//! doris-migrate - Run migration SQL against a Doris FE MySQL endpoint
//!
//! Waits for the FE MySQL port, executes the statement list, prints rows for
//! SELECTs and errors for statements that fail.
//!
//! Exit codes: 0 completed, 2 could not connect to run statements,
//! 3 FE never became ready.

use clap::Parser;
use common::init_logging;
use doris_migrate::{migrate, Args, MySqlConnector, MIGRATION_STATEMENTS};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    let _guard = init_logging("doris-migrate");

    let params = args.connection_params();
    let settings = args.settings();
    debug!(?params, ?settings, "Starting migration");

    let connector = MySqlConnector::new(params, settings.connect_timeout);
    let status = migrate(&connector, &settings, MIGRATION_STATEMENTS).await;

    std::process::exit(status.exit_code());
}
