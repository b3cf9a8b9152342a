//! Database connections
//!
//! The runner talks to the FE through two seams: a [`Connector`] that opens
//! connections and the [`Session`] it hands back. [`MySqlConnector`] is the
//! production implementation over sqlx's MySQL driver.

use crate::config::ConnectionParams;
use crate::error::{MigrationError, Result};
use crate::row::{is_numeric_type, Cell, Row};
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{Column, Connection, Executor, Row as _, TypeInfo, ValueRef};
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Opens connections to the FE.
#[async_trait]
pub trait Connector: Send + Sync {
    type Session: Session;

    /// Human-readable `host:port` of the endpoint.
    fn endpoint(&self) -> String;

    async fn connect(&self) -> Result<Self::Session>;
}

/// An open connection. Every statement autocommits.
#[async_trait]
pub trait Session: Send {
    /// Run a statement whose result set, if any, is discarded.
    async fn execute(&mut self, sql: &str) -> Result<()>;

    /// Run a statement and fetch all of its rows.
    async fn query(&mut self, sql: &str) -> Result<Vec<Row>>;

    async fn close(self) -> Result<()>;
}

pub struct MySqlConnector {
    params: ConnectionParams,
    connect_timeout: Duration,
}

impl MySqlConnector {
    pub fn new(params: ConnectionParams, connect_timeout: Duration) -> Self {
        Self {
            params,
            connect_timeout,
        }
    }

    /// Session state (sql_mode, time_zone) is left at the FE's defaults;
    /// only the character set is negotiated.
    fn options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.params.host)
            .port(self.params.port)
            .username(&self.params.user)
            .charset(&self.params.charset)
            .pipes_as_concat(false)
            .no_engine_substitution(false)
            .timezone(None);

        if self.params.password.is_empty() {
            options
        } else {
            options.password(&self.params.password)
        }
    }
}

#[async_trait]
impl Connector for MySqlConnector {
    type Session = MySqlSession;

    fn endpoint(&self) -> String {
        self.params.address()
    }

    async fn connect(&self) -> Result<MySqlSession> {
        debug!(endpoint = %self.params.address(), user = %self.params.user, "Connecting");

        let conn = timeout(
            self.connect_timeout,
            MySqlConnection::connect_with(&self.options()),
        )
        .await
        .map_err(|_| MigrationError::ConnectTimeout(self.connect_timeout))??;

        Ok(MySqlSession { conn })
    }
}

/// A bare `&str` carries no arguments, so statements go over the text protocol
/// (no prepare step) and anything the FE accepts interactively is accepted here.
pub struct MySqlSession {
    conn: MySqlConnection,
}

#[async_trait]
impl Session for MySqlSession {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        let result = self.conn.execute(sql).await?;
        debug!(rows_affected = result.rows_affected(), "Statement executed");
        Ok(())
    }

    async fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        let rows = self.conn.fetch_all(sql).await?;
        rows.iter().map(decode_row).collect()
    }

    async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}

fn decode_row(row: &MySqlRow) -> Result<Row> {
    row.columns()
        .iter()
        .map(|column| {
            let ordinal = column.ordinal();
            if row.try_get_raw(ordinal)?.is_null() {
                return Ok(Cell::Null);
            }

            // Text-protocol values arrive as their string form whatever the column type
            let text: String = row.try_get_unchecked(ordinal)?;
            if is_numeric_type(column.type_info().name()) {
                Ok(Cell::Number(text))
            } else {
                Ok(Cell::Text(text))
            }
        })
        .collect::<Result<Vec<_>>>()
        .map(Row)
}
