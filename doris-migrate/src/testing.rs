//! In-memory connector used by unit tests

use crate::error::{MigrationError, Result};
use crate::row::Row;
use crate::session::{Connector, Session};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Scripted stand-in for an FE.
///
/// Connection attempts are numbered from 1. Attempts before `ready_on` are
/// refused, as are attempts at or after `down_from`.
pub struct FakeConnector {
    attempts: AtomicU32,
    ready_on: u32,
    down_from: Option<u32>,
    failing: Vec<String>,
    rows: Vec<Row>,
    broken_close: bool,
    journal: Arc<Mutex<Vec<String>>>,
}

impl FakeConnector {
    pub fn healthy() -> Self {
        Self {
            attempts: AtomicU32::new(0),
            ready_on: 1,
            down_from: None,
            failing: Vec::new(),
            rows: Vec::new(),
            broken_close: false,
            journal: Arc::default(),
        }
    }

    pub fn ready_on(mut self, attempt: u32) -> Self {
        self.ready_on = attempt;
        self
    }

    pub fn down_from(mut self, attempt: u32) -> Self {
        self.down_from = Some(attempt);
        self
    }

    /// Make any statement containing `fragment` fail.
    pub fn failing(mut self, fragment: &str) -> Self {
        self.failing.push(fragment.to_string());
        self
    }

    pub fn rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    /// Make closing a session report an error.
    pub fn broken_close(mut self) -> Self {
        self.broken_close = true;
        self
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Everything the fake observed, in order.
    pub fn journal(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }

    fn record(&self, entry: String) {
        self.journal.lock().unwrap().push(entry);
    }
}

#[async_trait]
impl Connector for FakeConnector {
    type Session = FakeSession;

    fn endpoint(&self) -> String {
        "fake:9030".to_string()
    }

    async fn connect(&self) -> Result<FakeSession> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        let down = self.down_from.is_some_and(|from| attempt >= from);
        if attempt < self.ready_on || down {
            self.record("refused".to_string());
            return Err(MigrationError::Other(
                "Can't connect to MySQL server on 'fake' (111)".to_string(),
            ));
        }

        self.record("connect".to_string());
        Ok(FakeSession {
            failing: self.failing.clone(),
            rows: self.rows.clone(),
            broken_close: self.broken_close,
            journal: Arc::clone(&self.journal),
        })
    }
}

pub struct FakeSession {
    failing: Vec<String>,
    rows: Vec<Row>,
    broken_close: bool,
    journal: Arc<Mutex<Vec<String>>>,
}

impl FakeSession {
    fn run(&self, verb: &str, sql: &str) -> Result<()> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("{}: {}", verb, sql));

        match self.failing.iter().find(|f| sql.contains(f.as_str())) {
            Some(fragment) => Err(MigrationError::Other(format!(
                "errCode = 2, detailMessage = rejected '{}'",
                fragment
            ))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Session for FakeSession {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        self.run("execute", sql)
    }

    async fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        self.run("query", sql)?;
        Ok(self.rows.clone())
    }

    async fn close(self) -> Result<()> {
        self.journal.lock().unwrap().push("close".to_string());
        if self.broken_close {
            return Err(MigrationError::Other("connection reset by peer".to_string()));
        }
        Ok(())
    }
}
