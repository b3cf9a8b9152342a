//! Command-line configuration
//!
//! Every knob comes from flags; there is no config file and no environment
//! lookup beyond `RUST_LOG`.

use clap::Parser;
use std::fmt;
use std::time::Duration;

/// Character set negotiated for every connection.
pub const CHARSET: &str = "utf8mb4";

/// Upper bound on a single connection attempt, matching the stock MySQL client default.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Run migration SQL against a Doris FE MySQL endpoint
#[derive(Parser, Debug, Clone)]
#[command(name = "doris-migrate")]
#[command(version, about = "Run migration SQL against a Doris FE MySQL endpoint", long_about = None)]
pub struct Args {
    /// FE MySQL host
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// FE MySQL port
    #[arg(long, default_value_t = 9030)]
    pub port: u16,

    /// MySQL user
    #[arg(long, default_value = "root")]
    pub user: String,

    /// MySQL password (if any)
    #[arg(long, default_value = "", hide_default_value = true)]
    pub password: String,

    /// Seconds to wait for FE MySQL to accept connections
    #[arg(long, value_name = "SECONDS", default_value_t = 60)]
    pub timeout: u64,

    /// Seconds between readiness attempts
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = 2,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,
}

impl Args {
    pub fn connection_params(&self) -> ConnectionParams {
        ConnectionParams {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.password.clone(),
            charset: CHARSET.to_string(),
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            timeout: Duration::from_secs(self.timeout),
            interval: Duration::from_secs(self.interval),
            connect_timeout: CONNECT_TIMEOUT,
        }
    }
}

/// Everything needed to open a connection to the FE.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub charset: String,
}

impl ConnectionParams {
    /// `host:port` as shown in progress output
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("charset", &self.charset)
            .finish()
    }
}

/// Timing for the readiness phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub timeout: Duration,
    pub interval: Duration,
    pub connect_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            interval: Duration::from_secs(2),
            connect_timeout: CONNECT_TIMEOUT,
        }
    }
}
