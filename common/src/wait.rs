//! Fixed-interval readiness polling
//!
//! Repeatedly checks a dependency until it answers or a deadline passes.
//! Every failure is treated the same way: log it, sleep, try again.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

/// Error returned when a dependency never became ready.
#[derive(Debug, Error)]
pub enum WaitError {
    #[error("{label} not ready after {elapsed:?} ({attempts} attempts)")]
    TimedOut {
        label: String,
        elapsed: Duration,
        attempts: u32,
    },
}

/// Poll `check` every `interval` until it succeeds or `timeout` has elapsed.
///
/// A new attempt is only started while the elapsed time is below `timeout`,
/// so at most `ceil(timeout / interval)` attempts are made and a failure is
/// reported no earlier than `timeout`. Returns the number of attempts made.
///
/// # Example
/// ```ignore
/// let attempts = wait_until_ready("FE MySQL", timeout, interval, || try_connect(&params)).await?;
/// ```
pub async fn wait_until_ready<F, Fut, E>(
    label: &str,
    timeout: Duration,
    interval: Duration,
    mut check: F,
) -> Result<u32, WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Display,
{
    let start = Instant::now();
    let mut attempts = 0u32;

    while start.elapsed() < timeout {
        attempts += 1;
        match check().await {
            Ok(()) => {
                debug!(
                    attempts,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "{} ready",
                    label
                );
                return Ok(attempts);
            }
            Err(e) => {
                info!("Waiting for {} to be ready: {}", label, e);
                sleep(interval).await;
            }
        }
    }

    Err(WaitError::TimedOut {
        label: label.to_string(),
        elapsed: start.elapsed(),
        attempts,
    })
}
