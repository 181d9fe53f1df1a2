//! Bounded-retry polling against asynchronous DOM mutation.
//!
//! Every observation of mutated table state goes through one of these
//! primitives rather than a one-shot read: the widget renders asynchronously
//! relative to the action that triggered it, and a single read taken
//! mid-transition produces flaky false negatives.

use std::fmt::Display;
use std::future::Future;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::{Error, Result};

/// Re-evaluation interval used when callers don't pick their own.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Poll `condition` until it holds or `timeout_ms` elapses.
///
/// The condition is evaluated at least once, so a zero timeout still
/// performs one read. Caller errors from the condition abort immediately —
/// only a false result is retried.
pub async fn until<F, Fut>(
    what: &str,
    timeout_ms: u64,
    interval_ms: u64,
    mut condition: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let deadline = Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        if condition().await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            debug!("poll timed out: {}", what);
            return Err(Error::Timeout {
                what: what.to_string(),
                expected: "true".to_string(),
                last_observed: "false".to_string(),
                timeout_ms,
            });
        }
        tokio::time::sleep(Duration::from_millis(interval_ms)).await;
    }
}

/// Poll `read` until it yields `expected` or `timeout_ms` elapses.
///
/// On timeout the error reports both the expected and the last observed
/// value, e.g. "expected 0, last observed 3".
pub async fn until_value_eq<T, F, Fut>(
    what: &str,
    expected: &T,
    timeout_ms: u64,
    interval_ms: u64,
    mut read: F,
) -> Result<()>
where
    T: PartialEq + Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let deadline = Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        let observed = read().await?;
        if observed == *expected {
            return Ok(());
        }
        if Instant::now() >= deadline {
            debug!(
                "poll timed out: {} (expected {}, last observed {})",
                what, expected, observed
            );
            return Err(Error::Timeout {
                what: what.to_string(),
                expected: expected.to_string(),
                last_observed: observed.to_string(),
                timeout_ms,
            });
        }
        tokio::time::sleep(Duration::from_millis(interval_ms)).await;
    }
}
