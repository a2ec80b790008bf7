// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};
use std::{future::Future, time::Duration};
use tokio::time::sleep;
use tracing::debug;

/// Settlement status polling: every 10s for 50 attempts.
pub const STATUS_POLL_INTERVAL_MS: u64 = 10_000;
pub const STATUS_POLL_MAX_ATTEMPTS: u32 = 50;

/// Asynchronous proof polling: every 3s for 100 attempts.
pub const PROOF_POLL_INTERVAL_MS: u64 = 3_000;
pub const PROOF_POLL_MAX_ATTEMPTS: u32 = 100;

/// Fixed-interval, bounded polling schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Delay between two consecutive checks in milliseconds
    pub interval_ms: u64,
    /// Maximum number of checks before giving up
    pub max_attempts: u32,
}

impl PollConfig {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval_ms: interval.as_millis() as u64,
            max_attempts,
        }
    }

    /// Schedule used while waiting for a gateway request to settle.
    pub fn settlement() -> Self {
        Self {
            interval_ms: STATUS_POLL_INTERVAL_MS,
            max_attempts: STATUS_POLL_MAX_ATTEMPTS,
        }
    }

    /// Schedule used while waiting for an asynchronously computed proof.
    pub fn proof() -> Self {
        Self {
            interval_ms: PROOF_POLL_INTERVAL_MS,
            max_attempts: PROOF_POLL_MAX_ATTEMPTS,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Upper bound of wall clock time spent sleeping between checks.
    pub fn budget(&self) -> Duration {
        self.interval() * self.max_attempts
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::settlement()
    }
}

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStep<T> {
    Ready(T),
    Pending,
}

/// How a poll loop ended without an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome<T> {
    Ready(T),
    /// No check reported ready within `max_attempts`.
    Exhausted { attempts: u32 },
    /// The cancel future resolved while waiting for the next check.
    Cancelled { attempts: u32 },
}

/// Runs `check` until it reports ready, fails, the attempt budget is spent or
/// `cancel` resolves.
///
/// Each iteration issues exactly one check and then suspends for the
/// configured interval, the last one included, so an exhausted loop takes the
/// full `budget()`. `cancel` is only raced against that suspension so an
/// in-flight check is never abandoned halfway.
///
/// # Arguments
/// * `config` - Interval and attempt budget
/// * `cancel` - Future resolving when the caller abandons the wait
/// * `check` - Async check, called with the 1-based attempt number
///
/// # Returns
/// * `Ok(PollOutcome)` - How the loop ended, `Err` if a check failed
pub async fn poll_until<T, E, F, Fut, C>(
    config: &PollConfig,
    cancel: C,
    mut check: F,
) -> Result<PollOutcome<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<PollStep<T>, E>>,
    C: Future<Output = ()>,
{
    tokio::pin!(cancel);

    for attempt in 1..=config.max_attempts {
        if let PollStep::Ready(value) = check(attempt).await? {
            return Ok(PollOutcome::Ready(value));
        }

        debug!(
            attempt,
            max_attempts = config.max_attempts,
            "not ready, next check in {}ms",
            config.interval_ms
        );

        tokio::select! {
            _ = sleep(config.interval()) => {}
            _ = &mut cancel => {
                return Ok(PollOutcome::Cancelled { attempts: attempt });
            }
        }
    }

    Ok(PollOutcome::Exhausted {
        attempts: config.max_attempts,
    })
}
