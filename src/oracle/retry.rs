//! Bounded retries.
use std::time::Duration;

use log::warn;

use crate::error::Error;

/// Something that can wait.
///
/// Adapters sleep through this trait so that tests can run without delay.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSleep;

impl Sleeper for NoSleep {
    fn sleep(&self, _: Duration) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl RetryPolicy {
    /// A policy doing at least one attempt.
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    /// Call `f` (with the 1-based attempt number) until it succeeds or attempts are exhausted.
    ///
    /// The backoff is slept between attempts, not after the last one.
    /// The error of the last attempt is returned.
    pub fn run<T, F>(&self, sleeper: &dyn Sleeper, mut f: F) -> Result<T, Error>
    where
        F: FnMut(u32) -> Result<T, Error>,
    {
        let mut attempt = 1;
        loop {
            match f(attempt) {
                Ok(v) => return Ok(v),
                Err(e) if attempt < self.max_attempts => {
                    warn!(
                        "attempt {}/{} failed: {}. Retrying in {:?}",
                        attempt, self.max_attempts, e, self.backoff
                    );
                    sleeper.sleep(self.backoff);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(2))
    }
}
