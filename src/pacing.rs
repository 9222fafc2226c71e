//! Pacing policy between consecutive block placements.
//!
//! The structure generator sends one HTTP request per block. To avoid
//! overloading the server plugin it waits between consecutive placements.
//! The wait is a deliberate backpressure policy, modeled as the [`Pacing`]
//! trait so tests can swap in [`NoDelay`] without changing generator logic.

use std::thread;
use std::time::Duration;

use mockall::automock;

/// Default delay between consecutive block placements.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Backpressure policy applied between consecutive block placements.
#[automock]
pub trait Pacing {
    /// Block the calling thread until the next placement may be sent.
    fn pause(&self);
}

/// Fixed blocking delay between placements.
///
/// The delay is a design parameter, not proportional to structure size: it
/// applies uniformly regardless of block count and bounds the achievable
/// placement throughput on purpose.
#[derive(Clone, Copy, Debug)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// Create a policy pausing for `delay` between placements.
    pub fn new(delay: Duration) -> Self {
        FixedDelay { delay }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        FixedDelay::new(DEFAULT_DELAY)
    }
}

impl Pacing for FixedDelay {
    fn pause(&self) {
        thread::sleep(self.delay);
    }
}

/// No-op policy, for tests and trusted local servers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Pacing for NoDelay {
    fn pause(&self) {}
}
