//! Time sources for computed labels.
//!
//! Date, time and timer labels read "now" through a [`Clock`] owned by the
//! formatter instance. [`SystemClock`] is used in production; [`ManualClock`]
//! gives tests a clock that only moves when told to.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp, Zoned};

/// A source of the current instant, in a time zone.
pub trait Clock: Send + Sync {
    fn now(&self) -> Zoned;
}

/// Wall clock in the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// Hand-driven clock with millisecond resolution.
///
/// Clones share the same instant, so a test can keep one handle and give the
/// other to a formatter.
///
/// ```
/// use jiff::SignedDuration;
/// use lonker::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::at_millis(0);
/// let handle = clock.clone();
/// handle.advance(SignedDuration::from_millis(250));
/// assert_eq!(clock.now().timestamp().as_millisecond(), 250);
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
    tz: TimeZone,
}

impl ManualClock {
    /// A clock frozen at `millis` milliseconds past the Unix epoch, in UTC.
    pub fn at_millis(millis: i64) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(millis)),
            tz: TimeZone::UTC,
        }
    }

    /// A clock frozen at `ts`, in UTC.
    pub fn at(ts: Timestamp) -> Self {
        Self::at_millis(ts.as_millisecond())
    }

    /// Move the clock forward (or back, for negative durations).
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&self, by: SignedDuration) {
        self.millis.fetch_add(by.as_millis() as i64, Ordering::SeqCst);
    }

    /// Jump to `ts`.
    pub fn set(&self, ts: Timestamp) {
        self.millis.store(ts.as_millisecond(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Zoned {
        let millis = self.millis.load(Ordering::SeqCst);
        // Out-of-range instants pin to the epoch.
        let ts = Timestamp::from_millisecond(millis).unwrap_or(Timestamp::UNIX_EPOCH);
        ts.to_zoned(self.tz.clone())
    }
}
