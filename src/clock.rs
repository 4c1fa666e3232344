use chrono::{DateTime, Utc};

/// Wall-clock capability injected into the [`Engine`](crate::Engine).
///
/// Result timestamps and conflict `created_at` fields come from here rather
/// than a global clock, so tests can pin time exactly. Execution timing
/// still uses the monotonic `std::time::Instant` and is not part of this
/// trait.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The default clock, reading the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
