//! Fake clock returning a fixed time.

use chrono::{DateTime, TimeZone, Utc};

use crate::ports::clock::Clock;

/// Fake clock pinned to one instant.
pub struct FakeClock {
    fixed: DateTime<Utc>,
}

impl FakeClock {
    /// Creates a clock pinned to the given instant.
    #[must_use]
    pub fn new(fixed: DateTime<Utc>) -> Self {
        Self { fixed }
    }

    /// Creates a clock pinned to 2024-06-15 10:30:00 UTC, a convenient
    /// default for filename assertions.
    #[must_use]
    pub fn default_instant() -> Self {
        Self::new(Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap())
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        self.fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_returns_the_pinned_instant() {
        let clock = FakeClock::default_instant();
        assert_eq!(clock.now().to_rfc3339(), "2024-06-15T10:30:00+00:00");
        assert_eq!(clock.now(), clock.now());
    }
}
