//! Fixed-cadence tick source
//!
//! The host owns the real timer. A [`Ticker`] only answers "how many ticks
//! are due at `now`" so the host can sleep until [`Ticker::deadline`] and
//! skip scheduling entirely while disarmed.

use std::time::{Duration, Instant};
use tracing::trace;

/// Deadline tracker for a repeating tick
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Option<Instant>,
}

impl Ticker {
    /// Create a disarmed ticker
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    /// Tick interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule the first tick one interval after `now`, replacing any
    /// pending deadline.
    pub fn arm(&mut self, now: Instant) {
        self.next = Some(now + self.interval);
        trace!(interval_ms = self.interval.as_millis() as u64, "ticker armed");
    }

    /// Stop ticking
    pub fn disarm(&mut self) {
        if self.next.take().is_some() {
            trace!("ticker disarmed");
        }
    }

    /// True while a deadline is pending
    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Next tick deadline, `None` while disarmed
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Consume and return the number of ticks due at `now`.
    ///
    /// Deadlines advance in whole intervals from the arming time, so a late
    /// poll reports every missed tick without drifting the cadence.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(next) = self.next else {
            return 0;
        };
        if now < next {
            return 0;
        }

        let due = if self.interval.is_zero() {
            1
        } else {
            let behind = (now - next).as_nanos() / self.interval.as_nanos();
            u32::try_from(behind).unwrap_or(u32::MAX - 1) + 1
        };
        self.next = Some(next + self.interval * due);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_disarmed_never_ticks() {
        let mut t = Ticker::new(10 * MS);
        let now = Instant::now();
        assert_eq!(t.poll(now + 1000 * MS), 0);
        assert!(t.deadline().is_none());
    }

    #[test]
    fn test_cadence() {
        let mut t = Ticker::new(10 * MS);
        let t0 = Instant::now();
        t.arm(t0);
        assert_eq!(t.poll(t0 + 5 * MS), 0);
        assert_eq!(t.poll(t0 + 10 * MS), 1);
        assert_eq!(t.poll(t0 + 15 * MS), 0);
        // Late poll: ticks at 20, 30 and 40 are all due
        assert_eq!(t.poll(t0 + 45 * MS), 3);
        assert_eq!(t.deadline(), Some(t0 + 50 * MS));
    }

    #[test]
    fn test_rearm_resets_cadence() {
        let mut t = Ticker::new(10 * MS);
        let t0 = Instant::now();
        t.arm(t0);
        t.arm(t0 + 7 * MS);
        assert_eq!(t.poll(t0 + 10 * MS), 0);
        assert_eq!(t.poll(t0 + 17 * MS), 1);
    }

    #[test]
    fn test_disarm() {
        let mut t = Ticker::new(10 * MS);
        let t0 = Instant::now();
        t.arm(t0);
        t.disarm();
        assert!(!t.is_armed());
        assert_eq!(t.poll(t0 + 100 * MS), 0);
    }

    #[test]
    fn test_zero_interval() {
        let mut t = Ticker::new(Duration::ZERO);
        let t0 = Instant::now();
        t.arm(t0);
        assert_eq!(t.poll(t0), 1);
        assert_eq!(t.poll(t0), 1);
    }
}
