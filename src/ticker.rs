//! Fixed-cadence scheduler driving the simulation.

use std::time::Duration;

use tokio::time::{interval, Interval, MissedTickBehavior};

/// Yields ticks at a fixed period, counting them, until an optional maximum is reached.
///
/// Late ticks are delayed rather than bursted : a stalled host never runs several simulation steps at once.
pub struct TickDriver {
    interval: Interval,
    ticks: u64,
    max_ticks: Option<u64>,
}

impl TickDriver {
    pub fn new(period: Duration, max_ticks: Option<u64>) -> TickDriver {
        let mut ticks = interval(period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        TickDriver {
            interval: ticks,
            ticks: 0,
            max_ticks,
        }
    }

    /// Number of ticks yielded so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_exhausted(&self) -> bool {
        self.max_ticks.is_some_and(|max| self.ticks >= max)
    }

    /// Wait for the next tick and return its index, or [`None`] if the maximum number of ticks was reached. Cancel
    /// safe, as required by `tokio::select!`.
    pub async fn next_tick(&mut self) -> Option<u64> {
        if self.is_exhausted() {
            return None;
        }
        self.interval.tick().await;
        let tick = self.ticks;
        self.ticks += 1;
        Some(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_ticks() {
        let mut driver = TickDriver::new(Duration::from_millis(1), None);
        for expected in 0..5 {
            assert_eq!(driver.next_tick().await, Some(expected));
        }
        assert_eq!(driver.ticks(), 5);
        assert!(!driver.is_exhausted());
    }

    #[tokio::test]
    async fn stops_at_max_ticks() {
        let mut driver = TickDriver::new(Duration::from_millis(1), Some(3));
        assert_eq!(driver.next_tick().await, Some(0));
        assert_eq!(driver.next_tick().await, Some(1));
        assert_eq!(driver.next_tick().await, Some(2));
        assert!(driver.is_exhausted());
        assert_eq!(driver.next_tick().await, None);
        assert_eq!(driver.ticks(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_the_period() {
        let mut driver = TickDriver::new(Duration::from_millis(10), None);
        let start = tokio::time::Instant::now();
        for _ in 0..4 {
            driver.next_tick().await;
        }
        // The first tick completes immediately.
        assert_eq!(start.elapsed(), Duration::from_millis(30));
    }
}
