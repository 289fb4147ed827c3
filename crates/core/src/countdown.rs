use std::time::{Duration, Instant};

use thiserror::Error;

/// Fixed round length for the game.
pub const ROUND_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CountdownError {
    #[error("countdown duration must be positive")]
    ZeroDuration,
}

/// Result of a single scheduling tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub remaining: Duration,
    /// True exactly once, on the tick where the countdown first hits zero.
    pub just_expired: bool,
}

/// Wall-clock countdown measured against a monotonic clock.
///
/// The start timestamp is recorded on the first tick rather than at
/// construction, so setup cost does not eat into the round. The struct is
/// pure: the caller supplies `now` on every tick, which keeps the math
/// testable without sleeping.
#[derive(Clone, Debug)]
pub struct Countdown {
    duration: Duration,
    started_at: Option<Instant>,
    fired: bool,
}

impl Countdown {
    /// # Errors
    ///
    /// Returns `CountdownError::ZeroDuration` for a zero duration.
    pub fn new(duration: Duration) -> Result<Self, CountdownError> {
        if duration.is_zero() {
            return Err(CountdownError::ZeroDuration);
        }
        Ok(Self {
            duration,
            started_at: None,
            fired: false,
        })
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn has_expired(&self) -> bool {
        self.fired
    }

    /// Advance the countdown to `now` and report the remaining time.
    pub fn tick(&mut self, now: Instant) -> Tick {
        let started = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        let remaining = self.duration.saturating_sub(elapsed);
        let just_expired = remaining.is_zero() && !self.fired;
        if just_expired {
            self.fired = true;
        }
        Tick {
            remaining,
            just_expired,
        }
    }
}

/// Remaining time as shown to players: rounded up to whole seconds.
#[must_use]
pub fn display_seconds(remaining: Duration) -> u64 {
    remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
}

/// Presentation emphasis bands for the remaining time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeBand {
    Normal,
    Warning,
    Critical,
}

impl TimeBand {
    const WARNING_BELOW: Duration = Duration::from_millis(3500);
    const CRITICAL_BELOW: Duration = Duration::from_secs(2);

    #[must_use]
    pub fn for_remaining(remaining: Duration) -> Self {
        if remaining < Self::CRITICAL_BELOW {
            TimeBand::Critical
        } else if remaining < Self::WARNING_BELOW {
            TimeBand::Warning
        } else {
            TimeBand::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_duration() {
        let result = Countdown::new(Duration::ZERO);
        assert!(matches!(result, Err(CountdownError::ZeroDuration)));
    }

    #[test]
    fn first_tick_records_start_and_reports_full_duration() {
        let mut countdown = Countdown::new(ROUND_DURATION).unwrap();
        let start = Instant::now();

        let tick = countdown.tick(start);
        assert_eq!(tick.remaining, ROUND_DURATION);
        assert!(!tick.just_expired);
    }

    #[test]
    fn remaining_tracks_elapsed_time() {
        let mut countdown = Countdown::new(ROUND_DURATION).unwrap();
        let start = Instant::now();
        countdown.tick(start);

        let tick = countdown.tick(start + Duration::from_millis(2500));
        assert_eq!(tick.remaining, Duration::from_millis(3500));
        assert!(!tick.just_expired);
    }

    #[test]
    fn expiry_reports_zero_and_fires_exactly_once() {
        let mut countdown = Countdown::new(ROUND_DURATION).unwrap();
        let start = Instant::now();
        countdown.tick(start);

        let expired = countdown.tick(start + Duration::from_secs(7));
        assert_eq!(expired.remaining, Duration::ZERO);
        assert!(expired.just_expired);
        assert!(countdown.has_expired());

        let after = countdown.tick(start + Duration::from_secs(8));
        assert_eq!(after.remaining, Duration::ZERO);
        assert!(!after.just_expired);
    }

    #[test]
    fn does_not_fire_before_the_duration() {
        let mut countdown = Countdown::new(ROUND_DURATION).unwrap();
        let start = Instant::now();
        countdown.tick(start);

        let tick = countdown.tick(start + ROUND_DURATION - Duration::from_nanos(1));
        assert!(!tick.just_expired);
        assert!(!countdown.has_expired());
    }

    #[test]
    fn display_rounds_up_to_whole_seconds() {
        assert_eq!(display_seconds(Duration::from_secs(6)), 6);
        assert_eq!(display_seconds(Duration::from_millis(5900)), 6);
        assert_eq!(display_seconds(Duration::from_millis(3000)), 3);
        assert_eq!(display_seconds(Duration::from_millis(1)), 1);
        assert_eq!(display_seconds(Duration::ZERO), 0);
    }

    #[test]
    fn bands_follow_the_display_thresholds() {
        assert_eq!(
            TimeBand::for_remaining(Duration::from_millis(3500)),
            TimeBand::Normal
        );
        assert_eq!(
            TimeBand::for_remaining(Duration::from_millis(3499)),
            TimeBand::Warning
        );
        assert_eq!(
            TimeBand::for_remaining(Duration::from_secs(2)),
            TimeBand::Warning
        );
        assert_eq!(
            TimeBand::for_remaining(Duration::from_millis(1999)),
            TimeBand::Critical
        );
        assert_eq!(TimeBand::for_remaining(Duration::ZERO), TimeBand::Critical);
    }
}
