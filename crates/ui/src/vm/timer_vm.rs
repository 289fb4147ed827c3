use std::time::Duration;

use quiz_core::countdown::{TimeBand, display_seconds};

/// Snapshot of the running countdown as the playing screen shows it.
#[derive(Clone, Debug, PartialEq)]
pub struct TimerDisplayVm {
    /// Whole seconds left, rounded up.
    pub label: String,
    /// CSS hook for the current emphasis band.
    pub band_class: &'static str,
    /// Fraction of the round still left, for the progress ring.
    pub progress: f32,
}

#[must_use]
pub fn map_timer_display(remaining: Duration, duration: Duration) -> TimerDisplayVm {
    let progress = if duration.is_zero() {
        0.0
    } else {
        (remaining.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
    };
    TimerDisplayVm {
        label: display_seconds(remaining).to_string(),
        band_class: band_class(TimeBand::for_remaining(remaining)),
        progress,
    }
}

#[must_use]
pub const fn band_class(band: TimeBand) -> &'static str {
    match band {
        TimeBand::Normal => "timer-normal",
        TimeBand::Warning => "timer-warning",
        TimeBand::Critical => "timer-critical",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_round_maps_to_normal() {
        let display = map_timer_display(Duration::from_secs(6), Duration::from_secs(6));
        assert_eq!(display.label, "6");
        assert_eq!(display.band_class, "timer-normal");
        assert!((display.progress - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn low_time_maps_to_critical_and_rounds_up() {
        let display = map_timer_display(Duration::from_millis(1200), Duration::from_secs(6));
        assert_eq!(display.label, "2");
        assert_eq!(display.band_class, "timer-critical");
    }

    #[test]
    fn mid_band_is_warning() {
        let display = map_timer_display(Duration::from_millis(3000), Duration::from_secs(6));
        assert_eq!(display.band_class, "timer-warning");
    }

    #[test]
    fn expiry_maps_to_zero() {
        let display = map_timer_display(Duration::ZERO, Duration::from_secs(6));
        assert_eq!(display.label, "0");
        assert_eq!(display.progress, 0.0);
    }
}
