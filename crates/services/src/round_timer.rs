use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::debug;

use quiz_core::{Countdown, CountdownError};

/// Delay between scheduling ticks. Short enough that the displayed value
/// moves smoothly, long enough to stay cooperative.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Cancellation handle for a running [`RoundTimer`].
#[derive(Clone, Debug)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Drives a [`Countdown`] on the runtime clock.
///
/// Each tick republishes the remaining time through `on_tick`; when the
/// countdown hits zero the driver publishes a final zero, invokes
/// `on_expired` exactly once, and stops. The cancel flag is checked before a
/// tick's effects apply, so a cancel racing a pending tick suppresses both
/// the publish and the expiry callback.
pub struct RoundTimer {
    countdown: Countdown,
    cancelled: Arc<AtomicBool>,
}

impl RoundTimer {
    /// # Errors
    ///
    /// Returns `CountdownError::ZeroDuration` for a zero duration.
    pub fn new(duration: Duration) -> Result<Self, CountdownError> {
        Ok(Self {
            countdown: Countdown::new(duration)?,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    #[must_use]
    pub fn handle(&self) -> TimerHandle {
        TimerHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Run the countdown to expiry or cancellation.
    pub async fn run(mut self, mut on_tick: impl FnMut(Duration), on_expired: impl FnOnce()) {
        loop {
            let tick = self.countdown.tick(Instant::now());
            if self.cancelled.load(Ordering::Acquire) {
                debug!("round timer cancelled");
                return;
            }
            on_tick(tick.remaining);
            if tick.just_expired {
                debug!("round timer expired");
                on_expired();
                return;
            }
            sleep(TICK_INTERVAL).await;
        }
    }
}
