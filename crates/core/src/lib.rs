#![forbid(unsafe_code)]

pub mod countdown;
pub mod error;
pub mod model;
pub mod time;

pub use countdown::{Countdown, CountdownError, ROUND_DURATION, Tick, TimeBand, display_seconds};
pub use error::Error;
pub use time::Clock;
