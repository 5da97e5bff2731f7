//! Clock abstraction traits and interop with `core::time::Duration`.

use crate::ticks::round_half_up;
use crate::time_spec::TimeSpec;
use crate::types::TimeSpecError;
use core::time::Duration;

/// Trait for abstracting real-time clocks.
pub trait TimeSource {
    /// Returns the current time.
    fn now(&self) -> TimeSpec;
}

/// Trait for abstracting free-running device tick counters.
///
/// Implement this for a device's sample clock counter to read its timestamps as
/// [`TimeSpec`] values, and to compute the tick at which to schedule a command.
pub trait TickSource {
    /// Ticks per second of the counter.
    fn tick_rate(&self) -> f64;

    /// Current counter value.
    fn ticks(&self) -> i64;

    /// Returns the current counter value as a time.
    fn now(&self) -> Result<TimeSpec, TimeSpecError> {
        TimeSpec::from_ticks(self.ticks(), self.tick_rate())
    }

    /// Returns the counter value corresponding to `time`.
    fn ticks_at(&self, time: TimeSpec) -> Result<i64, TimeSpecError> {
        time.to_ticks(self.tick_rate())
    }
}

impl TryFrom<Duration> for TimeSpec {
    type Error = TimeSpecError;

    /// Fails with `OutOfRange` if the seconds exceed `i64::MAX`.
    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        let secs = i64::try_from(duration.as_secs()).map_err(|_| TimeSpecError::OutOfRange)?;
        Ok(TimeSpec::new(secs, duration.subsec_nanos() as f64 / 1e9))
    }
}

impl TryFrom<TimeSpec> for Duration {
    type Error = TimeSpecError;

    /// Rounds to the nearest nanosecond. Fails with `OutOfRange` for negative times.
    fn try_from(time: TimeSpec) -> Result<Self, Self::Error> {
        let mut secs = u64::try_from(time.full_secs()).map_err(|_| TimeSpecError::OutOfRange)?;
        let mut nanos = round_half_up(time.frac_secs() * 1e9) as u32;

        if nanos >= 1_000_000_000 {
            secs += 1;
            nanos -= 1_000_000_000;
        }

        Ok(Duration::new(secs, nanos))
    }
}
