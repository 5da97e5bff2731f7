//! The [`TimeSpec`] value type.
//!
//! Provides construction from whole and fractional seconds, the normalization
//! routine every other constructor and operator goes through, accessors, and
//! ordering.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// Real-valued seconds count that signifies immediate execution.
pub const ASAP: f64 = 0.0;

/// A clock-domain independent time value.
///
/// Holds a whole-seconds count and a fractional-seconds remainder. Depending on
/// usage it represents an absolute time, a relative time, or the difference
/// between two absolute times.
///
/// The fractional part is an `f64` in `[0, 1)`. Keeping it separate from the
/// whole seconds gives it enough precision to unambiguously identify a single
/// clock tick at rates up to several petahertz, independent of how large the
/// whole-seconds count grows. Conversion to and from a device's tick domain
/// lives in [`ticks`](crate::ticks).
///
/// # Examples
///
/// ```
/// use tick_timespec::TimeSpec;
///
/// let t = TimeSpec::new(5, 1.75);
/// assert_eq!(t.full_secs(), 6);
/// assert_eq!(t.frac_secs(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSpec {
    full_secs: i64,
    frac_secs: f64,
}

impl TimeSpec {
    /// Zero time.
    pub const ZERO: Self = Self::from_secs(0);

    /// Zero time, used by convention to request immediate execution.
    pub const ASAP: Self = Self::ZERO;

    /// Creates a time from whole seconds.
    #[inline]
    pub const fn from_secs(full_secs: i64) -> Self {
        Self {
            full_secs,
            frac_secs: 0.0,
        }
    }

    /// Creates a time from whole and fractional seconds.
    ///
    /// The integer part of `frac_secs` is carried into the whole seconds, and a
    /// negative remainder borrows one second, so the stored fraction always
    /// lies in `[0, 1)`. Only the final whole seconds saturate at the `i64`
    /// bounds. A NaN fraction contributes nothing.
    pub const fn new(full_secs: i64, frac_secs: f64) -> Self {
        Self::from_wide(full_secs as i128, frac_secs)
    }

    /// Normalizes with the whole seconds widened to `i128`, so a carry or an
    /// intermediate sum outside the `i64` range only saturates at the very end.
    pub(crate) const fn from_wide(full_secs: i128, frac_secs: f64) -> Self {
        let frac_int = frac_secs as i128;
        let mut whole = full_secs.saturating_add(frac_int);
        let mut frac = frac_secs - frac_int as f64;

        if frac < 0.0 {
            whole = whole.saturating_sub(1);
            frac += 1.0;
        }

        // A tiny negative remainder plus one rounds to exactly 1.0
        if frac >= 1.0 {
            whole = whole.saturating_add(1);
            frac = 0.0;
        }

        // -0.0, NaN, and whatever is left once frac_secs exceeds the i128 range
        if !(frac > 0.0 && frac < 1.0) {
            frac = 0.0;
        }

        let full_secs = if whole > i64::MAX as i128 {
            i64::MAX
        } else if whole < i64::MIN as i128 {
            i64::MIN
        } else {
            whole as i64
        };

        Self {
            full_secs,
            frac_secs: frac,
        }
    }

    /// Creates a time from a real-valued seconds count.
    #[inline]
    pub const fn from_real_secs(secs: f64) -> Self {
        Self::new(0, secs)
    }

    /// Returns the whole seconds.
    #[inline]
    pub const fn full_secs(&self) -> i64 {
        self.full_secs
    }

    /// Returns the fractional seconds, always in `[0, 1)`.
    #[inline]
    pub const fn frac_secs(&self) -> f64 {
        self.frac_secs
    }

    /// Returns the time as a real-valued seconds count.
    ///
    /// Lossy: once the whole seconds exceed 2^53 (or for absolute times in
    /// general) the fractional precision does not survive the addition.
    #[inline]
    pub fn real_secs(&self) -> f64 {
        self.full_secs as f64 + self.frac_secs
    }

    /// Returns true if this is the zero "execute immediately" time.
    #[inline]
    pub fn is_asap(&self) -> bool {
        *self == Self::ASAP
    }
}

impl From<i64> for TimeSpec {
    fn from(full_secs: i64) -> Self {
        TimeSpec::from_secs(full_secs)
    }
}

impl From<f64> for TimeSpec {
    fn from(secs: f64) -> Self {
        TimeSpec::from_real_secs(secs)
    }
}

impl From<TimeSpec> for f64 {
    fn from(time: TimeSpec) -> Self {
        time.real_secs()
    }
}

impl PartialEq for TimeSpec {
    fn eq(&self, other: &Self) -> bool {
        self.full_secs == other.full_secs && self.frac_secs == other.frac_secs
    }
}

impl Eq for TimeSpec {}

impl Ord for TimeSpec {
    fn cmp(&self, other: &Self) -> Ordering {
        self.full_secs
            .cmp(&other.full_secs)
            .then_with(|| self.frac_secs.total_cmp(&other.frac_secs))
    }
}

impl PartialOrd for TimeSpec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Normalization rules out NaN and -0.0, so the raw fraction bits agree with
// `==` and `total_cmp` on the fraction.
impl Hash for TimeSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_secs.hash(state);
        self.frac_secs.to_bits().hash(state);
    }
}
