//! Conversion between [`TimeSpec`] and a device's tick domain.
//!
//! A tick rate is the number of ticks per second of some hardware clock, such
//! as an ADC sample clock. It may be non-integer (e.g. a clock derived through
//! a fractional divider).
//!
//! The absolute conversions [`TimeSpec::from_ticks`] and [`TimeSpec::to_ticks`]
//! split the rate into an integer part and a fractional remainder. Whole
//! seconds are handled with exact integer arithmetic against the integer part,
//! and only the small correction for the fractional remainder goes through
//! floating point. A plain `ticks as f64 / rate` would lose individual ticks
//! as soon as the tick count exceeds the 53-bit mantissa of an `f64`.

use crate::time_spec::TimeSpec;
use crate::types::TimeSpecError;

/// Rounds half up, toward positive infinity.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    libm::floor(x + 0.5)
}

/// Converts an already rounded `f64` into an `i64`, rejecting values outside
/// the `i64` range instead of saturating.
#[inline]
fn checked_i64(x: f64) -> Result<i64, TimeSpecError> {
    // 2^63 is exactly representable; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if x >= -LIMIT && x < LIMIT {
        Ok(x as i64)
    } else {
        Err(TimeSpecError::TickOverflow)
    }
}

/// Checks that a rate can be divided by.
#[inline]
fn validate_rate(tick_rate: f64) -> Result<f64, TimeSpecError> {
    if tick_rate.is_finite() && tick_rate > 0.0 {
        Ok(tick_rate)
    } else {
        Err(TimeSpecError::InvalidTickRate)
    }
}

/// Splits a tick rate into its integer part and fractional remainder.
///
/// The integer part must be at least one so it can serve as an integer divisor.
fn split_rate(tick_rate: f64) -> Result<(i64, f64), TimeSpecError> {
    let tick_rate = validate_rate(tick_rate)?;
    if tick_rate < 1.0 || tick_rate >= 9_223_372_036_854_775_808.0 {
        return Err(TimeSpecError::InvalidTickRate);
    }

    let rate_i = tick_rate as i64;
    let rate_f = tick_rate - rate_i as f64;
    Ok((rate_i, rate_f))
}

impl TimeSpec {
    /// Creates a time from whole seconds plus a sub-second tick count.
    ///
    /// `tick_count / tick_rate` is evaluated in floating point, so the tick
    /// count is expected to be on the order of one second's worth of ticks.
    /// Use [`from_ticks`](Self::from_ticks) for absolute tick counts.
    ///
    /// # Errors
    /// * `InvalidTickRate` - `tick_rate` is not finite and positive, or so
    ///   close to zero that `tick_count / tick_rate` is not finite
    pub fn from_secs_and_ticks(
        full_secs: i64,
        tick_count: i64,
        tick_rate: f64,
    ) -> Result<Self, TimeSpecError> {
        let tick_rate = validate_rate(tick_rate)?;
        let secs = tick_count as f64 / tick_rate;
        if !secs.is_finite() {
            return Err(TimeSpecError::InvalidTickRate);
        }
        Ok(TimeSpec::new(full_secs, secs))
    }

    /// Creates a time from an absolute 64-bit tick count.
    ///
    /// Exact to the tick across the whole `i64` range for megahertz-class
    /// rates, integer or not. Precision degrades only once
    /// `ticks / tick_rate * fract(tick_rate)` outgrows the `f64` mantissa,
    /// i.e. for very low non-integer rates with enormous tick counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_timespec::TimeSpec;
    ///
    /// let rate = 200e6;
    /// let t = TimeSpec::from_ticks(1_000_000_050, rate).unwrap();
    /// assert_eq!(t.full_secs(), 5);
    /// assert_eq!(t.to_ticks(rate).unwrap(), 1_000_000_050);
    /// ```
    ///
    /// # Errors
    /// * `InvalidTickRate` - `tick_rate` is not finite, below 1 tick per
    ///   second, or beyond the `i64` range
    pub fn from_ticks(ticks: i64, tick_rate: f64) -> Result<Self, TimeSpecError> {
        let (rate_i, rate_f) = split_rate(tick_rate)?;

        let secs_full = ticks / rate_i;
        let ticks_error = ticks - secs_full * rate_i;
        let ticks_frac = ticks_error as f64 - secs_full as f64 * rate_f;

        Ok(TimeSpec::new(secs_full, ticks_frac / tick_rate))
    }

    /// Converts the fractional seconds to a tick count.
    ///
    /// Only the sub-second part is converted; the whole seconds are ignored.
    ///
    /// # Errors
    /// * `InvalidTickRate` - `tick_rate` is not finite and positive
    /// * `TickOverflow` - the tick count does not fit in an `i64`
    pub fn get_tick_count(&self, tick_rate: f64) -> Result<i64, TimeSpecError> {
        let tick_rate = validate_rate(tick_rate)?;
        let ticks = self.frac_secs() * tick_rate;
        debug_assert!(ticks >= 0.0, "fractional seconds must be non-negative");

        checked_i64(round_half_up(ticks))
    }

    /// Converts the whole time value to an absolute 64-bit tick count.
    ///
    /// Inverse of [`from_ticks`](Self::from_ticks): within the precision range
    /// described there, a tick count converted to a time and back yields the
    /// same tick count.
    ///
    /// # Errors
    /// * `InvalidTickRate` - `tick_rate` is not finite, below 1 tick per
    ///   second, or beyond the `i64` range
    /// * `TickOverflow` - the tick count does not fit in an `i64`
    pub fn to_ticks(&self, tick_rate: f64) -> Result<i64, TimeSpecError> {
        let (rate_i, rate_f) = split_rate(tick_rate)?;

        // Borrowing for a negative fraction can push whole seconds times rate
        // past i64::MIN even when the final count fits, so widen first.
        let ticks_full = i128::from(self.full_secs()) * i128::from(rate_i);
        let ticks_error = self.full_secs() as f64 * rate_f;
        let ticks_frac = self.frac_secs() * tick_rate;
        let remainder = round_half_up(ticks_error + ticks_frac) as i128;

        ticks_full
            .checked_add(remainder)
            .and_then(|ticks| i64::try_from(ticks).ok())
            .ok_or(TimeSpecError::TickOverflow)
    }
}
