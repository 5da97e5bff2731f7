//! Error types for time construction, tick conversion and parsing.

/// Errors returned by tick-domain conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeSpecError {
    /// Tick rate is zero, negative, NaN or infinite.
    ///
    /// The absolute conversions (`from_ticks`, `to_ticks`) split the rate into
    /// an integer and a fractional part and also reject rates below 1 tick per
    /// second or beyond the `i64` range.
    InvalidTickRate,

    /// The resulting tick count does not fit in an `i64`.
    TickOverflow,

    /// The value cannot be represented by the target type.
    OutOfRange,
}

impl core::fmt::Display for TimeSpecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeSpecError::InvalidTickRate => {
                write!(f, "invalid tick rate (must be finite and positive)")
            }
            TimeSpecError::TickOverflow => {
                write!(f, "tick count overflows a 64-bit integer")
            }
            TimeSpecError::OutOfRange => {
                write!(f, "time value out of range for conversion")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeSpecError {}

/// Errors returned when parsing a [`TimeSpec`](crate::TimeSpec) from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseTimeSpecError {
    /// Input was empty.
    Empty,

    /// Whole-seconds part is not a signed decimal integer in `i64` range.
    InvalidWholeSeconds,

    /// Fractional part contains something other than decimal digits.
    InvalidFractionalSeconds,

    /// Whole-seconds part is `-0`.
    ///
    /// Rendering never produces it, and reading it literally would lose the sign.
    NegativeZero,
}

impl core::fmt::Display for ParseTimeSpecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseTimeSpecError::Empty => write!(f, "cannot parse time from empty string"),
            ParseTimeSpecError::InvalidWholeSeconds => {
                write!(f, "invalid whole seconds")
            }
            ParseTimeSpecError::InvalidFractionalSeconds => {
                write!(f, "invalid fractional seconds")
            }
            ParseTimeSpecError::NegativeZero => {
                write!(
                    f,
                    "negative zero whole seconds (negative times render as -N.frac with N >= 1)"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseTimeSpecError {}
