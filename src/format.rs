//! Text rendering and parsing for [`TimeSpec`].
//!
//! The text form is the whole seconds as a decimal integer immediately followed
//! by the fractional seconds in fixed notation, without the fraction's leading
//! `0`. The fraction keeps 17 significant digits, enough for an `f64` to
//! survive a render/parse round trip. Negative times keep the stored layout:
//! `TimeSpec::new(-1, 0.5)` (half a second before zero) renders as
//! `"-1.50000000000000000"`. Width, fill, and alignment flags apply to the
//! whole text.

use crate::time_spec::TimeSpec;
use crate::types::ParseTimeSpecError;
use core::fmt::{self, Write};
use core::str::FromStr;
use heapless::String;

/// Capacity that fits the longest rendering of any [`TimeSpec`].
///
/// 20 characters of whole seconds, the point, and up to 340 fractional digits
/// for subnormal fractions.
pub const TEXT_CAPACITY: usize = 384;

/// Fixed-capacity rendering of a [`TimeSpec`].
pub type TimeText = String<TEXT_CAPACITY>;

const SIGNIFICANT_DIGITS: i32 = 17;

/// Writes `frac` (in `[0, 1)`) in fixed notation with [`SIGNIFICANT_DIGITS`].
fn write_fraction<W: Write>(out: &mut W, frac: f64) -> fmt::Result {
    // Scientific notation tells us where the first significant digit sits,
    // after rounding.
    let mut scientific: String<32> = String::new();
    write!(scientific, "{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, frac)?;
    let exponent: i32 = scientific
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0);

    // Zero reports exponent 0; give it the same width as any other fraction
    let decimals = (SIGNIFICANT_DIGITS - 1 - exponent).max(SIGNIFICANT_DIGITS) as usize;
    write!(out, "{:.*}", decimals, frac)
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut frac: TimeText = String::new();
        write_fraction(&mut frac, self.frac_secs())?;

        // Drop the "0" of "0.xxx"
        let digits = frac.get(1..).ok_or(fmt::Error)?;
        let mut text: TimeText = String::new();
        write!(text, "{}{}", self.full_secs(), digits)?;
        f.pad(&text)
    }
}

impl TimeSpec {
    /// Renders the time into a fixed-capacity string, without allocating.
    ///
    /// Same text as the [`Display`](core::fmt::Display) implementation.
    pub fn to_text(&self) -> TimeText {
        let mut text = TimeText::new();
        // TEXT_CAPACITY covers the longest possible rendering
        let _ = write!(text, "{}", self);
        text
    }
}

impl FromStr for TimeSpec {
    type Err = ParseTimeSpecError;

    /// Parses the rendered form: `[+-]<digits>[.<digits>]`.
    ///
    /// The fraction is added to the whole seconds as written, so `"-1.5"`
    /// parses to whole seconds -1 and fractional seconds 0.5.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseTimeSpecError::Empty);
        }

        let (whole_text, frac_text) = match s.find('.') {
            Some(point) => (&s[..point], Some(&s[point..])),
            None => (s, None),
        };

        let full_secs: i64 = whole_text
            .parse()
            .map_err(|_| ParseTimeSpecError::InvalidWholeSeconds)?;
        if full_secs == 0 && whole_text.starts_with('-') {
            return Err(ParseTimeSpecError::NegativeZero);
        }

        let frac_secs = match frac_text {
            Some(text) => parse_fraction(text)?,
            None => 0.0,
        };

        Ok(TimeSpec::new(full_secs, frac_secs))
    }
}

/// Parses `".<digits>"` into a value in `[0, 1]`.
fn parse_fraction(text: &str) -> Result<f64, ParseTimeSpecError> {
    let digits = &text[1..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseTimeSpecError::InvalidFractionalSeconds);
    }
    if digits.is_empty() {
        return Ok(0.0);
    }

    text.parse()
        .map_err(|_| ParseTimeSpecError::InvalidFractionalSeconds)
}
