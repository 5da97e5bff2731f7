//! Arithmetic operators for [`TimeSpec`].
//!
//! Every operator combines whole and fractional seconds separately and then
//! renormalizes with whole seconds widened to `i128`, saturating only the
//! final result.

use crate::time_spec::TimeSpec;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Splits real seconds into truncated whole seconds and the remainder.
///
/// Whole seconds are widened so values beyond the `i64` range still combine
/// correctly with a left-hand side of opposite sign.
#[inline]
fn split_real(secs: f64) -> (i128, f64) {
    let full = libm::trunc(secs);
    (full as i128, secs - full)
}

impl Add for TimeSpec {
    type Output = TimeSpec;

    fn add(self, rhs: TimeSpec) -> TimeSpec {
        TimeSpec::from_wide(
            i128::from(self.full_secs()) + i128::from(rhs.full_secs()),
            self.frac_secs() + rhs.frac_secs(),
        )
    }
}

impl Sub for TimeSpec {
    type Output = TimeSpec;

    fn sub(self, rhs: TimeSpec) -> TimeSpec {
        TimeSpec::from_wide(
            i128::from(self.full_secs()) - i128::from(rhs.full_secs()),
            self.frac_secs() - rhs.frac_secs(),
        )
    }
}

impl Add<f64> for TimeSpec {
    type Output = TimeSpec;

    fn add(self, rhs: f64) -> TimeSpec {
        let (full, frac) = split_real(rhs);
        TimeSpec::from_wide(
            i128::from(self.full_secs()).saturating_add(full),
            self.frac_secs() + frac,
        )
    }
}

impl Sub<f64> for TimeSpec {
    type Output = TimeSpec;

    fn sub(self, rhs: f64) -> TimeSpec {
        let (full, frac) = split_real(rhs);
        TimeSpec::from_wide(
            i128::from(self.full_secs()).saturating_sub(full),
            self.frac_secs() - frac,
        )
    }
}

impl AddAssign for TimeSpec {
    fn add_assign(&mut self, rhs: TimeSpec) {
        *self = *self + rhs;
    }
}

impl SubAssign for TimeSpec {
    fn sub_assign(&mut self, rhs: TimeSpec) {
        *self = *self - rhs;
    }
}

impl AddAssign<f64> for TimeSpec {
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl SubAssign<f64> for TimeSpec {
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

impl Neg for TimeSpec {
    type Output = TimeSpec;

    fn neg(self) -> TimeSpec {
        TimeSpec::from_wide(-i128::from(self.full_secs()), -self.frac_secs())
    }
}

impl Sum for TimeSpec {
    fn sum<I: Iterator<Item = TimeSpec>>(iter: I) -> TimeSpec {
        iter.fold(TimeSpec::ZERO, |total, time| total + time)
    }
}

impl<'a> Sum<&'a TimeSpec> for TimeSpec {
    fn sum<I: Iterator<Item = &'a TimeSpec>>(iter: I) -> TimeSpec {
        iter.copied().sum()
    }
}
