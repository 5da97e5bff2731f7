#![allow(dead_code)]

use tick_timespec::TimeSpec;

// Typical ADC sample clock
pub const SAMPLE_RATE: f64 = 200e6;

// Non-integer rate from a 61.44 MHz reference through a divide-by-27
pub const DERIVED_RATE: f64 = 61.44e6 / 27.0;

pub const RATES: [f64; 2] = [SAMPLE_RATE, DERIVED_RATE];

// Tick counts covering small, mid and near-2^62 magnitudes
pub const TICK_COUNTS: [i64; 8] = [
    0,
    1,
    -1,
    1_000_000_000,
    -1_000_000_000,
    (1 << 62) - 1,
    1 << 62,
    -(1 << 62),
];

pub fn is_normalized(t: TimeSpec) -> bool {
    t.frac_secs() >= 0.0 && t.frac_secs() < 1.0 && t.frac_secs().is_sign_positive()
}

pub fn approx_eq(a: TimeSpec, b: TimeSpec) -> bool {
    const EPSILON: f64 = 1e-9;
    let diff = a - b;
    match diff.full_secs() {
        0 => diff.frac_secs() < EPSILON,
        -1 => 1.0 - diff.frac_secs() < EPSILON,
        _ => false,
    }
}
