//! Integration tests for TimeSpec construction, arithmetic, ordering and text

mod common;
use common::*;

use std::collections::HashSet;
use tick_timespec::{ASAP, ParseTimeSpecError, TimeSpec};

#[test]
fn whole_seconds_constructor_has_zero_fraction() {
    let t = TimeSpec::from_secs(-42);
    assert_eq!(t.full_secs(), -42);
    assert_eq!(t.frac_secs(), 0.0);
}

#[test]
fn new_normalizes_fraction_above_one() {
    let t = TimeSpec::new(5, 1.75);
    assert_eq!(t.full_secs(), 6);
    assert_eq!(t.frac_secs(), 0.75);
}

#[test]
fn new_normalizes_negative_fraction() {
    let t = TimeSpec::new(5, -1.75);
    assert_eq!(t.full_secs(), 3);
    assert_eq!(t.frac_secs(), 0.25);
    assert!(is_normalized(t));
}

#[test]
fn real_seconds_constructor() {
    let t = TimeSpec::from_real_secs(-0.5);
    assert_eq!(t.full_secs(), -1);
    assert_eq!(t.frac_secs(), 0.5);
    assert_eq!(t.real_secs(), -0.5);
}

#[test]
fn whole_seconds_and_ticks_constructor() {
    let t = TimeSpec::from_secs_and_ticks(10, 50_000_000, SAMPLE_RATE).unwrap();
    assert_eq!(t, TimeSpec::new(10, 0.25));

    // More than one second of ticks carries
    let t = TimeSpec::from_secs_and_ticks(10, 250_000_000, SAMPLE_RATE).unwrap();
    assert_eq!(t, TimeSpec::new(11, 0.25));
}

#[test]
fn chained_addition_carries_twice() {
    let t = TimeSpec::new(0, 0.0) + TimeSpec::new(0, 0.9) + TimeSpec::new(0, 0.9);
    assert_eq!(t.full_secs(), 1);
    assert!((t.frac_secs() - 0.8).abs() < 1e-12);
}

#[test]
fn additive_identity() {
    for t in [
        TimeSpec::new(5, 0.25),
        TimeSpec::new(-3, 0.125),
        TimeSpec::from_real_secs(1234.5678),
    ] {
        assert_eq!(t + TimeSpec::ZERO, t);
        assert_eq!(t - TimeSpec::ZERO, t);
        assert_eq!(t + 0.0, t);
    }
}

#[test]
fn add_then_subtract_restores_value() {
    let a = TimeSpec::new(1_700_000_000, 0.123_456_789);
    let b = TimeSpec::new(3, 0.987_654_321);
    assert!(approx_eq((a + b) - b, a));
    assert!(approx_eq((a - b) + b, a));
}

#[test]
fn real_seconds_arithmetic_is_normalized() {
    let t = TimeSpec::new(2, 0.5) - 3.75;
    assert_eq!(t, TimeSpec::new(-2, 0.75));
    assert!(is_normalized(t));

    let t = TimeSpec::new(-2, 0.75) + 3.75;
    assert_eq!(t, TimeSpec::new(2, 0.5));
}

#[test]
fn ordering_is_total() {
    let times = [
        TimeSpec::new(-1, 0.5),
        TimeSpec::ZERO,
        TimeSpec::new(0, 0.5),
        TimeSpec::new(1, 0.0),
        TimeSpec::new(1, 0.25),
    ];

    for (i, a) in times.iter().enumerate() {
        for (j, b) in times.iter().enumerate() {
            let relations = [a < b, a == b, a > b];
            assert_eq!(relations.iter().filter(|r| **r).count(), 1);
            assert_eq!(a <= b, a < b || a == b);
            assert_eq!(a >= b, a > b || a == b);
            assert_eq!(a < b, i < j);
        }
    }
}

#[test]
fn sorting_and_min_max() {
    let mut times = vec![
        TimeSpec::new(3, 0.1),
        TimeSpec::new(-2, 0.9),
        TimeSpec::new(3, 0.05),
    ];
    times.sort();
    assert_eq!(
        times,
        vec![
            TimeSpec::new(-2, 0.9),
            TimeSpec::new(3, 0.05),
            TimeSpec::new(3, 0.1),
        ]
    );
    assert_eq!(times.iter().max(), Some(&TimeSpec::new(3, 0.1)));
}

#[test]
fn equal_values_hash_equal() {
    let mut set = HashSet::new();
    set.insert(TimeSpec::new(5, 0.25));
    set.insert(TimeSpec::new(4, 1.25));
    set.insert(TimeSpec::new(5, -0.0) + 0.25);
    assert_eq!(set.len(), 1);
}

#[test]
fn asap_marks_zero_time() {
    assert!(TimeSpec::from(ASAP).is_asap());
    assert!((TimeSpec::new(1, 0.5) - 1.5).is_asap());
    assert!(!TimeSpec::from_secs(1).is_asap());
}

#[test]
fn renders_whole_and_fraction_as_one_number() {
    assert_eq!(TimeSpec::new(5, 0.25).to_string(), "5.25000000000000000");
    assert_eq!(TimeSpec::from_secs(7).to_string(), "7.00000000000000000");
    assert!(TimeSpec::new(5, 0.25).to_string().starts_with("5.25"));
}

#[test]
fn renders_negative_time_in_stored_layout() {
    let t = TimeSpec::from_real_secs(-0.5);
    assert_eq!(t.full_secs(), -1);
    assert_eq!(t.to_string(), "-1.50000000000000000");
}

#[test]
fn renders_without_exponent() {
    // 2^-40 is exact in binary, so every rendered digit is determined
    let text = TimeSpec::new(0, 2f64.powi(-40)).to_string();
    assert_eq!(text, "0.00000000000090949470177292824");
    assert!(!text.contains('e'));
}

#[test]
fn honours_width_and_alignment() {
    let t = TimeSpec::new(5, 0.25);
    assert_eq!(format!("{:>25}", t), "      5.25000000000000000");
    assert_eq!(format!("{:<22}|", t), "5.25000000000000000   |");
    assert_eq!(format!("{:*^23}", t), "**5.25000000000000000**");
    assert_eq!(format!("{:5}", t), t.to_string());
}

#[test]
fn to_text_matches_display() {
    let t = TimeSpec::new(1_700_000_000, 0.333_333_333_333);
    assert_eq!(t.to_text().as_str(), t.to_string());
}

#[test]
fn parses_rendered_text_exactly() {
    for t in [
        TimeSpec::new(5, 0.25),
        TimeSpec::new(-1, 0.5),
        TimeSpec::new(1_700_000_000, 0.1),
        TimeSpec::new(-98_765, 2.0 / 3.0),
        TimeSpec::new(0, 1e-300),
        TimeSpec::new(i64::MAX, 0.999_999_999_999_999_9),
        TimeSpec::from_secs(i64::MIN),
    ] {
        let parsed: TimeSpec = t.to_string().parse().unwrap();
        assert_eq!(parsed, t);
    }
}

#[test]
fn parses_short_forms() {
    assert_eq!("5".parse::<TimeSpec>(), Ok(TimeSpec::from_secs(5)));
    assert_eq!("5.".parse::<TimeSpec>(), Ok(TimeSpec::from_secs(5)));
    assert_eq!("+5.5".parse::<TimeSpec>(), Ok(TimeSpec::new(5, 0.5)));
    assert_eq!("-3.25".parse::<TimeSpec>(), Ok(TimeSpec::new(-3, 0.25)));
}

#[test]
fn rejects_malformed_text() {
    assert_eq!("".parse::<TimeSpec>(), Err(ParseTimeSpecError::Empty));
    assert_eq!(
        ".5".parse::<TimeSpec>(),
        Err(ParseTimeSpecError::InvalidWholeSeconds)
    );
    assert_eq!(
        " 5.5".parse::<TimeSpec>(),
        Err(ParseTimeSpecError::InvalidWholeSeconds)
    );
    assert_eq!(
        "99999999999999999999.0".parse::<TimeSpec>(),
        Err(ParseTimeSpecError::InvalidWholeSeconds)
    );
    assert_eq!(
        "5.5e3".parse::<TimeSpec>(),
        Err(ParseTimeSpecError::InvalidFractionalSeconds)
    );
    assert_eq!(
        "5.5.5".parse::<TimeSpec>(),
        Err(ParseTimeSpecError::InvalidFractionalSeconds)
    );
    assert_eq!(
        "-0.5".parse::<TimeSpec>(),
        Err(ParseTimeSpecError::NegativeZero)
    );
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        ParseTimeSpecError::Empty.to_string(),
        "cannot parse time from empty string"
    );
    assert!(ParseTimeSpecError::NegativeZero.to_string().contains("negative zero"));
}
