// ABOUTME: Integration tests for the bedtime calculator core
// ABOUTME: Validates the calculation invariants, ordering, and worked examples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SleepCycle Labs

#![allow(clippy::unwrap_used, clippy::expect_used)]

use sleepcycle_server::{BedtimeCalculator, ErrorCode};

#[test]
fn test_canonical_example_wake_0700_defaults() {
    let options = BedtimeCalculator.calculate("07:00", 15, 90, 4, 6).unwrap();

    assert_eq!(options.len(), 3);

    // 6 cycles: 6*90 + 15 = 555 min = 9h15m -> 07:00 - 9h15m = 21:45
    assert_eq!(options[0].cycles, 6);
    assert_eq!(options[0].bedtime, "21:45");
    assert_eq!(options[0].total_sleep_minutes, 555);
    assert!(options[0].recommended);

    // 5 cycles: 5*90 + 15 = 465 min = 7h45m -> 07:00 - 7h45m = 23:15
    assert_eq!(options[1].cycles, 5);
    assert_eq!(options[1].bedtime, "23:15");
    assert_eq!(options[1].total_sleep_minutes, 465);
    assert!(options[1].recommended);

    // 4 cycles: 4*90 + 15 = 375 min = 6h15m -> 07:00 - 6h15m = 00:45
    assert_eq!(options[2].cycles, 4);
    assert_eq!(options[2].bedtime, "00:45");
    assert_eq!(options[2].total_sleep_minutes, 375);
    assert!(!options[2].recommended);
}

#[test]
fn test_max_cycles_wraps_far_into_previous_day() {
    let options = BedtimeCalculator.calculate("10:00", 0, 90, 10, 10).unwrap();

    // 10 cycles * 90 = 900 min = 15 hours; 10:00 - 15h = 19:00 (previous day)
    assert_eq!(options[0].cycles, 10);
    assert_eq!(options[0].bedtime, "19:00");
    assert_eq!(options[0].total_sleep_minutes, 900);
}

#[test]
fn test_custom_cycle_length() {
    let options = BedtimeCalculator.calculate("06:00", 10, 85, 5, 5).unwrap();

    // 5 cycles * 85 = 425 min + 10 = 435 min = 7h15m; 06:00 - 7h15m = 22:45
    assert_eq!(options[0].bedtime, "22:45");
    assert_eq!(options[0].total_sleep_minutes, 435);
    assert!((options[0].total_sleep_hours - 7.25).abs() < 0.01);
}

#[test]
fn test_zero_sleep_latency() {
    let options = BedtimeCalculator.calculate("08:00", 0, 90, 6, 6).unwrap();

    // 6 cycles * 90 = 540 min = 9h exactly; 08:00 - 9h = 23:00
    assert_eq!(options[0].bedtime, "23:00");
    assert_eq!(options[0].total_sleep_minutes, 540);
}

#[test]
fn test_wake_time_at_noon() {
    let options = BedtimeCalculator.calculate("12:00", 20, 100, 6, 6).unwrap();

    // 6 cycles * 100 + 20 = 620 min = 10h20m; 12:00 - 10h20m = 01:40
    assert_eq!(options[0].bedtime, "01:40");
    assert_eq!(options[0].total_sleep_minutes, 620);
}

#[test]
fn test_option_count_and_coverage() {
    let options = BedtimeCalculator.calculate("07:00", 15, 90, 3, 7).unwrap();

    // One option per integer cycle count in [3, 7]
    assert_eq!(options.len(), 5);
    let mut cycles: Vec<u32> = options.iter().map(|o| o.cycles).collect();
    cycles.sort_unstable();
    assert_eq!(cycles, vec![3, 4, 5, 6, 7]);
}

#[test]
fn test_sorted_strictly_descending() {
    let options = BedtimeCalculator.calculate("07:00", 15, 90, 3, 7).unwrap();

    for pair in options.windows(2) {
        assert!(pair[0].cycles > pair[1].cycles);
    }
}

#[test]
fn test_arithmetic_invariant_holds_for_all_options() {
    let latency = 25;
    let cycle_length = 95;
    let options = BedtimeCalculator
        .calculate("09:15", latency, cycle_length, 1, 10)
        .unwrap();

    assert_eq!(options.len(), 10);
    for option in &options {
        assert_eq!(
            option.total_sleep_minutes,
            option.cycles * cycle_length + latency
        );
        assert_eq!(
            option.recommended,
            option.total_sleep_minutes >= BedtimeCalculator::RECOMMENDED_SLEEP_MINUTES
        );
        assert!(
            (option.total_sleep_hours - f64::from(option.total_sleep_minutes) / 60.0).abs()
                < f64::EPSILON
        );
    }
}

#[test]
fn test_error_kinds_for_invalid_inputs() {
    let calc = BedtimeCalculator;

    let err = calc.calculate("25:00", 15, 90, 4, 6).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidTimeFormat);

    let err = calc.calculate("07:00", 61, 90, 4, 6).unwrap_err();
    assert_eq!(err.code, ErrorCode::LatencyOutOfRange);

    let err = calc.calculate("07:00", 15, 59, 4, 6).unwrap_err();
    assert_eq!(err.code, ErrorCode::CycleLengthOutOfRange);

    let err = calc.calculate("07:00", 15, 90, 6, 4).unwrap_err();
    assert_eq!(err.code, ErrorCode::MinExceedsMax);
}

#[test]
fn test_bedtime_is_always_zero_padded() {
    // 07:00 - (4*90 + 15) = 00:45; both components need padding at times
    let options = BedtimeCalculator.calculate("7:0", 15, 90, 4, 4).unwrap();
    assert_eq!(options[0].bedtime, "00:45");
}
