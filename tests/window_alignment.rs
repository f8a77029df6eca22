use chrono::{TimeZone, Utc};
use chrono_tz::America::New_York;
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

use poly_tracker_wasm::domain::market_data::{Timeframe, Timestamp};
use poly_tracker_wasm::domain::window::{countdown_seconds, next_boundary, window_start};

fn et(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
    let dt = New_York.with_ymd_and_hms(y, mo, d, h, mi, s).single().expect("unambiguous ET time");
    Timestamp::from_millis(dt.with_timezone(&Utc).timestamp_millis() as u64)
}

#[test]
fn fifteen_minute_floors_to_quarter_hour() {
    let now = et(2023, 11, 14, 14, 37, 22);
    assert_eq!(window_start(now, Timeframe::FifteenMinutes), Some(et(2023, 11, 14, 14, 30, 0)));
}

#[test]
fn hourly_zeroes_minutes_and_seconds() {
    let now = et(2023, 11, 14, 17, 13, 20);
    assert_eq!(window_start(now, Timeframe::OneHour), Some(et(2023, 11, 14, 17, 0, 0)));
}

#[test]
fn four_hour_floors_to_multiple_of_four() {
    let now = et(2023, 11, 14, 17, 13, 20);
    assert_eq!(window_start(now, Timeframe::FourHours), Some(et(2023, 11, 14, 16, 0, 0)));
    let early = et(2023, 11, 14, 3, 59, 59);
    assert_eq!(window_start(early, Timeframe::FourHours), Some(et(2023, 11, 14, 0, 0, 0)));
}

#[test]
fn daily_boundary_anchored_at_8pm() {
    // 19:59:59 ET still belongs to yesterday's 20:00 window
    let before = et(2023, 11, 14, 19, 59, 59);
    assert_eq!(window_start(before, Timeframe::OneDay), Some(et(2023, 11, 13, 20, 0, 0)));
    // 20:00:00 ET starts today's window
    let after = et(2023, 11, 14, 20, 0, 0);
    assert_eq!(window_start(after, Timeframe::OneDay), Some(et(2023, 11, 14, 20, 0, 0)));
}

#[test]
fn window_start_idempotent_within_window() {
    let expected = et(2023, 11, 14, 14, 30, 0);
    for second in [0u32, 1, 59, 120, 899] {
        let now = Timestamp::from_millis(expected.value() + second as u64 * 1000);
        assert_eq!(window_start(now, Timeframe::FifteenMinutes), Some(expected));
    }
}

#[test]
fn boundary_crossing_changes_start_exactly_once() {
    // 14:59:50 .. 15:00:10 ET, one second at a time
    let base = et(2023, 11, 14, 14, 59, 50);
    let mut changes = 0;
    let mut previous = window_start(base, Timeframe::FifteenMinutes).unwrap();
    for second in 1..=20u64 {
        let now = Timestamp::from_millis(base.value() + second * 1000);
        let current = window_start(now, Timeframe::FifteenMinutes).unwrap();
        if current != previous {
            changes += 1;
            previous = current;
        }
    }
    assert_eq!(changes, 1);
    assert_eq!(previous, et(2023, 11, 14, 15, 0, 0));
}

#[test]
fn countdown_is_full_duration_at_rollover() {
    let boundaries = [
        (et(2023, 11, 14, 15, 0, 0), Timeframe::FifteenMinutes, 900),
        (et(2023, 11, 14, 15, 0, 0), Timeframe::OneHour, 3600),
        (et(2023, 11, 14, 16, 0, 0), Timeframe::FourHours, 14400),
        (et(2023, 11, 14, 20, 0, 0), Timeframe::OneDay, 86400),
    ];
    for (now, timeframe, expected) in boundaries {
        assert_eq!(countdown_seconds(now, timeframe), expected, "{}", timeframe.label());
    }
}

#[test]
fn countdown_floors_to_whole_seconds_and_clamps() {
    let boundary = et(2023, 11, 14, 15, 0, 0);
    // 1ms before the boundary: floored to zero, never negative
    let just_before = Timestamp::from_millis(boundary.value() - 1);
    assert_eq!(countdown_seconds(just_before, Timeframe::FifteenMinutes), 0);
    // 1.5s after the window opened
    let after = Timestamp::from_millis(boundary.value() + 1500);
    assert_eq!(countdown_seconds(after, Timeframe::FifteenMinutes), 898);
}

#[test]
fn next_boundary_is_monotone_over_a_day() {
    let base = et(2024, 3, 9, 12, 0, 0); // spans the 2024 spring-forward night
    for timeframe in Timeframe::iter() {
        let mut previous = next_boundary(base, timeframe).unwrap();
        for step in 1..=48u64 {
            let now = Timestamp::from_millis(base.value() + step * 1800 * 1000);
            let current = next_boundary(now, timeframe).unwrap();
            assert!(current >= previous, "{} went backwards", timeframe.label());
            previous = current;
        }
    }
}

#[quickcheck]
fn window_start_monotone_non_decreasing(offset: u32, delta: u32) -> bool {
    // Three-year span starting 2023-01-01 UTC, covering several DST shifts
    let base = 1_672_531_200_000u64;
    let now = Timestamp::from_millis(base + (offset as u64 % 94_608_000) * 1000);
    let later = Timestamp::from_millis(now.value() + delta as u64);
    Timeframe::iter().all(|timeframe| {
        match (window_start(now, timeframe), window_start(later, timeframe)) {
            (Some(a), Some(b)) => a <= b && a <= now,
            _ => false,
        }
    })
}
