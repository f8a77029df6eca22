use chrono::{TimeZone, Utc};
use chrono_tz::America::New_York;

use poly_tracker_wasm::domain::links::{build_event_url, event_url_for_label};
use poly_tracker_wasm::domain::market_data::{Timeframe, Timestamp, Token};

fn et(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
    let dt = New_York.with_ymd_and_hms(y, mo, d, h, mi, s).single().expect("unambiguous ET time");
    Timestamp::from_millis(dt.with_timezone(&Utc).timestamp_millis() as u64)
}

#[test]
fn fifteen_minute_slug_embeds_unix_window_start() {
    let window_start = Timestamp::from_millis(1_700_000_000_000);
    let url = build_event_url(Token::Btc, Timeframe::FifteenMinutes, window_start).unwrap();
    assert_eq!(url, "https://polymarket.com/event/btc-updown-15m-1700000000");
}

#[test]
fn four_hour_slug_embeds_unix_window_start() {
    let window_start = Timestamp::from_millis(1_700_000_000_000);
    let url = build_event_url(Token::Eth, Timeframe::FourHours, window_start).unwrap();
    assert_eq!(url, "https://polymarket.com/event/eth-updown-4h-1700000000");
}

#[test]
fn hourly_slug_uses_reference_calendar_fields() {
    let window_start = et(2023, 11, 14, 17, 0, 0);
    let url = build_event_url(Token::Btc, Timeframe::OneHour, window_start).unwrap();
    assert_eq!(url, "https://polymarket.com/event/bitcoin-up-or-down-november-14-5pm-et");
}

#[test]
fn hourly_slug_twelve_hour_edges() {
    let midnight = et(2023, 11, 15, 0, 0, 0);
    let url = build_event_url(Token::Sol, Timeframe::OneHour, midnight).unwrap();
    assert_eq!(url, "https://polymarket.com/event/solana-up-or-down-november-15-12am-et");

    let noon = et(2023, 11, 15, 12, 0, 0);
    let url = build_event_url(Token::Sol, Timeframe::OneHour, noon).unwrap();
    assert_eq!(url, "https://polymarket.com/event/solana-up-or-down-november-15-12pm-et");
}

#[test]
fn daily_slug_targets_the_following_day() {
    let window_start = et(2023, 11, 14, 20, 0, 0);
    let url = build_event_url(Token::Eth, Timeframe::OneDay, window_start).unwrap();
    assert_eq!(url, "https://polymarket.com/event/ethereum-up-or-down-on-november-15");
}

#[test]
fn daily_slug_rolls_into_the_next_month() {
    let window_start = et(2023, 11, 30, 20, 0, 0);
    let url = build_event_url(Token::Btc, Timeframe::OneDay, window_start).unwrap();
    assert_eq!(url, "https://polymarket.com/event/bitcoin-up-or-down-on-december-1");
}

#[test]
fn label_variant_matches_typed_variant() {
    let window_start = Timestamp::from_millis(1_700_000_000_000);
    assert_eq!(
        event_url_for_label(Token::Btc, "15m", window_start),
        build_event_url(Token::Btc, Timeframe::FifteenMinutes, window_start)
    );
}

#[test]
fn unrecognized_label_yields_none() {
    let window_start = Timestamp::from_millis(1_700_000_000_000);
    assert_eq!(event_url_for_label(Token::Btc, "2h", window_start), None);
    assert_eq!(event_url_for_label(Token::Btc, "", window_start), None);
}
