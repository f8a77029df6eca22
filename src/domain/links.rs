use std::str::FromStr;

use chrono::{Datelike, Timelike};

use crate::domain::market_data::{Timeframe, Timestamp, Token};
use crate::domain::window::to_reference_time;

pub const EVENT_BASE_URL: &str = "https://polymarket.com/event";

const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

/// Deterministic deep link to the prediction-market event page for the
/// window starting at `window_start`. Pure string construction.
///
/// - 15m/4h markets key on the window's unix start time
/// - 1h markets key on reference-timezone calendar fields
/// - 1d markets resolve the *following* calendar day
pub fn build_event_url(token: Token, timeframe: Timeframe, window_start: Timestamp) -> Option<String> {
    match timeframe {
        Timeframe::FifteenMinutes | Timeframe::FourHours => Some(format!(
            "{}/{}-updown-{}-{}",
            EVENT_BASE_URL,
            token.ticker().to_lowercase(),
            timeframe.label(),
            window_start.as_unix_seconds()
        )),
        Timeframe::OneHour => {
            let et = to_reference_time(window_start)?;
            let hour = et.hour();
            let meridiem = if hour >= 12 { "pm" } else { "am" };
            let hour12 = if hour % 12 == 0 { 12 } else { hour % 12 };
            Some(format!(
                "{}/{}-up-or-down-{}-{}-{}{}-et",
                EVENT_BASE_URL,
                token.asset_name(),
                MONTH_NAMES[et.month0() as usize],
                et.day(),
                hour12,
                meridiem
            ))
        }
        Timeframe::OneDay => {
            let et = to_reference_time(window_start)?;
            let market_day = et.date_naive().succ_opt()?;
            Some(format!(
                "{}/{}-up-or-down-on-{}-{}",
                EVENT_BASE_URL,
                token.asset_name(),
                MONTH_NAMES[market_day.month0() as usize],
                market_day.day()
            ))
        }
    }
}

/// Label-keyed variant for callers holding a raw duration label.
/// An unrecognized label yields `None`, never a panic.
pub fn event_url_for_label(token: Token, label: &str, window_start: Timestamp) -> Option<String> {
    let timeframe = Timeframe::from_str(label).ok()?;
    build_event_url(token, timeframe, window_start)
}
