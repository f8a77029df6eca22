use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;

use crate::domain::market_data::{Timeframe, Timestamp};

/// All window-boundary math runs on this timezone's calendar fields,
/// regardless of where the process runs.
pub const REFERENCE_TZ: Tz = New_York;

/// Convert a unix-millis timestamp into reference-timezone calendar time.
pub fn to_reference_time(ts: Timestamp) -> Option<DateTime<Tz>> {
    let millis = i64::try_from(ts.value()).ok()?;
    let utc = Utc.timestamp_millis_opt(millis).single()?;
    Some(utc.with_timezone(&REFERENCE_TZ))
}

/// Start of the window currently in effect for `timeframe`.
///
/// Boundary rules, on reference-timezone fields:
/// - 15m: floor the minute to the lower multiple of 15, zero seconds
/// - 1h:  zero minutes and seconds
/// - 4h:  floor the hour to the lower multiple of 4, zero minutes/seconds
/// - 1d:  boundary at 20:00; before 20:00 it belongs to the previous day
pub fn window_start(now: Timestamp, timeframe: Timeframe) -> Option<Timestamp> {
    let et = to_reference_time(now)?;
    let date = et.date_naive();
    let (date, hour, minute) = match timeframe {
        Timeframe::FifteenMinutes => (date, et.hour(), et.minute() - et.minute() % 15),
        Timeframe::OneHour => (date, et.hour(), 0),
        Timeframe::FourHours => (date, et.hour() - et.hour() % 4, 0),
        Timeframe::OneDay => {
            if et.hour() < 20 {
                (date.pred_opt()?, 20, 0)
            } else {
                (date, 20, 0)
            }
        }
    };
    let naive = date.and_hms_opt(hour, minute, 0)?;
    let aligned = resolve_reference_local(naive, &et)?;
    let millis = u64::try_from(aligned.with_timezone(&Utc).timestamp_millis()).ok()?;
    Some(Timestamp::from_millis(millis))
}

/// Next boundary for `timeframe`: window start plus the full duration.
pub fn next_boundary(now: Timestamp, timeframe: Timeframe) -> Option<Timestamp> {
    let start = window_start(now, timeframe)?;
    Some(Timestamp::from_millis(start.value() + timeframe.duration_ms()))
}

/// Whole seconds until the next boundary, clamped to zero.
///
/// At the rollover instant this is exactly the full window duration.
pub fn countdown_seconds(now: Timestamp, timeframe: Timeframe) -> u64 {
    match next_boundary(now, timeframe) {
        Some(next) => next.value().saturating_sub(now.value()) / 1000,
        None => 0,
    }
}

/// Resolve a floored local time back to an instant.
///
/// During the autumn fall-back the local time is ambiguous; we pick the
/// occurrence that shares the current instant's UTC offset so window starts
/// stay monotone as "now" advances through the repeated hour. Spring-forward
/// gaps cannot be produced by flooring a real instant's fields.
fn resolve_reference_local(naive: NaiveDateTime, current: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    match REFERENCE_TZ.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, latest) => {
            if latest.offset().fix() == current.offset().fix() {
                Some(latest)
            } else {
                Some(earliest)
            }
        }
        LocalResult::None => None,
    }
}
