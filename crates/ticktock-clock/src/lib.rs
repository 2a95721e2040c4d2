//! Remaining/elapsed time against a target date, as the two 2-digit fields the
//! widget shows.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
pub use chrono_tz::Tz;

/// Format of the persisted target date.
pub const TARGET_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Zones offered by the timezone menu.
pub const COMMON_TIMEZONES: [&str; 6] = [
    "Asia/Shanghai",
    "Asia/Tokyo",
    "America/New_York",
    "Europe/London",
    "Australia/Sydney",
    "UTC",
];

/// Zone used when the configured one does not resolve.
pub const DEFAULT_ZONE: Tz = chrono_tz::Asia::Shanghai;

/// Above this many seconds the fields switch from MM:SS to HH:MM.
const HOURS_THRESHOLD: i64 = 3600;

const FIELD_CAP: i64 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Target still ahead.
    Countdown,
    /// Target reached or passed; counting up.
    Elapsed,
}

/// The two displayed values and which way the clock is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub first: String,
    pub second: String,
    pub direction: Direction,
}

// ──────────────────────────────────────────────
// Parsing
// ──────────────────────────────────────────────

/// The fixed date used whenever the configured target does not parse.
pub fn fallback_target() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Parses `YYYY-MM-DD HH:MM:SS`, falling back to 2026-01-01 00:00:00.
pub fn parse_target(target: &str) -> NaiveDateTime {
    match NaiveDateTime::parse_from_str(target.trim(), TARGET_FORMAT) {
        Ok(dt) => dt,
        Err(e) => {
            log::debug!("target date {:?} invalid ({}), using fallback", target, e);
            fallback_target()
        }
    }
}

/// Resolves an IANA zone name.
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.parse::<Tz>().ok()
}

/// A name is selectable from the menu only if it is in the fixed list and
/// resolves to a real zone.
pub fn is_selectable(name: &str) -> Option<Tz> {
    if !COMMON_TIMEZONES.contains(&name) {
        return None;
    }
    parse_timezone(name)
}

/// Interprets a wall-clock target in `tz`. Ambiguous times take the earlier
/// instant; times skipped by a DST gap are read as UTC.
pub fn localize(target: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&target).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => {
            log::debug!("{} does not exist in {}, reading as UTC", target, tz.name());
            Utc.from_utc_datetime(&target)
        }
    }
}

// ──────────────────────────────────────────────
// Formatting
// ──────────────────────────────────────────────

/// Splits a non-negative whole-second distance into the two displayed values.
///
/// More than an hour gives hours and minutes (capped at 99:99), otherwise
/// minutes and seconds.
pub fn split_seconds(total: i64) -> (i64, i64) {
    let total = total.max(0);
    if total > HOURS_THRESHOLD {
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        if hours > FIELD_CAP {
            (FIELD_CAP, FIELD_CAP)
        } else {
            (hours, minutes)
        }
    } else {
        (total / 60, total % 60)
    }
}

/// Reads the clock for `target` (wall time in `tz`) at instant `now`.
pub fn read(target: &str, tz: Tz, now: DateTime<Utc>) -> Reading {
    let target = localize(parse_target(target), tz);
    let (direction, diff) = if now < target {
        (Direction::Countdown, target - now)
    } else {
        (Direction::Elapsed, now - target)
    };
    let (first, second) = split_seconds(diff.num_seconds());
    Reading {
        first: format!("{:02}", first),
        second: format!("{:02}", second),
        direction,
    }
}

/// Just the two fields of [`read`].
pub fn countdown_fields(target: &str, tz: Tz, now: DateTime<Utc>) -> (String, String) {
    let reading = read(target, tz, now);
    (reading.first, reading.second)
}
