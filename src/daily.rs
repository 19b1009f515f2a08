//! Stable-per-day selection from fixed content lists.
//!
//! The date is rendered as `"{year}-{month}-{day}"` without zero padding and
//! folded with the classic 31-multiplier string hash over wrapping 32-bit
//! arithmetic. The same date always lands on the same index; consecutive
//! dates usually do not.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub fn date_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

pub fn string_hash(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

/// Index into a list of `len` items for `date`; `None` for an empty list.
pub fn daily_index(date: NaiveDate, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let hash = string_hash(&date_key(date)).unsigned_abs() as usize;
    Some(hash % len)
}

pub fn pick_daily<T>(items: &[T], date: NaiveDate) -> Option<&T> {
    daily_index(date, items.len()).map(|i| &items[i])
}

/// `count` consecutive items starting at the daily index, wrapping around.
pub fn daily_set<T>(items: &[T], date: NaiveDate, count: usize) -> Vec<&T> {
    let Some(start) = daily_index(date, items.len()) else {
        return Vec::new();
    };
    items
        .iter()
        .cycle()
        .skip(start)
        .take(count.min(items.len()))
        .collect()
}

/// Index of the 12-hour period `now` falls in, counted from January 1st.
pub fn half_day_index(now: NaiveDateTime, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let start_of_year = NaiveDate::from_ymd_opt(now.year(), 1, 1)?.and_time(NaiveTime::MIN);
    let hours = (now - start_of_year).num_hours();
    Some((hours / 12) as usize % len)
}

/// Next noon or midnight after `now`.
pub fn next_rotation(now: NaiveDateTime) -> NaiveDateTime {
    let date = now.date();
    if now.hour() < 12 {
        date.and_hms_opt(12, 0, 0).unwrap_or(now)
    } else {
        (date + Duration::days(1)).and_time(NaiveTime::MIN)
    }
}
