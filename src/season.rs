use chrono::{Datelike, NaiveDate, NaiveDateTime};
use chrono_tz::America::New_York;

/// Season shown by default until [`SEASON_CUTOVER`].
pub const PINNED_SEASON: i32 = 2025;

/// Opening Day 2026; from here on the default tracks the calendar year.
pub const SEASON_CUTOVER: (i32, u32, u32) = (2026, 3, 26);

/// Earliest season offered by the season selector and team history.
pub const FIRST_SEASON: i32 = 1960;

pub fn cutover_date() -> NaiveDate {
    let (y, m, d) = SEASON_CUTOVER;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

pub fn default_season(today: NaiveDate) -> i32 {
    if today < cutover_date() {
        PINNED_SEASON
    } else {
        today.year()
    }
}

/// Today's date in the league's home time zone.
pub fn league_today() -> NaiveDate {
    league_now().date()
}

pub fn league_now() -> NaiveDateTime {
    chrono::Utc::now().with_timezone(&New_York).naive_local()
}

pub fn current_default_season() -> i32 {
    default_season(league_today())
}

/// Seasons offered for selection, newest first.
pub fn available_seasons(current_year: i32) -> Vec<i32> {
    (FIRST_SEASON..=current_year).rev().collect()
}

/// Season from a query string value; anything unparseable or out of range
/// falls back to `fallback`.
pub fn resolve_season(raw: Option<&str>, fallback: i32, current_year: i32) -> i32 {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
        .filter(|s| (FIRST_SEASON..=current_year).contains(s))
        .unwrap_or(fallback)
}

pub fn season_status(season: i32, current_year: i32) -> (&'static str, &'static str) {
    if season == current_year {
        ("In Progress", "Regular season games")
    } else {
        ("Completed", "Final standings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn pinned_before_cutover() {
        for date in [day(2025, 1, 1), day(2025, 12, 31), day(2026, 3, 25)] {
            assert_eq!(default_season(date), PINNED_SEASON, "{date}");
        }
    }

    #[test]
    fn tracks_calendar_year_from_cutover() {
        assert_eq!(default_season(day(2026, 3, 26)), 2026);
        assert_eq!(default_season(day(2026, 10, 18)), 2026);
        assert_eq!(default_season(day(2027, 1, 2)), 2027);
    }

    #[test]
    fn season_list_runs_back_to_1960() {
        let seasons = available_seasons(2026);
        assert_eq!(seasons.first(), Some(&2026));
        assert_eq!(seasons.last(), Some(&FIRST_SEASON));
        assert_eq!(seasons.len(), 67);
    }

    #[test]
    fn resolve_season_falls_back() {
        assert_eq!(resolve_season(Some("2019"), 2025, 2026), 2019);
        assert_eq!(resolve_season(Some("abc"), 2025, 2026), 2025);
        assert_eq!(resolve_season(Some("1800"), 2025, 2026), 2025);
        assert_eq!(resolve_season(Some("2031"), 2025, 2026), 2025);
        assert_eq!(resolve_season(None, 2025, 2026), 2025);
    }

    #[test]
    fn status_for_current_and_past() {
        assert_eq!(season_status(2026, 2026).0, "In Progress");
        assert_eq!(season_status(2024, 2026).0, "Completed");
    }
}
