//! Calendar date arithmetic
//!
//! Thin, fallible wrappers over `chrono`'s naive (zone-less) date and time
//! types. Every operation that can leave chrono's supported range reports
//! [`CalendarError::OutOfRange`] instead of panicking.

use chrono::{
    DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc, Weekday,
};
use thiserror::Error;

/// Errors that can occur during date arithmetic and parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// No such calendar date
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year
        year: i32,
        /// Month, 1-based
        month: u32,
        /// Day of month, 1-based
        day: u32,
    },
    /// No such time of day
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// Hour
        hour: u32,
        /// Minute
        minute: u32,
        /// Second
        second: u32,
    },
    /// Result falls outside the supported date range
    #[error("date out of range: {0}")]
    OutOfRange(String),
    /// Text did not match the expected format
    #[error("cannot parse '{input}' as {expected}")]
    Parse {
        /// The rejected input
        input: String,
        /// What was expected
        expected: &'static str,
    },
}

/// Result type for calendar operations
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Build a date from year, month and day
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// December 31st of `year`
pub fn new_years_eve(year: i32) -> Result<NaiveDate> {
    date(year, 12, 31)
}

/// Build a date and time of day
pub fn date_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(CalendarError::InvalidTime {
        hour,
        minute,
        second,
    })?;
    Ok(date(year, month, day)?.and_time(time))
}

/// Move `days` days forward (or backward when negative)
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| CalendarError::OutOfRange(format!("{date} + {days} days")))
}

/// Same month and day in another year. February 29th becomes the 28th when
/// the target year is not a leap year.
pub fn with_year(date: NaiveDate, year: i32) -> Result<NaiveDate> {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .ok_or_else(|| CalendarError::OutOfRange(format!("year {year}")))
}

/// The last day of the month `date` falls in
pub fn last_day_of_month(date: NaiveDate) -> Result<NaiveDate> {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next_first| next_first.pred_opt())
        .ok_or_else(|| CalendarError::OutOfRange(format!("end of month of {date}")))
}

/// The first `weekday` strictly after `date`
pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> Result<NaiveDate> {
    let current = i64::from(date.weekday().num_days_from_monday());
    let target = i64::from(weekday.num_days_from_monday());
    let ahead = match (target - current).rem_euclid(7) {
        0 => 7,
        n => n,
    };
    add_days(date, ahead)
}

/// The first Friday the 13th strictly after `from`
pub fn next_friday_13th(from: NaiveDate) -> Result<NaiveDate> {
    let mut candidate = date(from.year(), from.month(), 13)?;
    if candidate <= from {
        candidate = next_month(candidate)?;
    }

    // every calendar year has at least one Friday the 13th
    for _ in 0..14 {
        if candidate.weekday() == Weekday::Fri {
            return Ok(candidate);
        }
        candidate = next_month(candidate)?;
    }

    Err(CalendarError::OutOfRange(format!("no Friday 13th after {from}")))
}

fn next_month(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(1))
        .ok_or_else(|| CalendarError::OutOfRange(format!("month after {date}")))
}

/// Signed number of whole days from `start` to `end`
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`)
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| CalendarError::Parse {
        input: input.to_string(),
        expected: "an ISO date (YYYY-MM-DD)",
    })
}

/// Parse an ISO-8601 time of day (`HH:MM` or `HH:MM:SS[.fff]`)
pub fn parse_iso_time(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| CalendarError::Parse {
            input: input.to_string(),
            expected: "an ISO time (HH:MM[:SS])",
        })
}

/// Parse a weekday name such as `friday` or `Fri`
pub fn parse_weekday(input: &str) -> Result<Weekday> {
    input.trim().parse().map_err(|_| CalendarError::Parse {
        input: input.to_string(),
        expected: "a weekday name",
    })
}

/// Format as an ISO-8601 calendar date
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The UTC instant `seconds` after the Unix epoch
pub fn instant_from_epoch_seconds(seconds: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| CalendarError::OutOfRange(format!("{seconds} seconds since epoch")))
}

/// A span of `seconds` seconds
pub fn seconds(seconds: i64) -> Result<TimeDelta> {
    TimeDelta::try_seconds(seconds)
        .ok_or_else(|| CalendarError::OutOfRange(format!("{seconds} seconds")))
}

/// A span of `days` days
pub fn days(days: i64) -> Result<TimeDelta> {
    TimeDelta::try_days(days).ok_or_else(|| CalendarError::OutOfRange(format!("{days} days")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_new_years_eve() {
        let eve = new_years_eve(2017).unwrap();
        assert_eq!((eve.year(), eve.month(), eve.day()), (2017, 12, 31));
        assert_eq!(add_days(eve, 1).unwrap(), date(2018, 1, 1).unwrap());
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(
            date(2017, 2, 30).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2017,
                month: 2,
                day: 30
            }
        );
    }

    #[test]
    fn test_with_year_clamps_leap_day() {
        let leap = date(2020, 2, 29).unwrap();
        assert_eq!(with_year(leap, 2021).unwrap(), date(2021, 2, 28).unwrap());
        assert_eq!(with_year(leap, 2024).unwrap(), date(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_last_day_of_month() {
        let first = date(2017, 12, 1).unwrap();
        assert_eq!(last_day_of_month(first).unwrap(), new_years_eve(2017).unwrap());
        assert_eq!(
            last_day_of_month(date(2024, 2, 10).unwrap()).unwrap(),
            date(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_next_weekday_is_strictly_after() {
        // 2017-01-13 was a Friday
        let friday = date(2017, 1, 13).unwrap();
        assert_eq!(
            next_weekday(friday, Weekday::Fri).unwrap(),
            date(2017, 1, 20).unwrap()
        );
        assert_eq!(
            next_weekday(friday, Weekday::Mon).unwrap(),
            date(2017, 1, 16).unwrap()
        );
    }

    #[test]
    fn test_next_friday_13th() {
        let from = date(2017, 1, 1).unwrap();
        assert_eq!(next_friday_13th(from).unwrap(), date(2017, 1, 13).unwrap());

        let on_one = date(2017, 1, 13).unwrap();
        assert_eq!(next_friday_13th(on_one).unwrap(), date(2017, 10, 13).unwrap());
    }

    #[test]
    fn test_parse_and_format() {
        let eve = parse_iso_date("2017-12-31").unwrap();
        assert_eq!(format_iso_date(eve), "2017-12-31");
        assert!(parse_iso_time("2017-12-31").is_err());

        let midnight = parse_iso_time("00:00").unwrap();
        assert_eq!((midnight.hour(), midnight.minute(), midnight.second()), (0, 0, 0));
        assert_eq!(parse_iso_time("23:59:58").unwrap().second(), 58);
    }

    #[test]
    fn test_epoch_instant() {
        let instant = instant_from_epoch_seconds(1_514_678_400).unwrap();
        assert_eq!(instant.naive_utc(), date_time(2017, 12, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_durations() {
        assert_eq!(seconds(5).unwrap().num_seconds(), 5);
        assert!(!days(5).unwrap().is_zero());
        assert!(days(0).unwrap().is_zero());
    }

    #[test]
    fn test_days_between() {
        let start = date(2017, 1, 1).unwrap();
        let end = date(2017, 3, 1).unwrap();
        assert_eq!(days_between(start, end), 59);
        assert_eq!(days_between(end, start), -59);
    }
}
