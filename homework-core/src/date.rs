//! Calendar date helpers and recurrence advancement.
//!
//! Every date handled here is a local calendar date (`NaiveDate`). Stored
//! `YYYY-MM-DD` strings are parsed field by field and never pass through a UTC
//! instant, so `2024-03-10` is March 10th regardless of the host time zone.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, DEFAULT_DUE_HOUR, DEFAULT_DUE_MINUTE, TIME_FORMAT};
use crate::error::{HomeworkError, HomeworkResult};

/// How often a recurring assignment comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Biweekly",
            Frequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Frequency {
    type Err = HomeworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Frequency::Weekly),
            "biweekly" => Ok(Frequency::Biweekly),
            "monthly" => Ok(Frequency::Monthly),
            other => Err(HomeworkError::validation(format!(
                "Unknown frequency '{}'. Expected weekly, biweekly or monthly",
                other
            ))),
        }
    }
}

/// Compare two values by (year, month, day) only, ignoring any time of day.
pub fn is_same_calendar_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Canonical `YYYY-MM-DD` form used for storage.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string into a local calendar date.
pub fn parse_date(s: &str) -> HomeworkResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        HomeworkError::validation(format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
    })
}

/// Parse an `HH:MM` (24-hour) string.
pub fn parse_time(s: &str) -> HomeworkResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map_err(|_| HomeworkError::validation(format!("Invalid time '{}'. Expected HH:MM", s)))
}

pub fn default_due_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_DUE_HOUR, DEFAULT_DUE_MINUTE, 0).unwrap_or(NaiveTime::MIN)
}

/// Weekday for a stored index (0 = Sunday .. 6 = Saturday).
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

/// The `k`-th occurrence after `base`, always computed from the base itself.
///
/// Monthly steps clamp to the end of shorter months (Jan 31 + 1 month is
/// Feb 28/29) and, because each occurrence is anchored to the base, Jan 31
/// comes back as Mar 31 rather than drifting to Mar 28/29.
fn occurrence(base: NaiveDate, frequency: Frequency, k: u32) -> Option<NaiveDate> {
    match frequency {
        Frequency::Weekly => base.checked_add_days(Days::new(7 * u64::from(k))),
        Frequency::Biweekly => base.checked_add_days(Days::new(14 * u64::from(k))),
        Frequency::Monthly => base.checked_add_months(Months::new(k)),
    }
}

/// Lower bound on the number of whole periods needed to get past `today`.
fn periods_to_skip(base: NaiveDate, today: NaiveDate, frequency: Frequency) -> u32 {
    let elapsed = match frequency {
        Frequency::Weekly => (today - base).num_days() / 7 + 1,
        Frequency::Biweekly => (today - base).num_days() / 14 + 1,
        Frequency::Monthly => {
            i64::from(today.year() - base.year()) * 12 + i64::from(today.month0())
                - i64::from(base.month0())
        }
    };
    u32::try_from(elapsed.max(1)).unwrap_or(u32::MAX)
}

/// First date of the schedule that starts at `base` which is strictly after `now`.
///
/// A date counts as "after now" when its start (local midnight) is later than
/// `now`, i.e. when it falls on a later calendar day. A base that is already in
/// the future is returned as is. Bases far in the past are skipped forward by
/// whole periods in one step; the result matches advancing one period at a time.
pub fn advance_to_next_occurrence(
    base: NaiveDate,
    frequency: Frequency,
    now: NaiveDateTime,
) -> HomeworkResult<NaiveDate> {
    let today = now.date();
    if base > today {
        return Ok(base);
    }

    let mut k = periods_to_skip(base, today, frequency);
    loop {
        let next = occurrence(base, frequency, k)
            .ok_or_else(|| HomeworkError::DateOutOfRange(format_date(base)))?;
        if next > today {
            return Ok(next);
        }
        k = k
            .checked_add(1)
            .ok_or_else(|| HomeworkError::DateOutOfRange(format_date(base)))?;
    }
}

/// Relative label for a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueLabel {
    Today,
    Tomorrow,
    On(NaiveDate),
}

impl DueLabel {
    pub fn for_date<T: Datelike>(due: NaiveDate, now: &T) -> Self {
        if is_same_calendar_day(&due, now) {
            return DueLabel::Today;
        }
        let tomorrow = NaiveDate::from_ymd_opt(now.year(), now.month(), now.day())
            .and_then(|d| d.succ_opt());
        match tomorrow {
            Some(t) if is_same_calendar_day(&due, &t) => DueLabel::Tomorrow,
            _ => DueLabel::On(due),
        }
    }
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DueLabel::Today => write!(f, "Today"),
            DueLabel::Tomorrow => write!(f, "Tomorrow"),
            DueLabel::On(d) => write!(f, "{}", d.format("%a %b %-d, %Y")),
        }
    }
}

/// 12-hour clock form of a due time, e.g. "11:59 PM".
pub fn format_time_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    /// One period at a time, the straightforward way.
    fn advance_stepwise(base: NaiveDate, frequency: Frequency, now: NaiveDateTime) -> NaiveDate {
        let mut k = 0;
        loop {
            let next = occurrence(base, frequency, k).unwrap();
            if next > now.date() {
                return next;
            }
            k += 1;
        }
    }

    #[test]
    fn weekly_advances_past_now() {
        let next =
            advance_to_next_occurrence(date(2024, 1, 1), Frequency::Weekly, at(2024, 1, 10, 9, 0))
                .unwrap();
        assert_eq!(next, date(2024, 1, 15));
    }

    #[test]
    fn occurrence_on_today_is_not_after_now() {
        let next =
            advance_to_next_occurrence(date(2024, 1, 1), Frequency::Weekly, at(2024, 1, 15, 0, 0))
                .unwrap();
        assert_eq!(next, date(2024, 1, 22));
    }

    #[test]
    fn biweekly_skips_two_weeks() {
        let next = advance_to_next_occurrence(
            date(2024, 1, 1),
            Frequency::Biweekly,
            at(2024, 1, 10, 12, 0),
        )
        .unwrap();
        assert_eq!(next, date(2024, 1, 15));

        let next = advance_to_next_occurrence(
            date(2024, 1, 1),
            Frequency::Biweekly,
            at(2024, 1, 16, 12, 0),
        )
        .unwrap();
        assert_eq!(next, date(2024, 1, 29));
    }

    #[test]
    fn future_base_is_unchanged() {
        let next =
            advance_to_next_occurrence(date(2024, 2, 1), Frequency::Weekly, at(2024, 1, 10, 9, 0))
                .unwrap();
        assert_eq!(next, date(2024, 2, 1));
    }

    #[test]
    fn far_past_base_skips_whole_periods() {
        let now = at(2025, 6, 18, 8, 30);
        for frequency in [Frequency::Weekly, Frequency::Biweekly, Frequency::Monthly] {
            let base = date(2019, 3, 4);
            let next = advance_to_next_occurrence(base, frequency, now).unwrap();
            assert_eq!(next, advance_stepwise(base, frequency, now));
            assert!(next > now.date());
        }
    }

    #[test]
    fn weekly_keeps_weekday() {
        // 2024-01-01 is a Monday
        let next =
            advance_to_next_occurrence(date(2024, 1, 1), Frequency::Weekly, at(2024, 9, 3, 9, 0))
                .unwrap();
        assert_eq!(next.weekday(), Weekday::Mon);
    }

    #[test]
    fn monthly_clamps_to_short_month() {
        let now = at(2024, 2, 10, 9, 0);
        let next = advance_to_next_occurrence(date(2024, 1, 31), Frequency::Monthly, now).unwrap();
        assert_eq!(next, date(2024, 2, 29));
        // Deterministic across calls
        assert_eq!(
            advance_to_next_occurrence(date(2024, 1, 31), Frequency::Monthly, now).unwrap(),
            next
        );
    }

    #[test]
    fn monthly_does_not_drift_after_short_month() {
        let next = advance_to_next_occurrence(
            date(2024, 1, 31),
            Frequency::Monthly,
            at(2024, 3, 1, 9, 0),
        )
        .unwrap();
        assert_eq!(next, date(2024, 3, 31));
    }

    #[test]
    fn monthly_later_in_current_month() {
        let next = advance_to_next_occurrence(
            date(2024, 1, 20),
            Frequency::Monthly,
            at(2024, 3, 10, 9, 0),
        )
        .unwrap();
        assert_eq!(next, date(2024, 3, 20));
    }

    #[test]
    fn matches_stepwise_over_a_year_of_days() {
        let base = date(2024, 1, 31);
        let mut day = date(2024, 1, 1);
        while day < date(2025, 1, 1) {
            let now = day.and_hms_opt(13, 0, 0).unwrap();
            for frequency in [Frequency::Weekly, Frequency::Biweekly, Frequency::Monthly] {
                assert_eq!(
                    advance_to_next_occurrence(base, frequency, now).unwrap(),
                    advance_stepwise(base, frequency, now),
                    "{frequency} on {day}"
                );
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn same_calendar_day_ignores_time() {
        let morning = at(2024, 5, 2, 0, 1);
        let night = at(2024, 5, 2, 23, 59);
        assert!(is_same_calendar_day(&morning, &night));
        assert!(is_same_calendar_day(&morning, &date(2024, 5, 2)));
        assert!(!is_same_calendar_day(&morning, &date(2024, 5, 3)));
    }

    #[test]
    fn parse_and_format_dates() {
        let d = parse_date("2024-03-10").unwrap();
        assert_eq!(d, date(2024, 3, 10));
        assert_eq!(format_date(d), "2024-03-10");
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("03/10/2024").is_err());
    }

    #[test]
    fn parse_times() {
        assert_eq!(parse_time("09:05").unwrap(), NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert!(parse_time("25:00").is_err());
        assert_eq!(default_due_time(), NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn due_labels() {
        let now = at(2024, 2, 28, 22, 15);
        assert_eq!(DueLabel::for_date(date(2024, 2, 28), &now), DueLabel::Today);
        assert_eq!(DueLabel::for_date(date(2024, 2, 29), &now), DueLabel::Tomorrow);
        assert_eq!(
            DueLabel::for_date(date(2024, 3, 1), &now),
            DueLabel::On(date(2024, 3, 1))
        );
        assert_eq!(DueLabel::On(date(2024, 3, 1)).to_string(), "Fri Mar 1, 2024");
    }

    #[test]
    fn twelve_hour_times() {
        assert_eq!(format_time_12h(default_due_time()), "11:59 PM");
        assert_eq!(format_time_12h(NaiveTime::from_hms_opt(0, 5, 0).unwrap()), "12:05 AM");
        assert_eq!(format_time_12h(NaiveTime::from_hms_opt(12, 0, 0).unwrap()), "12:00 PM");
    }

    #[test]
    fn frequency_from_str() {
        assert_eq!("Biweekly".parse::<Frequency>().unwrap(), Frequency::Biweekly);
        assert!("daily".parse::<Frequency>().is_err());
    }

    #[test]
    fn weekday_indices() {
        assert_eq!(weekday_from_index(0), Some(Weekday::Sun));
        assert_eq!(weekday_from_index(7), None);
        assert_eq!(weekday_index(Weekday::Sat), 6);
    }
}
