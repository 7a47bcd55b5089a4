//! Parsing of command-line values into core types.

use anyhow::{Result, bail};
use chrono::{NaiveDate, NaiveTime, Weekday};
use homework_core::date;

/// Parse a due/end date: "today", "tomorrow" or YYYY-MM-DD.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    match input.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => today
            .succ_opt()
            .ok_or_else(|| anyhow::anyhow!("No date after {}", today)),
        _ => Ok(date::parse_date(input)?),
    }
}

pub fn parse_time(input: &str) -> Result<NaiveTime> {
    Ok(date::parse_time(input)?)
}

/// Parse a comma-separated list of weekdays ("mon,wed", "Tuesday, thu")
/// into indices with Sunday = 0.
pub fn parse_days(input: &str) -> Result<Vec<u8>> {
    let mut days = Vec::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let Ok(day) = part.parse::<Weekday>() else {
            bail!("Unknown day '{}'. Use names like mon, tue, wed", part);
        };
        days.push(date::weekday_index(day));
    }
    Ok(days)
}

/// Parse "yes"/"no" style toggles used by `homework edit`.
pub fn parse_flag(input: &str) -> Result<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "on" => Ok(true),
        "no" | "n" | "false" | "off" => Ok(false),
        other => bail!("Expected yes or no, got '{}'", other),
    }
}
