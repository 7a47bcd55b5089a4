//! Assignment types.
//!
//! These are the stored shapes. Field names serialize in camelCase so the
//! document stays readable by any client of the JSON format.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date::{self, Frequency};

/// A piece of homework belonging to a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    /// Defaults to 23:59 for documents written before due times existed
    #[serde(default = "date::default_due_time", with = "hhmm")]
    pub due_time: NaiveTime,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub is_future_assignment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_schedule: Option<RecurringSchedule>,
    pub created_at: DateTime<Utc>,
}

/// When and until when a recurring assignment comes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringSchedule {
    /// Weekday indices, 0 = Sunday .. 6 = Saturday. Sorted, no duplicates.
    pub days_of_week: Vec<u8>,
    #[serde(default)]
    pub frequency: Frequency,
    pub end_date: NaiveDate,
    pub next_due_date: NaiveDate,
}

impl Assignment {
    /// Local date and time the assignment is due.
    pub fn due_at(&self) -> NaiveDateTime {
        self.due_date.and_time(self.due_time)
    }

    /// Whether the assignment counts towards totals and overdue checks.
    pub fn is_active(&self) -> bool {
        !self.is_future_assignment
    }

    /// Past its due time and still open. Future assignments are never overdue.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        self.is_active() && !self.is_completed && self.due_at() < now
    }
}

impl RecurringSchedule {
    pub fn new(
        days_of_week: Vec<u8>,
        frequency: Frequency,
        end_date: NaiveDate,
        due: NaiveDate,
    ) -> Self {
        RecurringSchedule {
            days_of_week: normalize_days(days_of_week),
            frequency,
            end_date,
            next_due_date: due,
        }
    }

    /// Human-readable description, e.g. "Weekly Mon, Wed".
    pub fn describe(&self) -> String {
        let days: Vec<String> = self
            .days_of_week
            .iter()
            .filter_map(|&i| date::weekday_from_index(i))
            .map(|d| d.to_string())
            .collect();

        if days.is_empty() {
            self.frequency.label().to_string()
        } else {
            format!("{} {}", self.frequency.label(), days.join(", "))
        }
    }
}

/// Sort and dedupe weekday indices.
pub(crate) fn normalize_days(mut days: Vec<u8>) -> Vec<u8> {
    days.sort_unstable();
    days.dedup();
    days
}

/// `HH:MM` (de)serialization for due times.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::constants::TIME_FORMAT;
    use crate::date::default_due_time;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(default_due_time()),
            Some(s) => NaiveTime::parse_from_str(s, TIME_FORMAT)
                .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Assignment {
        Assignment {
            id: "a1".to_string(),
            title: "Problem set 3".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            due_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            notes: String::new(),
            is_completed: false,
            is_recurring: true,
            is_future_assignment: false,
            recurring_schedule: Some(RecurringSchedule::new(
                vec![3, 1, 1],
                Frequency::Biweekly,
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            )),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn serializes_in_storage_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["dueDate"], "2024-03-10");
        assert_eq!(json["dueTime"], "09:30");
        assert_eq!(json["isFutureAssignment"], false);
        assert_eq!(json["recurringSchedule"]["daysOfWeek"], serde_json::json!([1, 3]));
        assert_eq!(json["recurringSchedule"]["frequency"], "biweekly");
        assert_eq!(json["recurringSchedule"]["endDate"], "2024-06-01");
    }

    #[test]
    fn legacy_fields_take_defaults() {
        let json = r#"{
            "id": "1700000000000",
            "title": "Essay",
            "dueDate": "2024-03-10",
            "isCompleted": true,
            "isRecurring": true,
            "recurringSchedule": {
                "daysOfWeek": [1],
                "endDate": "2024-05-01",
                "nextDueDate": "2024-03-10"
            },
            "createdAt": "2024-03-01T12:00:00.000Z"
        }"#;
        let a: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(a.due_time, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        assert_eq!(a.notes, "");
        assert!(!a.is_future_assignment);
        assert_eq!(a.recurring_schedule.unwrap().frequency, Frequency::Weekly);
    }

    #[test]
    fn empty_due_time_falls_back() {
        let json = r#"{"id":"x","title":"t","dueDate":"2024-03-10","dueTime":"",
            "createdAt":"2024-03-01T12:00:00Z"}"#;
        let a: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(a.due_time, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn overdue_uses_due_time() {
        let a = sample();
        let before = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(10, 0, 0).unwrap();
        assert!(!a.is_overdue(before));
        assert!(a.is_overdue(after));

        let mut done = a.clone();
        done.is_completed = true;
        assert!(!done.is_overdue(after));

        let mut future = a;
        future.is_future_assignment = true;
        assert!(!future.is_overdue(after));
    }

    #[test]
    fn describes_schedule() {
        let schedule = sample().recurring_schedule.unwrap();
        assert_eq!(schedule.describe(), "Biweekly Mon, Wed");
    }
}
