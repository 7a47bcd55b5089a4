//! Creation, editing and completion rules for classes and assignments.
//!
//! Everything here validates before touching state: a rejected edit leaves
//! the assignment exactly as it was.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::assignment::{Assignment, RecurringSchedule, normalize_days};
use crate::class::{Class, StickyColor};
use crate::date::{self, Frequency};
use crate::error::{HomeworkError, HomeworkResult};

/// Fields for a new assignment.
#[derive(Debug, Clone, Default)]
pub struct NewAssignment {
    pub title: String,
    pub due_date: Option<NaiveDate>,
    /// 23:59 when not given
    pub due_time: Option<NaiveTime>,
    pub notes: Option<String>,
    pub is_future_assignment: bool,
    /// Present when the assignment is recurring
    pub recurring: Option<NewSchedule>,
}

#[derive(Debug, Clone, Default)]
pub struct NewSchedule {
    pub days_of_week: Vec<u8>,
    pub frequency: Frequency,
    pub end_date: Option<NaiveDate>,
}

/// Partial edit of an assignment. `None` leaves a field unchanged.
///
/// Completion is not part of an edit; use [`toggle_complete`].
#[derive(Debug, Clone, Default)]
pub struct AssignmentPatch {
    pub title: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    /// `Some("")` clears the notes
    pub notes: Option<String>,
    pub is_recurring: Option<bool>,
    pub is_future_assignment: Option<bool>,
    pub days_of_week: Option<Vec<u8>>,
    pub frequency: Option<Frequency>,
    pub end_date: Option<NaiveDate>,
}

impl AssignmentPatch {
    fn touches_schedule(&self) -> bool {
        self.days_of_week.is_some() || self.frequency.is_some() || self.end_date.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.due_date.is_none()
            && self.due_time.is_none()
            && self.notes.is_none()
            && self.is_recurring.is_none()
            && self.is_future_assignment.is_none()
            && !self.touches_schedule()
    }
}

/// Partial edit of a class.
#[derive(Debug, Clone, Default)]
pub struct ClassPatch {
    pub name: Option<String>,
    pub color: Option<StickyColor>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn validated_title(title: &str) -> HomeworkResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(HomeworkError::validation("Title cannot be empty"));
    }
    Ok(title.to_string())
}

fn validated_days(days: Vec<u8>) -> HomeworkResult<Vec<u8>> {
    if days.is_empty() {
        return Err(HomeworkError::validation(
            "Recurring assignments need at least one day of the week",
        ));
    }
    if let Some(bad) = days.iter().find(|&&d| date::weekday_from_index(d).is_none()) {
        return Err(HomeworkError::validation(format!(
            "Invalid day of week {} (expected 0-6, Sunday = 0)",
            bad
        )));
    }
    Ok(normalize_days(days))
}

fn missing_end_date() -> HomeworkError {
    HomeworkError::validation("Recurring assignments need an end date")
}

fn both_flags() -> HomeworkError {
    HomeworkError::validation("An assignment can't be both recurring and a future assignment")
}

/// Build a new class with a fresh id.
pub fn create_class(name: &str, color: StickyColor, now: DateTime<Utc>) -> HomeworkResult<Class> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HomeworkError::validation("Class name cannot be empty"));
    }

    Ok(Class {
        id: new_id(),
        name: name.to_string(),
        color,
        assignments: Vec::new(),
        created_at: now,
    })
}

pub fn update_class(class: &mut Class, patch: ClassPatch) -> HomeworkResult<()> {
    let name = patch
        .name
        .map(|n| {
            let n = n.trim().to_string();
            if n.is_empty() {
                Err(HomeworkError::validation("Class name cannot be empty"))
            } else {
                Ok(n)
            }
        })
        .transpose()?;

    if let Some(name) = name {
        class.name = name;
    }
    if let Some(color) = patch.color {
        class.color = color;
    }
    Ok(())
}

/// Validate the fields and build a new, not-yet-completed assignment.
pub fn create_assignment(fields: NewAssignment, now: DateTime<Utc>) -> HomeworkResult<Assignment> {
    let title = validated_title(&fields.title)?;
    let due_date = fields
        .due_date
        .ok_or_else(|| HomeworkError::validation("Due date is required"))?;

    if fields.is_future_assignment && fields.recurring.is_some() {
        return Err(both_flags());
    }

    let recurring_schedule = match fields.recurring {
        Some(schedule) => {
            let days = validated_days(schedule.days_of_week)?;
            let end_date = schedule.end_date.ok_or_else(missing_end_date)?;
            Some(RecurringSchedule::new(days, schedule.frequency, end_date, due_date))
        }
        None => None,
    };

    Ok(Assignment {
        id: new_id(),
        title,
        due_date,
        due_time: fields.due_time.unwrap_or_else(date::default_due_time),
        notes: fields.notes.map(|n| n.trim().to_string()).unwrap_or_default(),
        is_completed: false,
        is_recurring: recurring_schedule.is_some(),
        is_future_assignment: fields.is_future_assignment,
        recurring_schedule,
        created_at: now,
    })
}

/// Merge `patch` into `assignment`.
///
/// Marking an assignment as future work drops its recurrence; making it
/// recurring clears the future flag. Turning recurrence on for an assignment
/// without a schedule needs days and an end date in the same patch.
pub fn update_assignment(
    assignment: &mut Assignment,
    patch: AssignmentPatch,
) -> HomeworkResult<()> {
    if patch.is_recurring == Some(true) && patch.is_future_assignment == Some(true) {
        return Err(both_flags());
    }

    let mut next = assignment.clone();

    if let Some(title) = &patch.title {
        next.title = validated_title(title)?;
    }
    if let Some(due_date) = patch.due_date {
        next.due_date = due_date;
    }
    if let Some(due_time) = patch.due_time {
        next.due_time = due_time;
    }
    if let Some(notes) = &patch.notes {
        next.notes = notes.trim().to_string();
    }

    match patch.is_future_assignment {
        Some(true) => {
            next.is_future_assignment = true;
            next.is_recurring = false;
            next.recurring_schedule = None;
        }
        Some(false) => next.is_future_assignment = false,
        None => {}
    }

    match patch.is_recurring {
        Some(true) => {
            next.is_recurring = true;
            next.is_future_assignment = false;
        }
        Some(false) => {
            next.is_recurring = false;
            next.recurring_schedule = None;
        }
        None => {}
    }

    if patch.touches_schedule()
        || (patch.is_recurring == Some(true) && next.recurring_schedule.is_none())
    {
        if !next.is_recurring {
            return Err(HomeworkError::validation(
                "Schedule fields only apply to recurring assignments",
            ));
        }

        next.recurring_schedule = Some(match next.recurring_schedule.take() {
            Some(mut schedule) => {
                if let Some(days) = patch.days_of_week.clone() {
                    schedule.days_of_week = validated_days(days)?;
                }
                if let Some(frequency) = patch.frequency {
                    schedule.frequency = frequency;
                }
                if let Some(end_date) = patch.end_date {
                    schedule.end_date = end_date;
                }
                schedule
            }
            None => {
                let days = validated_days(patch.days_of_week.clone().unwrap_or_default())?;
                let end_date = patch.end_date.ok_or_else(missing_end_date)?;
                RecurringSchedule::new(
                    days,
                    patch.frequency.unwrap_or_default(),
                    end_date,
                    next.due_date,
                )
            }
        });
    }

    if patch.due_date.is_some() {
        if let Some(schedule) = next.recurring_schedule.as_mut() {
            schedule.next_due_date = next.due_date;
        }
    }

    *assignment = next;
    Ok(())
}

/// Flip completion. Future assignments can't be completed.
///
/// Returns the new completion state.
pub fn toggle_complete(assignment: &mut Assignment) -> HomeworkResult<bool> {
    if assignment.is_future_assignment {
        return Err(HomeworkError::validation(format!(
            "'{}' is a future assignment and can't be marked complete",
            assignment.title
        )));
    }
    assignment.is_completed = !assignment.is_completed;
    Ok(assignment.is_completed)
}
