//! The reset pass: clears out finished work and rolls recurring assignments
//! forward to their next due date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::{debug, info};

use crate::assignment::Assignment;
use crate::date::{advance_to_next_occurrence, format_date};
use crate::document::Document;
use crate::error::HomeworkResult;

/// What a reset did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResetSummary {
    /// Completed assignments removed (one-off, or recurring past their end date)
    pub purged: usize,
    /// Recurring assignments moved to their next due date
    pub rolled_forward: usize,
    /// Recurring assignments without a schedule that were just unchecked
    pub unchecked: usize,
}

impl ResetSummary {
    pub fn is_empty(&self) -> bool {
        self.purged == 0 && self.rolled_forward == 0 && self.unchecked == 0
    }
}

enum Outcome {
    Keep,
    Purge,
    RollForward(NaiveDate),
    Uncheck,
}

fn decide(assignment: &Assignment, now: NaiveDateTime) -> HomeworkResult<Outcome> {
    if !assignment.is_completed {
        return Ok(Outcome::Keep);
    }
    if !assignment.is_recurring {
        return Ok(Outcome::Purge);
    }

    let Some(schedule) = &assignment.recurring_schedule else {
        return Ok(Outcome::Uncheck);
    };

    if schedule.end_date < now.date() {
        return Ok(Outcome::Purge);
    }

    let next = advance_to_next_occurrence(assignment.due_date, schedule.frequency, now)?;
    Ok(Outcome::RollForward(next))
}

/// Apply the reset policy to every completed assignment in `document`.
///
/// Open assignments are never touched, so running this twice in a row only
/// changes `last_reset` the second time. The document is left unchanged if
/// any due date can't be advanced.
pub fn reset<Tz: TimeZone>(
    document: &mut Document,
    now: &DateTime<Tz>,
) -> HomeworkResult<ResetSummary> {
    let local_now = now.naive_local();
    let mut summary = ResetSummary::default();
    let mut classes = document.classes.clone();

    for class in &mut classes {
        let mut kept = Vec::with_capacity(class.assignments.len());

        for mut assignment in class.assignments.drain(..) {
            match decide(&assignment, local_now)? {
                Outcome::Keep => {}
                Outcome::Purge => {
                    debug!(
                        class = %class.name,
                        assignment = %assignment.title,
                        "purging completed assignment"
                    );
                    summary.purged += 1;
                    continue;
                }
                Outcome::RollForward(next) => {
                    debug!(
                        class = %class.name,
                        assignment = %assignment.title,
                        from = %format_date(assignment.due_date),
                        to = %format_date(next),
                        "rolling recurring assignment forward"
                    );
                    assignment.due_date = next;
                    if let Some(schedule) = assignment.recurring_schedule.as_mut() {
                        schedule.next_due_date = next;
                    }
                    assignment.is_completed = false;
                    summary.rolled_forward += 1;
                }
                Outcome::Uncheck => {
                    debug!(
                        class = %class.name,
                        assignment = %assignment.title,
                        "unchecking recurring assignment without schedule"
                    );
                    assignment.is_completed = false;
                    summary.unchecked += 1;
                }
            }
            kept.push(assignment);
        }

        class.assignments = kept;
    }

    document.classes = classes;
    document.last_reset = now.with_timezone(&Utc);

    info!(
        purged = summary.purged,
        rolled_forward = summary.rolled_forward,
        unchecked = summary.unchecked,
        "reset complete"
    );

    Ok(summary)
}
