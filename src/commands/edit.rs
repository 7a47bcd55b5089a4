use anyhow::{Result, bail};
use clap::Args;
use homework_core::Frequency;
use homework_core::lifecycle::AssignmentPatch;
use owo_colors::OwoColorize;

use super::{HomeworkStore, local_now, resolve_ids};
use crate::input;
use crate::render::RenderAt;

#[derive(Args)]
pub struct EditArgs {
    /// Class name or id
    pub class: String,

    /// Assignment id, id prefix or title
    pub assignment: String,

    #[arg(long)]
    pub title: Option<String>,

    /// New due date (YYYY-MM-DD, "today" or "tomorrow")
    #[arg(short, long)]
    pub due: Option<String>,

    /// New due time, 24-hour HH:MM
    #[arg(short, long)]
    pub time: Option<String>,

    /// New notes ("" clears them)
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Mark as future work (yes/no). Turning this on drops any recurrence
    #[arg(long)]
    pub future: Option<String>,

    /// Make recurring or not (yes/no). Turning this on needs --on and --until
    /// unless the assignment already has a schedule
    #[arg(long)]
    pub recurring: Option<String>,

    /// Days of the week it recurs on (e.g. "mon,wed")
    #[arg(long)]
    pub on: Option<String>,

    /// weekly, biweekly or monthly
    #[arg(long)]
    pub every: Option<String>,

    /// Last date the assignment recurs
    #[arg(long)]
    pub until: Option<String>,
}

pub fn run(store: &mut HomeworkStore, args: EditArgs) -> Result<()> {
    let now = local_now(store);
    let today = now.date();
    let (class_id, assignment_id) = resolve_ids(store, &args.class, &args.assignment)?;

    let patch = AssignmentPatch {
        title: args.title,
        due_date: args
            .due
            .as_deref()
            .map(|d| input::parse_date(d, today))
            .transpose()?,
        due_time: args.time.as_deref().map(input::parse_time).transpose()?,
        notes: args.notes,
        is_recurring: args.recurring.as_deref().map(input::parse_flag).transpose()?,
        is_future_assignment: args.future.as_deref().map(input::parse_flag).transpose()?,
        days_of_week: args.on.as_deref().map(input::parse_days).transpose()?,
        frequency: args
            .every
            .as_deref()
            .map(str::parse::<Frequency>)
            .transpose()?,
        end_date: args
            .until
            .as_deref()
            .map(|d| input::parse_date(d, today))
            .transpose()?,
    };

    if patch.is_empty() {
        bail!(
            "Nothing to change. Pass at least one of --title, --due, --time, --notes, \
            --future, --recurring, --on, --every, --until"
        );
    }

    store.update_assignment(&class_id, &assignment_id, patch)?;

    if let Some(assignment) = store.class(&class_id)?.assignment(&assignment_id) {
        println!("{}", "  Updated:".yellow());
        println!("  {}", assignment.render_at(now));
    }

    Ok(())
}
