use anyhow::Result;
use clap::Args;
use homework_core::Frequency;
use homework_core::lifecycle::{NewAssignment, NewSchedule};
use owo_colors::OwoColorize;

use super::{HomeworkStore, local_now, resolve_class};
use crate::input;
use crate::render::RenderAt;

#[derive(Args)]
pub struct AddArgs {
    /// Class name or id
    pub class: String,

    /// Assignment title
    pub title: String,

    /// Due date (YYYY-MM-DD, "today" or "tomorrow")
    #[arg(short, long)]
    pub due: String,

    /// Due time, 24-hour HH:MM (defaults to 23:59)
    #[arg(short, long)]
    pub time: Option<String>,

    #[arg(short, long)]
    pub notes: Option<String>,

    /// Planned work: left out of totals and can't be completed yet
    #[arg(long, conflicts_with_all = ["on", "every", "until"])]
    pub future: bool,

    /// Make the assignment recurring on these days (e.g. "mon,wed")
    #[arg(long)]
    pub on: Option<String>,

    /// How often it recurs: weekly, biweekly or monthly
    #[arg(long, requires = "on")]
    pub every: Option<String>,

    /// Last date the assignment recurs
    #[arg(long, requires = "on")]
    pub until: Option<String>,
}

pub fn run(store: &mut HomeworkStore, args: AddArgs) -> Result<()> {
    let now = local_now(store);
    let today = now.date();
    let class_id = resolve_class(store, &args.class)?.id.clone();

    let recurring = match args.on {
        Some(days) => Some(NewSchedule {
            days_of_week: input::parse_days(&days)?,
            frequency: args
                .every
                .as_deref()
                .map(str::parse::<Frequency>)
                .transpose()?
                .unwrap_or_default(),
            end_date: args
                .until
                .as_deref()
                .map(|d| input::parse_date(d, today))
                .transpose()?,
        }),
        None => None,
    };

    let fields = NewAssignment {
        title: args.title,
        due_date: Some(input::parse_date(&args.due, today)?),
        due_time: args.time.as_deref().map(input::parse_time).transpose()?,
        notes: args.notes,
        is_future_assignment: args.future,
        recurring,
    };

    let assignment = store.create_assignment(&class_id, fields)?;

    println!("{}", "  Added:".green());
    println!("  {}", assignment.render_at(now));

    Ok(())
}
