use anyhow::Result;
use owo_colors::OwoColorize;

use super::{HomeworkStore, resolve_ids};

/// Toggle completion of an assignment.
pub fn run(store: &mut HomeworkStore, class: &str, assignment: &str) -> Result<()> {
    let (class_id, assignment_id) = resolve_ids(store, class, assignment)?;
    let completed = store.toggle_complete(&class_id, &assignment_id)?;

    let title = store
        .class(&class_id)?
        .assignment(&assignment_id)
        .map(|a| a.title.clone())
        .unwrap_or_default();

    if completed {
        println!("{}", format!("  Completed: {}", title).green());
    } else {
        println!("{}", format!("  Reopened: {}", title).yellow());
    }

    Ok(())
}
