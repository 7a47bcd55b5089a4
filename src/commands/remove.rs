use anyhow::Result;
use owo_colors::OwoColorize;

use super::{HomeworkStore, resolve_ids};

pub fn run(store: &mut HomeworkStore, class: &str, assignment: &str) -> Result<()> {
    let (class_id, assignment_id) = resolve_ids(store, class, assignment)?;
    let removed = store.delete_assignment(&class_id, &assignment_id)?;
    println!("{}", format!("  Deleted: {}", removed.title).red());
    Ok(())
}
