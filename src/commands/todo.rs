use anyhow::Result;
use owo_colors::OwoColorize;

use super::{HomeworkStore, local_now};
use crate::render::RenderAt;

/// Every active assignment across classes, ordered by due date and time.
pub fn run(store: &HomeworkStore, open_only: bool) -> Result<()> {
    let now = local_now(store);
    let upcoming: Vec<_> = store
        .document()
        .upcoming()
        .into_iter()
        .filter(|(_, a)| !open_only || !a.is_completed)
        .collect();

    if upcoming.is_empty() {
        println!("{}", "Nothing to do".dimmed());
        return Ok(());
    }

    for (class, assignment) in upcoming {
        let class_tag = format!("[{}]", class.name);
        println!("{} {}", assignment.render_at(now), class_tag.dimmed());
    }

    Ok(())
}
