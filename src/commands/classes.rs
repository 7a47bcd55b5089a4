use anyhow::Result;
use owo_colors::OwoColorize;

use super::{HomeworkStore, local_now};
use crate::render::{Render, RenderAt};

/// List every class with its assignments, soonest due first.
pub fn run(store: &HomeworkStore, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(store.list_classes())?);
        return Ok(());
    }

    let classes = store.list_classes();
    if classes.is_empty() {
        println!("{}", "No classes yet. Create one with `homework class add <name>`".dimmed());
        return Ok(());
    }

    let now = local_now(store);

    for (i, class) in classes.iter().enumerate() {
        println!("{}  {}", class.render(), class.progress().render());

        if class.assignments.is_empty() {
            println!("   {}", "No assignments".dimmed());
        }
        for assignment in class.sorted_assignments() {
            println!("   {}", assignment.render_at(now));
        }

        if i < classes.len() - 1 {
            println!();
        }
    }

    Ok(())
}
