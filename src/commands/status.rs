use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use super::{HomeworkStore, local_now};
use crate::render::{Render, pluralize};

pub fn run(store: &HomeworkStore) -> Result<()> {
    let document = store.document();
    let now = local_now(store);

    println!("{}  {}", "Homework".bold(), document.progress().render());

    let overdue = document
        .assignments()
        .filter(|(_, a)| a.is_overdue(now))
        .count();
    if overdue > 0 {
        println!("{}", format!("{} overdue {}", overdue, pluralize("assignment", overdue)).red());
    }

    let last_reset = document.last_reset.with_timezone(&Local);
    println!(
        "{}",
        format!("Last reset {}", last_reset.format("%a %b %-d, %Y %-I:%M %p")).dimmed()
    );

    if !document.classes.is_empty() {
        println!();
    }
    for class in &document.classes {
        println!("{}  {}", class.render(), class.progress().render());
    }

    Ok(())
}
