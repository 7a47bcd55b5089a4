use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use super::HomeworkStore;
use crate::render::Render;

/// Remove completed one-off work and move completed recurring work to its next due date.
pub fn run(store: &mut HomeworkStore, confirm: bool) -> Result<()> {
    if confirm {
        let proceed = Confirm::new()
            .with_prompt(
                "This will reset all completed assignments. \
                Non-recurring completed assignments will be removed. Continue?",
            )
            .default(false)
            .interact()?;
        if !proceed {
            println!("{}", "  Cancelled".dimmed());
            return Ok(());
        }
    }

    let summary = store.trigger_reset()?;
    println!("{}", "Reset".bold());
    println!("{}", summary.render());

    Ok(())
}
