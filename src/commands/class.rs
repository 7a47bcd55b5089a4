use anyhow::{Result, bail};
use clap::Subcommand;
use dialoguer::Confirm;
use homework_core::StickyColor;
use homework_core::lifecycle::ClassPatch;
use owo_colors::OwoColorize;

use super::{HomeworkStore, resolve_class};
use crate::render::{Render, pluralize};

#[derive(Subcommand)]
pub enum ClassCommand {
    /// Create a class
    Add {
        name: String,

        /// yellow, pink, blue, green, purple or orange
        #[arg(short, long, default_value = "yellow")]
        color: String,
    },
    /// Rename or recolor a class
    Edit {
        /// Class name or id
        class: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        color: Option<String>,
    },
    /// Delete a class and all of its assignments
    Rm {
        /// Class name or id
        class: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run(store: &mut HomeworkStore, command: ClassCommand) -> Result<()> {
    match command {
        ClassCommand::Add { name, color } => {
            let class = store.create_class(&name, color.parse::<StickyColor>()?)?;
            println!("{}", format!("  Created: {}", class.name).green());
        }
        ClassCommand::Edit { class, name, color } => {
            if name.is_none() && color.is_none() {
                bail!("Nothing to change. Pass --name and/or --color");
            }
            let id = resolve_class(store, &class)?.id.clone();
            let patch = ClassPatch {
                name,
                color: color.as_deref().map(str::parse::<StickyColor>).transpose()?,
            };
            store.update_class(&id, patch)?;
            println!("  {}", store.class(&id)?.render());
        }
        ClassCommand::Rm { class, yes } => {
            let target = resolve_class(store, &class)?;
            let id = target.id.clone();
            let count = target.assignments.len();

            if !yes && count > 0 {
                let prompt = format!(
                    "Delete {} and its {} {}?",
                    target.name,
                    count,
                    pluralize("assignment", count)
                );
                if !Confirm::new().with_prompt(prompt).default(false).interact()? {
                    println!("{}", "  Cancelled".dimmed());
                    return Ok(());
                }
            }

            let removed = store.delete_class(&id)?;
            println!("{}", format!("  Deleted: {}", removed.name).red());
        }
    }

    Ok(())
}
