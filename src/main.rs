mod commands;
mod input;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use homework_core::Store;
use homework_core::config::HomeworkConfig;
use homework_core::storage::JsonFileStorage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::add::AddArgs;
use crate::commands::class::ClassCommand;
use crate::commands::edit::EditArgs;

#[derive(Parser)]
#[command(name = "homework")]
#[command(about = "Track classes and homework, including recurring assignments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overall progress, overdue count and last reset
    Status,
    /// List classes and their assignments
    Classes {
        /// Print the classes as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage classes
    Class {
        #[command(subcommand)]
        command: ClassCommand,
    },
    /// Add an assignment to a class
    Add(AddArgs),
    /// Edit an assignment
    Edit(EditArgs),
    /// Delete an assignment
    Rm {
        /// Class name or id
        class: String,
        /// Assignment id, id prefix or title
        assignment: String,
    },
    /// Mark an assignment complete (or not complete again)
    Done {
        /// Class name or id
        class: String,
        /// Assignment id, id prefix or title
        assignment: String,
    },
    /// All active assignments across classes, soonest first
    Todo {
        /// Hide completed assignments
        #[arg(long)]
        open: bool,
    },
    /// Clear completed work and roll recurring assignments forward
    Reset {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "homework=warn".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = HomeworkConfig::load()?;
    let mut store = Store::open(JsonFileStorage::new(config.document_path()));

    match cli.command {
        Commands::Status => commands::status::run(&store),
        Commands::Classes { json } => commands::classes::run(&store, json),
        Commands::Class { command } => commands::class::run(&mut store, command),
        Commands::Add(args) => commands::add::run(&mut store, args),
        Commands::Edit(args) => commands::edit::run(&mut store, args),
        Commands::Rm { class, assignment } => {
            commands::remove::run(&mut store, &class, &assignment)
        }
        Commands::Done { class, assignment } => {
            commands::done::run(&mut store, &class, &assignment)
        }
        Commands::Todo { open } => commands::todo::run(&store, open),
        Commands::Reset { yes } => commands::reset::run(&mut store, config.confirm_reset && !yes),
    }
}
