#[macro_use]
extern crate prettytable;

use anyhow::Context;
use std::io;
use structopt::StructOpt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod interface;
mod model;

use cli::{Command::*, CommandLineArgs};
use model::TaskList;

fn main() -> anyhow::Result<()> {
    if std::env::var("TODO_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todo=debug")),
            )
            .with_writer(io::stderr)
            .init();
    }

    // Get the command-line arguments.
    let CommandLineArgs { action, todo_file } = CommandLineArgs::from_args();

    let action = match action {
        Some(action) => action,
        None => {
            println!("No command specified");
            return Ok(());
        }
    };

    let mut tasks = TaskList::default();
    tasks
        .load(&todo_file)
        .with_context(|| format!("Failed to load todo file {}.", todo_file.display()))?;
    debug!(?action, file = %todo_file.display(), "dispatching");

    // Perform the action.
    match action {
        Add { description } => {
            let description = interface::get_input(io::stdin().lock(), description)?;
            interface::add_task(&todo_file, &mut tasks, description)
        }
        Complete { position } => interface::complete_task(&todo_file, &mut tasks, position),
        Delete { position } => interface::remove_task(&todo_file, &mut tasks, position),
        List => interface::list(&tasks),
    }?;
    Ok(())
}
