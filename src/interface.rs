use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use prettytable::{format, Cell, Row, Table};
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

use crate::error::TodoError;
use crate::model::{Task, TaskList};

/// Build the task description from the command words, or from one line of
/// `input` when no words were given.
pub fn get_input<R: BufRead>(mut input: R, words: Vec<String>) -> Result<String, TodoError> {
    let text = if words.is_empty() {
        let mut line = String::new();
        input.read_line(&mut line).map_err(|source| TodoError::Io {
            path: "<stdin>".into(),
            source,
        })?;
        line
    } else {
        words.join(" ")
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(TodoError::Input("task description is required".to_string()));
    }
    Ok(text.to_string())
}

pub fn add_task(todo_file: &Path, tasks: &mut TaskList, description: String) -> Result<()> {
    tasks.add(description.clone());
    tasks
        .store(todo_file)
        .context("Failed to save the new task.")?;

    println!("{}. {}", tasks.len(), description);
    Ok(())
}

pub fn complete_task(todo_file: &Path, tasks: &mut TaskList, position: i64) -> Result<()> {
    tasks
        .complete(position)
        .with_context(|| format!("Failed to complete task {}.", position))?;
    tasks
        .store(todo_file)
        .context("Failed to save the completed task.")?;

    if let Some(task) = tasks.get(position) {
        println!("Completed {}. {}", position, task.description);
    }
    Ok(())
}

pub fn remove_task(todo_file: &Path, tasks: &mut TaskList, position: i64) -> Result<()> {
    let description = tasks
        .get(position)
        .map(|task| task.description.clone())
        .unwrap_or_default();
    tasks
        .delete(position)
        .with_context(|| format!("Failed to remove task {}.", position))?;
    tasks
        .store(todo_file)
        .context("Failed to save the task list.")?;

    println!("Removed {}. {}", position, description);
    Ok(())
}

pub fn list(tasks: &TaskList) -> Result<()> {
    debug!("listing {} tasks", tasks.len());
    render_table(tasks).printstd();
    if tasks.is_empty() {
        println!("There are no tasks! use 'todo add' to add new tasks to your list.");
    }
    Ok(())
}

/// Render the whole list as a table, with a footer summarizing the pending
/// and total counts.
pub fn render_table(tasks: &TaskList) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row![bc => "#", "Task", "Done?", "Created At", "Completed At"]);

    for (i, task) in tasks.iter().enumerate() {
        table.add_row(task_row(i + 1, task));
    }

    table.add_row(Row::new(vec![
        Cell::new(&format!("Pending: {}", tasks.count_pending()))
            .style_spec("cFr")
            .with_hspan(3),
        Cell::new(&format!("Total: {}", tasks.len()))
            .style_spec("rFg")
            .with_hspan(2),
    ]));
    table
}

fn task_row(position: usize, task: &Task) -> Row {
    let (text_style, done) = if task.done {
        ("Fg", "✅")
    } else {
        ("Fb", "❌")
    };

    Row::new(vec![
        Cell::new(&position.to_string()).style_spec("r"),
        Cell::new(&task.description).style_spec(text_style),
        Cell::new(done).style_spec("c"),
        Cell::new(&fmt_timestamp(&task.created_at)).style_spec("c"),
        Cell::new(
            &task
                .completed_at
                .as_ref()
                .map(fmt_timestamp)
                .unwrap_or_else(|| "-".to_string()),
        )
        .style_spec("c"),
    ])
}

fn fmt_timestamp(at: &DateTime<Local>) -> String {
    at.format("%A, %d-%b-%y %H:%M:%S %Z").to_string()
}
