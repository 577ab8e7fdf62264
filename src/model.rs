use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::TryFrom;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, TodoError};

/// A single task, saved as an entry of the todo file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "Task")]
    pub description: String,
    #[serde(alias = "Done")]
    pub done: bool,
    #[serde(alias = "CreatedAt")]
    pub created_at: DateTime<Local>,
    #[serde(
        default,
        alias = "CompletedAt",
        deserialize_with = "deserialize_completed_at"
    )]
    pub completed_at: Option<DateTime<Local>>,
}

impl Task {
    pub fn new(description: String) -> Self {
        Task {
            description,
            done: false,
            created_at: Local::now(),
            completed_at: None,
        }
    }
}

/// Zero and epoch timestamps mean the task was never completed.
fn deserialize_completed_at<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Local>>, D::Error>
where
    D: Deserializer<'de>,
{
    let completed_at: Option<DateTime<FixedOffset>> = Option::deserialize(deserializer)?;
    Ok(completed_at
        .filter(|at| at.timestamp() > 0)
        .map(|at| at.with_timezone(&Local)))
}

/// The ordered list of tasks. Positions exposed to the user are 1-based.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Return the task at a 1-based position, if any.
    pub fn get(&self, position: i64) -> Option<&Task> {
        self.offset(position).ok().map(|i| &self.tasks[i])
    }

    /// Append a new pending task at the end of the list.
    pub fn add(&mut self, description: String) {
        self.tasks.push(Task::new(description));
    }

    /// Mark the task at the given position as done. Completing an already
    /// done task stamps it again.
    pub fn complete(&mut self, position: i64) -> Result<()> {
        let i = self.offset(position)?;
        let task = &mut self.tasks[i];
        task.done = true;
        task.completed_at = Some(Local::now());
        Ok(())
    }

    /// Remove the task at the given position, shifting the following tasks
    /// one place to the left.
    pub fn delete(&mut self, position: i64) -> Result<()> {
        let i = self.offset(position)?;
        self.tasks.remove(i);
        Ok(())
    }

    /// Number of tasks not done yet.
    pub fn count_pending(&self) -> usize {
        self.tasks.iter().filter(|task| !task.done).count()
    }

    /// Replace the list with the content of the todo file. A missing or
    /// empty file leaves the list empty.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("todo file {} not found, starting empty", path.display());
                self.tasks.clear();
                return Ok(());
            }
            Err(source) => {
                return Err(TodoError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            self.tasks.clear();
            return Ok(());
        }

        self.tasks = serde_json::from_slice(&content).map_err(|source| TodoError::Deserialize {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded {} tasks from {}", self.tasks.len(), path.display());
        Ok(())
    }

    /// Write the whole list to the todo file, overwriting it.
    pub fn store(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.tasks)
            .map_err(|source| TodoError::Serialize { source })?;
        fs::write(path, content).map_err(|source| TodoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("stored {} tasks to {}", self.tasks.len(), path.display());
        Ok(())
    }

    // 1-based position to vector offset.
    fn offset(&self, position: i64) -> Result<usize> {
        let len = self.tasks.len();
        usize::try_from(position)
            .ok()
            .filter(|p| (1..=len).contains(p))
            .map(|p| p - 1)
            .ok_or(TodoError::IndexOutOfRange {
                index: position,
                len,
            })
    }
}
