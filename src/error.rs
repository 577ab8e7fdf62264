//! Error kinds surfaced by the task list and the command layer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("index {index} out of range (list has {len} tasks)")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("failed to access todo file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("todo file '{path}' is not a valid task list: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize task list: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
