use std::path::PathBuf;

use thiserror::Error;

use crate::models::list::TaskList;

pub mod json;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to load tasks from '{path}': {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON from '{path}': {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to save tasks to '{path}': {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize tasks to JSON: {source}")]
    SerializeFailed {
        #[source]
        source: serde_json::Error,
    },
}

pub trait Storage {
    fn load(&self) -> Result<TaskList, StorageError>;
    fn save(&self, list: &TaskList) -> Result<(), StorageError>;
}
