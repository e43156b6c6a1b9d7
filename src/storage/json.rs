use std::{fs, path::PathBuf};

use serde_json::to_string_pretty;

use crate::{
    models::list::TaskList,
    storage::{Storage, StorageError},
};

/// Stores the whole task list as a single JSON array in one file.
///
/// The file is the only source of truth between invocations. It is not
/// locked, so concurrent invocations against the same file can lose
/// updates to each other.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<TaskList, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                // A zero-byte file can be left behind by an interrupted
                // prior write; treat it like a missing file.
                if content.is_empty() {
                    return Ok(TaskList::default());
                }

                serde_json::from_str(&content).map_err(|e| StorageError::ParseFailed {
                    path: self.path.clone(),
                    source: e,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TaskList::default()),
            Err(e) => Err(StorageError::LoadFailed {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn save(&self, list: &TaskList) -> Result<(), StorageError> {
        let json = to_string_pretty(list).map_err(|e| StorageError::SerializeFailed { source: e })?;

        fs::write(&self.path, json).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            source: e,
        })
    }
}
