use jiff::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Free-form description of the task
    pub task: String,
    /// Whether the task has been completed
    pub done: bool,
    /// When the task was created - never modified afterwards
    pub created_at: Timestamp,
    /// When the task was completed, `None` until it is marked done
    pub completed_at: Option<Timestamp>,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            task: text.into(),
            done: false,
            created_at: Timestamp::now(),
            completed_at: None,
        }
    }
}
