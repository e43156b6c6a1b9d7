use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::task::Task;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Invalid task index {0}")]
    InvalidIndex(usize),

    #[error("There are no tasks to delete")]
    AlreadyEmpty,
}

/// The full ordered sequence of tasks - the unit of persistence.
///
/// Tasks are addressed by their 1-based position at the time of the
/// operation. Deleting a task shifts the position of every later task,
/// so callers should re-list before issuing a second index-based
/// operation in the same session.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
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

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Append a new pending task. Blank-text rejection is the input
    /// collaborator's responsibility, not enforced here.
    pub fn add(&mut self, text: impl Into<String>) {
        self.tasks.push(Task::new(text));
    }

    /// Mark the task at the given 1-based index as completed.
    ///
    /// Completing an already-completed task overwrites its completion
    /// timestamp rather than failing.
    pub fn complete(&mut self, index: usize) -> Result<(), TaskError> {
        let task = self.get_mut(index)?;
        task.done = true;
        task.completed_at = Some(Timestamp::now());
        Ok(())
    }

    /// Replace the text of the task at the given 1-based index, leaving
    /// its done-state and timestamps untouched.
    pub fn edit(&mut self, index: usize, text: impl Into<String>) -> Result<(), TaskError> {
        let task = self.get_mut(index)?;
        task.task = text.into();
        Ok(())
    }

    /// Remove the task at the given 1-based index. Every later task
    /// shifts one position earlier.
    pub fn delete(&mut self, index: usize) -> Result<(), TaskError> {
        if index < 1 || index > self.tasks.len() {
            return Err(TaskError::InvalidIndex(index));
        }
        self.tasks.remove(index - 1);
        Ok(())
    }

    /// Remove every task. Clearing an already-empty list is a
    /// user-facing error, not a no-op.
    pub fn delete_all(&mut self) -> Result<(), TaskError> {
        if self.tasks.is_empty() {
            return Err(TaskError::AlreadyEmpty);
        }
        self.tasks.clear();
        Ok(())
    }

    pub fn count_pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }

    pub fn count_completed(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Completed tasks in their original relative order.
    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.done).collect()
    }

    /// Pending tasks in their original relative order.
    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| !t.done).collect()
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Task, TaskError> {
        if index < 1 || index > self.tasks.len() {
            return Err(TaskError::InvalidIndex(index));
        }
        Ok(&mut self.tasks[index - 1])
    }
}
