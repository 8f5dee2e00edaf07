use crate::domain::{Position, Task, TaskStatus};
use uuid::Uuid;

/// The set of tasks on the board
///
/// The registry enforces only per-task field integrity. The single-active
/// invariant (at most one task `Doing`) is maintained by the timer
/// controller, which demotes the previous active task before promoting a
/// new one.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove a task, returning it if it existed
    pub fn remove(&mut self, id: Uuid) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// Set a task's status. Silent no-op when the id is unknown: the task
    /// may have been deleted out from under the caller.
    pub fn set_status(&mut self, id: Uuid, status: TaskStatus) {
        if let Some(task) = self.get_mut(id) {
            task.status = status;
        }
    }

    /// Move a task on the priority plane. Silent no-op on unknown id.
    pub fn update_position(&mut self, id: Uuid, position: Position) {
        if let Some(task) = self.get_mut(id) {
            task.position = position;
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks currently in progress. Never exceeds 1 while the
    /// timer controller is the only writer of `Doing`.
    pub fn doing_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_doing()).count()
    }

    /// Revert any stale `Doing` statuses to `Todo` (for startup)
    ///
    /// Timer state is not persisted, so a task stored as `Doing` has no
    /// run to resume.
    pub fn coerce_doing_to_todo(&mut self) {
        for task in &mut self.tasks {
            if task.is_doing() {
                task.demote();
            }
        }
    }
}
