use super::enums::TaskStatus;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default color tag assigned to new tasks
pub const DEFAULT_COLOR: &str = "#e8a33d";

/// A 2D coordinate on the priority plane
///
/// The x axis runs from "not urgent" to "urgent", the y axis from
/// "not important" to "important". Only the board layer mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        // Plane centre
        Self { x: 0.5, y: 0.5 }
    }
}

/// A task placed on the priority plane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID for internal references
    pub id: Uuid,
    /// Task title
    pub title: String,
    /// Cosmetic color tag
    pub color: String,
    /// Placement on the priority plane
    pub position: Position,
    /// Optional due date, cosmetic only
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Current status
    pub status: TaskStatus,
    /// When the task was created
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(title: String, color: String, position: Position) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            color,
            position,
            due_date: None,
            status: TaskStatus::Todo,
            created_at: Local::now(),
        }
    }

    /// Promote to the in-progress status (timer activation)
    pub fn promote(&mut self) {
        self.status = TaskStatus::Doing;
    }

    /// Demote back to the backlog, abandoning any in-progress run
    pub fn demote(&mut self) {
        self.status = TaskStatus::Todo;
    }

    /// Mark as done
    pub fn mark_done(&mut self) {
        self.status = TaskStatus::Done;
    }

    /// Check if this task is the one currently in progress
    pub fn is_doing(&self) -> bool {
        self.status == TaskStatus::Doing
    }
}
