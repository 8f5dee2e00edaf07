use super::files::{atomic_write, ensure_quadrant_dir, read_file, LABELS_FILE, SETTINGS_FILE, TASKS_FILE};
use crate::domain::{AxisLabels, Task, TimerSettings};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

/// File-backed record store for the board
///
/// Each record (task list, axis labels, timer settings) is loaded and saved
/// independently; there is no cross-record transaction. Reads tolerate
/// missing and malformed data by logging and falling back to the supplied
/// default, so a corrupt file never prevents startup.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store in the resolved quadrant directory, creating it if
    /// needed
    pub fn open() -> Result<Self> {
        Ok(Self {
            dir: ensure_quadrant_dir()?,
        })
    }

    /// Open the store in an explicit directory (tests, custom hosts)
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn load_tasks(&self) -> Vec<Task> {
        self.load_record(TASKS_FILE, Vec::new())
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        self.save_record(TASKS_FILE, &tasks)
    }

    pub fn load_labels(&self) -> AxisLabels {
        self.load_record(LABELS_FILE, AxisLabels::default())
    }

    pub fn save_labels(&self, labels: &AxisLabels) -> Result<()> {
        self.save_record(LABELS_FILE, labels)
    }

    /// Load timer settings, clamping any out-of-range stored values
    pub fn load_settings(&self) -> TimerSettings {
        self.load_record(SETTINGS_FILE, TimerSettings::default())
            .clamped()
    }

    pub fn save_settings(&self, settings: &TimerSettings) -> Result<()> {
        self.save_record(SETTINGS_FILE, settings)
    }

    fn load_record<T: DeserializeOwned>(&self, name: &str, default: T) -> T {
        let path = self.dir.join(name);
        let content = match read_file(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(record = name, error = %e, "failed to read record, using default");
                return default;
            }
        };

        if content.is_empty() {
            return default;
        }

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(record = name, error = %e, "malformed record, using default");
                default
            }
        }
    }

    fn save_record<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        atomic_write(self.dir.join(name), &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Position, TaskStatus, DEFAULT_COLOR};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_records_gives_defaults() {
        let temp_dir = tempdir().unwrap();
        let store = Store::at(temp_dir.path().to_path_buf());

        assert!(store.load_tasks().is_empty());
        assert_eq!(store.load_labels(), AxisLabels::default());
        assert_eq!(store.load_settings(), TimerSettings::default());
    }

    #[test]
    fn test_tasks_round_trip() {
        let temp_dir = tempdir().unwrap();
        let store = Store::at(temp_dir.path().to_path_buf());

        let mut task = Task::new(
            "Ship release".to_string(),
            DEFAULT_COLOR.to_string(),
            Position::new(0.9, 0.8),
        );
        task.mark_done();

        store.save_tasks(&[task.clone()]).unwrap();
        let loaded = store.load_tasks();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, task.id);
        assert_eq!(loaded[0].title, "Ship release");
        assert_eq!(loaded[0].status, TaskStatus::Done);
        assert_eq!(loaded[0].position, Position::new(0.9, 0.8));
    }

    #[test]
    fn test_labels_round_trip() {
        let temp_dir = tempdir().unwrap();
        let store = Store::at(temp_dir.path().to_path_buf());

        let labels = AxisLabels {
            x_positive: "Soon".to_string(),
            x_negative: "Later".to_string(),
            y_positive: "Big".to_string(),
            y_negative: "Small".to_string(),
        };
        store.save_labels(&labels).unwrap();

        assert_eq!(store.load_labels(), labels);
    }

    #[test]
    fn test_malformed_record_falls_back_to_default() {
        let temp_dir = tempdir().unwrap();
        let store = Store::at(temp_dir.path().to_path_buf());

        std::fs::write(temp_dir.path().join(TASKS_FILE), "not json {").unwrap();
        std::fs::write(temp_dir.path().join(SETTINGS_FILE), "[1, 2]").unwrap();

        assert!(store.load_tasks().is_empty());
        assert_eq!(store.load_settings(), TimerSettings::default());
    }

    #[test]
    fn test_stored_settings_are_clamped_on_load() {
        let temp_dir = tempdir().unwrap();
        let store = Store::at(temp_dir.path().to_path_buf());

        std::fs::write(
            temp_dir.path().join(SETTINGS_FILE),
            r#"{"work_minutes": 0, "break_minutes": 0, "session_count": 0}"#,
        )
        .unwrap();

        let settings = store.load_settings();
        assert_eq!(settings, TimerSettings::new(1, 1, 1));
    }
}
