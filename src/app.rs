use crate::audio::AudioCue;
use crate::domain::{AxisLabels, Position, Task, TaskStatus, TimerSettings};
use crate::persistence::Store;
use crate::registry::TaskRegistry;
use crate::timer::{TimerController, TimerError};
use chrono::NaiveDate;
use uuid::Uuid;

/// Top-level board state
///
/// Owns the task registry, the timer controller, the axis labels, and the
/// injected storage/audio collaborators. The host UI drives it with discrete
/// intents and a 1-second tick; there are no ambient globals.
pub struct Board {
    registry: TaskRegistry,
    timer: TimerController,
    labels: AxisLabels,
    audio: Box<dyn AudioCue>,
    store: Store,
    needs_save: bool,
}

impl Board {
    /// Load the board from the store, falling back to defaults per record
    ///
    /// Stale `Doing` statuses revert to `Todo`: timer state is not
    /// persisted, so there is no run to resume.
    pub fn load(store: Store, audio: Box<dyn AudioCue>) -> Self {
        let mut registry = TaskRegistry::new(store.load_tasks());
        registry.coerce_doing_to_todo();
        let labels = store.load_labels();
        let timer = TimerController::new(store.load_settings());

        Self {
            registry,
            timer,
            labels,
            audio,
            store,
            needs_save: false,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.registry.tasks()
    }

    pub fn labels(&self) -> &AxisLabels {
        &self.labels
    }

    pub fn timer(&self) -> &TimerController {
        &self.timer
    }

    pub fn needs_save(&self) -> bool {
        self.needs_save
    }

    // --- Task CRUD ------------------------------------------------------

    /// Create a task on the plane. Blank titles are ignored.
    pub fn create_task(&mut self, title: &str, color: &str, position: Position) -> Option<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let task = Task::new(title.to_string(), color.to_string(), position);
        let id = task.id;
        self.registry.add(task);
        self.needs_save = true;
        Some(id)
    }

    /// Delete a task, clearing the timer's reference if it was active
    pub fn delete_task(&mut self, id: Uuid) {
        if self.registry.remove(id).is_some() {
            self.timer
                .task_deleted(&mut self.registry, self.audio.as_mut(), id);
            self.needs_save = true;
        }
    }

    pub fn rename_task(&mut self, id: Uuid, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        if let Some(task) = self.registry.get_mut(id) {
            task.title = title.to_string();
            self.needs_save = true;
        }
    }

    pub fn set_color(&mut self, id: Uuid, color: &str) {
        if let Some(task) = self.registry.get_mut(id) {
            task.color = color.to_string();
            self.needs_save = true;
        }
    }

    pub fn set_due_date(&mut self, id: Uuid, due_date: Option<NaiveDate>) {
        if let Some(task) = self.registry.get_mut(id) {
            task.due_date = due_date;
            self.needs_save = true;
        }
    }

    /// Board glue: move a task on the priority plane
    pub fn move_task(&mut self, id: Uuid, position: Position) {
        if self.registry.contains(id) {
            self.registry.update_position(id, position);
            self.needs_save = true;
        }
    }

    /// Explicit user action: mark a task done
    ///
    /// On the active task this is a timer completion, so audio stops and
    /// the machine returns to idle; on any other task it is a plain status
    /// write.
    pub fn mark_done(&mut self, id: Uuid) {
        if self.timer.active_task_id() == Some(id) {
            self.timer.complete(&mut self.registry, self.audio.as_mut());
        } else {
            self.registry.set_status(id, TaskStatus::Done);
        }
        self.needs_save = true;
    }

    /// Explicit user action: put a task back in the backlog
    pub fn revert_task(&mut self, id: Uuid) {
        if self.timer.active_task_id() == Some(id) {
            self.timer.reset(&mut self.registry, self.audio.as_mut());
        } else {
            self.registry.set_status(id, TaskStatus::Todo);
        }
        self.needs_save = true;
    }

    // --- Labels ---------------------------------------------------------

    pub fn set_axis_labels(&mut self, labels: AxisLabels) {
        self.labels = labels;
        self.needs_save = true;
    }

    // --- Timer facade ---------------------------------------------------

    pub fn start_pomodoro(&mut self, id: Uuid) -> Result<(), TimerError> {
        let result = self.timer.start(&mut self.registry, self.audio.as_mut(), id);
        if result.is_ok() {
            self.needs_save = true;
        }
        result
    }

    pub fn pause(&mut self) {
        self.timer.pause(self.audio.as_mut());
    }

    pub fn resume(&mut self) {
        self.timer.resume(self.audio.as_mut());
    }

    pub fn complete_active(&mut self) {
        self.timer.complete(&mut self.registry, self.audio.as_mut());
        self.needs_save = true;
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset(&mut self.registry, self.audio.as_mut());
        self.needs_save = true;
    }

    pub fn update_timer_settings(&mut self, settings: TimerSettings) {
        self.timer.update_settings(settings);
        self.needs_save = true;
    }

    /// Forward one 1-second tick to the timer
    ///
    /// A tick that ends a phase can flip task statuses, so the board goes
    /// dirty whenever the tick changed the machine's shape.
    pub fn tick(&mut self) {
        let before = (self.timer.phase(), self.timer.active_task_id());
        self.timer.tick(&mut self.registry, self.audio.as_mut());
        if (self.timer.phase(), self.timer.active_task_id()) != before {
            self.needs_save = true;
        }
    }

    // --- Persistence ----------------------------------------------------

    /// Persist all records if anything changed since the last save
    ///
    /// Best-effort: a failed write is logged and dropped, never reverting
    /// the in-memory state.
    pub fn save_if_needed(&mut self) {
        if !self.needs_save {
            return;
        }

        if let Err(e) = self.store.save_tasks(self.registry.tasks()) {
            tracing::warn!(error = %e, "failed to save tasks");
        }
        if let Err(e) = self.store.save_labels(&self.labels) {
            tracing::warn!(error = %e, "failed to save labels");
        }
        if let Err(e) = self.store.save_settings(&self.timer.settings()) {
            tracing::warn!(error = %e, "failed to save settings");
        }

        self.needs_save = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::domain::{TimerPhase, DEFAULT_COLOR};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn board_in(dir: &std::path::Path) -> Board {
        Board::load(Store::at(dir.to_path_buf()), Box::new(NullAudio))
    }

    #[test]
    fn test_create_and_delete_task() {
        let temp_dir = tempdir().unwrap();
        let mut board = board_in(temp_dir.path());

        let id = board
            .create_task("Plan sprint", DEFAULT_COLOR, Position::new(0.7, 0.9))
            .unwrap();
        assert_eq!(board.tasks().len(), 1);
        assert!(board.needs_save());

        board.delete_task(id);
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn test_blank_title_is_ignored() {
        let temp_dir = tempdir().unwrap();
        let mut board = board_in(temp_dir.path());

        assert!(board.create_task("   ", DEFAULT_COLOR, Position::default()).is_none());
        assert!(board.tasks().is_empty());
        assert!(!board.needs_save());
    }

    #[test]
    fn test_deleting_active_task_resets_timer() {
        let temp_dir = tempdir().unwrap();
        let mut board = board_in(temp_dir.path());

        let id = board
            .create_task("Focus", DEFAULT_COLOR, Position::default())
            .unwrap();
        board.start_pomodoro(id).unwrap();
        assert_eq!(board.timer().phase(), TimerPhase::Work);

        board.delete_task(id);
        assert_eq!(board.timer().phase(), TimerPhase::Idle);
        assert_eq!(board.timer().active_task_id(), None);
    }

    #[test]
    fn test_mark_done_on_active_task_routes_through_complete() {
        let temp_dir = tempdir().unwrap();
        let mut board = board_in(temp_dir.path());

        let id = board
            .create_task("Focus", DEFAULT_COLOR, Position::default())
            .unwrap();
        board.start_pomodoro(id).unwrap();

        board.mark_done(id);
        assert_eq!(board.timer().phase(), TimerPhase::Idle);
        assert_eq!(board.tasks()[0].status, TaskStatus::Done);
    }

    #[test]
    fn test_mark_done_on_other_task_leaves_run_alone() {
        let temp_dir = tempdir().unwrap();
        let mut board = board_in(temp_dir.path());

        let active = board
            .create_task("Focus", DEFAULT_COLOR, Position::default())
            .unwrap();
        let other = board
            .create_task("Chore", DEFAULT_COLOR, Position::default())
            .unwrap();
        board.start_pomodoro(active).unwrap();

        board.mark_done(other);
        assert_eq!(board.timer().phase(), TimerPhase::Work);
        assert_eq!(board.timer().active_task_id(), Some(active));
        let statuses: Vec<_> = board.tasks().iter().map(|t| t.status).collect();
        assert_eq!(statuses, vec![TaskStatus::Doing, TaskStatus::Done]);
    }

    #[test]
    fn test_move_task_does_not_touch_status() {
        let temp_dir = tempdir().unwrap();
        let mut board = board_in(temp_dir.path());

        let id = board
            .create_task("Focus", DEFAULT_COLOR, Position::default())
            .unwrap();
        board.start_pomodoro(id).unwrap();

        board.move_task(id, Position::new(0.1, 0.2));
        assert_eq!(board.tasks()[0].position, Position::new(0.1, 0.2));
        assert_eq!(board.tasks()[0].status, TaskStatus::Doing);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let temp_dir = tempdir().unwrap();

        {
            let mut board = board_in(temp_dir.path());
            let id = board
                .create_task("Persist me", DEFAULT_COLOR, Position::new(0.3, 0.4))
                .unwrap();
            board.set_due_date(id, NaiveDate::from_ymd_opt(2026, 9, 1));
            board.set_axis_labels(AxisLabels {
                x_positive: "Now".to_string(),
                x_negative: "Whenever".to_string(),
                y_positive: "Matters".to_string(),
                y_negative: "Noise".to_string(),
            });
            board.update_timer_settings(TimerSettings::new(50, 10, 2));
            board.save_if_needed();
            assert!(!board.needs_save());
        }

        let board = board_in(temp_dir.path());
        assert_eq!(board.tasks().len(), 1);
        assert_eq!(board.tasks()[0].title, "Persist me");
        assert_eq!(board.tasks()[0].due_date, NaiveDate::from_ymd_opt(2026, 9, 1));
        assert_eq!(board.labels().x_positive, "Now");
        assert_eq!(board.timer().settings(), TimerSettings::new(50, 10, 2));
    }

    #[test]
    fn test_reload_reverts_stale_doing_status() {
        let temp_dir = tempdir().unwrap();

        {
            let mut board = board_in(temp_dir.path());
            let id = board
                .create_task("Mid-run", DEFAULT_COLOR, Position::default())
                .unwrap();
            board.start_pomodoro(id).unwrap();
            board.save_if_needed();
        }

        // A new process has no timer run to resume
        let board = board_in(temp_dir.path());
        assert_eq!(board.tasks()[0].status, TaskStatus::Todo);
        assert_eq!(board.timer().phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_phase_ending_tick_marks_dirty() {
        let temp_dir = tempdir().unwrap();
        let mut board = board_in(temp_dir.path());
        board.update_timer_settings(TimerSettings::new(1, 1, 2));

        let id = board
            .create_task("Focus", DEFAULT_COLOR, Position::default())
            .unwrap();
        board.start_pomodoro(id).unwrap();
        board.save_if_needed();

        // Mid-phase ticks stay clean
        for _ in 0..59 {
            board.tick();
        }
        assert!(!board.needs_save());

        // The work -> break transition dirties the board
        board.tick();
        assert_eq!(board.timer().phase(), TimerPhase::Break);
        assert!(board.needs_save());
    }
}
