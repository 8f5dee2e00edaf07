use crate::audio::AudioCue;
use crate::domain::{CueTrack, TaskStatus, TimerPhase, TimerSettings};
use crate::registry::TaskRegistry;
use crate::ticker::Ticker;
use thiserror::Error;
use uuid::Uuid;

/// Errors from timer operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("task {0} not found")]
    TaskNotFound(Uuid),
}

/// The Pomodoro state machine and the single-active-task invariant
///
/// Owns phase, countdown, and the back-reference to the active task. The
/// task registry owns the tasks themselves; the controller only flips their
/// status. Invariants:
/// - `active_task_id` is set iff `phase != Idle`
/// - when set, the referenced task's status is `Doing`
/// - at most one task registry-wide is `Doing`
pub struct TimerController {
    settings: TimerSettings,
    phase: TimerPhase,
    time_left: u32,
    sessions_remaining: u32,
    total_sessions: u32,
    active_task_id: Option<Uuid>,
    ticker: Ticker,
}

impl TimerController {
    pub fn new(settings: TimerSettings) -> Self {
        let settings = settings.clamped();
        Self {
            settings,
            phase: TimerPhase::Idle,
            time_left: settings.work_seconds(),
            sessions_remaining: settings.session_count,
            total_sessions: settings.session_count,
            active_task_id: None,
            ticker: Ticker::new(),
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_armed()
    }

    pub fn sessions_remaining(&self) -> u32 {
        self.sessions_remaining
    }

    pub fn total_sessions(&self) -> u32 {
        self.total_sessions
    }

    pub fn active_task_id(&self) -> Option<Uuid> {
        self.active_task_id
    }

    pub fn settings(&self) -> TimerSettings {
        self.settings
    }

    /// Begin a Pomodoro run for a task
    ///
    /// Demotes the previously active task (if any, and different) to `Todo`
    /// before promoting the new one, so the previous run's progress is
    /// abandoned and the single-active invariant holds. Starting the task
    /// that is already active restarts its run from scratch.
    pub fn start(
        &mut self,
        registry: &mut TaskRegistry,
        audio: &mut dyn AudioCue,
        task_id: Uuid,
    ) -> Result<(), TimerError> {
        if !registry.contains(task_id) {
            return Err(TimerError::TaskNotFound(task_id));
        }

        if let Some(prev) = self.active_task_id {
            if prev != task_id {
                registry.set_status(prev, TaskStatus::Todo);
            }
        }

        registry.set_status(task_id, TaskStatus::Doing);
        self.active_task_id = Some(task_id);
        self.total_sessions = self.settings.session_count;
        self.sessions_remaining = self.settings.session_count;
        self.time_left = self.settings.work_seconds();
        self.phase = TimerPhase::Work;
        self.ticker.arm();

        audio.stop_all();
        audio.play(CueTrack::Work);

        debug_assert!(registry.doing_count() <= 1);
        self.check_invariant(registry);
        Ok(())
    }

    /// Advance the countdown by one second
    ///
    /// No-op unless running. On reaching zero the phase advances:
    /// work -> break while sessions remain, work -> idle when the cycle is
    /// exhausted, break -> work. Missed ticks are not coalesced.
    pub fn tick(&mut self, registry: &mut TaskRegistry, audio: &mut dyn AudioCue) {
        if !self.ticker.is_armed() {
            return;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return;
        }

        match self.phase {
            TimerPhase::Work => {
                if self.sessions_remaining > 1 {
                    self.sessions_remaining -= 1;
                    self.time_left = self.settings.break_seconds();
                    self.phase = TimerPhase::Break;
                    audio.stop_all();
                    audio.play(CueTrack::Break);
                } else {
                    // Cycle exhausted. The task goes back to Todo, not Done;
                    // marking done stays an explicit user action.
                    self.finish(registry, audio, TaskStatus::Todo);
                }
            }
            TimerPhase::Break => {
                self.time_left = self.settings.work_seconds();
                self.phase = TimerPhase::Work;
                audio.stop_all();
                audio.play(CueTrack::Work);
            }
            // Ticker is never armed while idle
            TimerPhase::Idle => {}
        }

        self.check_invariant(registry);
    }

    /// Halt the countdown, keeping phase and remaining time
    pub fn pause(&mut self, audio: &mut dyn AudioCue) {
        if !self.ticker.is_armed() || self.phase == TimerPhase::Idle {
            return;
        }
        // Disarm before anything else so no tick lands on the paused phase
        self.ticker.disarm();
        audio.stop_all();
    }

    /// Resume a paused phase
    pub fn resume(&mut self, audio: &mut dyn AudioCue) {
        if self.ticker.is_armed() || self.phase == TimerPhase::Idle {
            return;
        }
        self.ticker.arm();
        audio.stop_all();
        if let Some(cue) = self.phase.cue() {
            audio.play(cue);
        }
    }

    /// Mark the active task done and return to idle
    pub fn complete(&mut self, registry: &mut TaskRegistry, audio: &mut dyn AudioCue) {
        if self.phase == TimerPhase::Idle {
            return;
        }
        self.finish(registry, audio, TaskStatus::Done);
        self.check_invariant(registry);
    }

    /// Abandon the run (if any) and return to idle
    ///
    /// The active task reverts to `Todo`, never `Done`. Safe to call while
    /// already idle; counters are re-derived from current settings.
    pub fn reset(&mut self, registry: &mut TaskRegistry, audio: &mut dyn AudioCue) {
        self.finish(registry, audio, TaskStatus::Todo);
        self.check_invariant(registry);
    }

    /// Apply new settings
    ///
    /// An in-flight phase keeps its `time_left` and `total_sessions`; the
    /// next phase entered (or the next start) uses the new values. While
    /// idle the display counters are refreshed immediately.
    pub fn update_settings(&mut self, settings: TimerSettings) {
        self.settings = settings.clamped();
        if self.phase == TimerPhase::Idle {
            self.reset_counters();
        }
    }

    /// Collaborator notification: a task was deleted from the registry
    ///
    /// Deleting the active task is an implicit reset; the status write
    /// inside no-ops because the task is already gone.
    pub fn task_deleted(&mut self, registry: &mut TaskRegistry, audio: &mut dyn AudioCue, id: Uuid) {
        if self.active_task_id == Some(id) {
            self.finish(registry, audio, TaskStatus::Todo);
        }
        self.check_invariant(registry);
    }

    /// Tear down the current run, leaving the active task in `final_status`
    fn finish(&mut self, registry: &mut TaskRegistry, audio: &mut dyn AudioCue, final_status: TaskStatus) {
        self.ticker.disarm();
        audio.stop_all();
        if let Some(id) = self.active_task_id.take() {
            registry.set_status(id, final_status);
        }
        self.phase = TimerPhase::Idle;
        self.reset_counters();
    }

    fn reset_counters(&mut self) {
        self.time_left = self.settings.work_seconds();
        self.sessions_remaining = self.settings.session_count;
        self.total_sessions = self.settings.session_count;
    }

    fn check_invariant(&self, registry: &TaskRegistry) {
        debug_assert_eq!(self.active_task_id.is_some(), self.phase != TimerPhase::Idle);
        if let Some(id) = self.active_task_id {
            debug_assert!(registry.get(id).map_or(true, |t| t.is_doing()));
        }
    }
}
