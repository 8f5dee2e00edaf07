use serde::{Deserialize, Serialize};

/// Pomodoro timer configuration
///
/// All three values are whole positive numbers. Inputs are clamped to a
/// minimum of 1 rather than rejected, including values read from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    #[serde(default = "default_session_count")]
    pub session_count: u32,
}

fn default_work_minutes() -> u32 {
    25
}

fn default_break_minutes() -> u32 {
    5
}

fn default_session_count() -> u32 {
    4
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
            session_count: default_session_count(),
        }
    }
}

impl TimerSettings {
    pub fn new(work_minutes: u32, break_minutes: u32, session_count: u32) -> Self {
        Self {
            work_minutes,
            break_minutes,
            session_count,
        }
        .clamped()
    }

    /// Clamp every field to at least 1
    pub fn clamped(self) -> Self {
        Self {
            work_minutes: self.work_minutes.max(1),
            break_minutes: self.break_minutes.max(1),
            session_count: self.session_count.max(1),
        }
    }

    /// Work phase length in seconds
    pub fn work_seconds(&self) -> u32 {
        self.work_minutes * 60
    }

    /// Break phase length in seconds
    pub fn break_seconds(&self) -> u32 {
        self.break_minutes * 60
    }
}
