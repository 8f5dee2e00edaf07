use serde::{Deserialize, Serialize};

/// Lifecycle status of a task on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Doing,
    Done,
}

impl TaskStatus {
    /// Parse status from a stored tag like "doing"
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "todo" => Some(Self::Todo),
            "doing" => Some(Self::Doing),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Convert status to its stored tag
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    /// Check if the task still needs work (excludes Done)
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Todo | Self::Doing)
    }
}

/// Phase of the Pomodoro timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Work,
    Break,
}

impl TimerPhase {
    /// Get the display name for this phase
    pub fn name(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "Idle",
            TimerPhase::Work => "Work",
            TimerPhase::Break => "Break",
        }
    }

    /// The ambient loop that accompanies this phase, if any
    pub fn cue(&self) -> Option<CueTrack> {
        match self {
            TimerPhase::Idle => None,
            TimerPhase::Work => Some(CueTrack::Work),
            TimerPhase::Break => Some(CueTrack::Break),
        }
    }
}

/// Ambient audio loop played during a timer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueTrack {
    Work,
    Break,
}

impl CueTrack {
    /// Get the track identifier (also the bundled file stem)
    pub fn id(&self) -> &'static str {
        match self {
            CueTrack::Work => "work",
            CueTrack::Break => "break",
        }
    }
}
