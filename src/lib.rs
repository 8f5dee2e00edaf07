//! Quadrant priority-board task core with a Pomodoro focus timer.
//!
//! Tasks live on a two-axis priority plane; at most one is "doing" at a
//! time, driven by the [`timer::TimerController`] state machine. A host UI
//! owns a [`app::Board`], feeds it user intents plus a 1-second tick, and
//! renders from its accessors. Storage and audio are injected seams:
//! [`persistence::Store`] and [`audio::AudioCue`].

pub mod app;
pub mod audio;
pub mod domain;
pub mod persistence;
pub mod registry;
pub mod ticker;
pub mod timer;

pub use app::Board;
pub use audio::{AudioCue, NullAudio, SystemAudio};
pub use domain::{AxisLabels, CueTrack, Position, Task, TaskStatus, TimerPhase, TimerSettings};
pub use persistence::Store;
pub use registry::TaskRegistry;
pub use timer::{TimerController, TimerError};
