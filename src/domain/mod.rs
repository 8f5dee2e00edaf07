pub mod enums;
pub mod labels;
pub mod settings;
pub mod task;

pub use enums::{CueTrack, TaskStatus, TimerPhase};
pub use labels::AxisLabels;
pub use settings::TimerSettings;
pub use task::{Position, Task, DEFAULT_COLOR};
