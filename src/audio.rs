//! Ambient audio cues for timer phases
//!
//! At most one loop plays at a time: callers silence everything with
//! `stop_all` before starting the loop for a new phase. Playback is
//! fire-and-forget; failures are logged and never surface to the timer.

use crate::domain::CueTrack;

/// Injected playback capability consumed by the timer controller
pub trait AudioCue {
    /// Start the ambient loop for a track. Idempotent per track.
    fn play(&mut self, track: CueTrack);

    /// Silence every loop. Idempotent and safe when nothing is playing.
    fn stop_all(&mut self);
}

/// No-op implementation for headless use
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioCue for NullAudio {
    fn play(&mut self, _track: CueTrack) {}

    fn stop_all(&mut self) {}
}

/// Plays bundled cue files through the system audio player
///
/// Currently only implements macOS playback via `afplay`.
pub struct SystemAudio {
    #[cfg(target_os = "macos")]
    children: Vec<std::process::Child>,
}

impl SystemAudio {
    pub fn new() -> Self {
        Self {
            #[cfg(target_os = "macos")]
            children: Vec::new(),
        }
    }
}

impl Default for SystemAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioCue for SystemAudio {
    fn play(&mut self, track: CueTrack) {
        #[cfg(target_os = "macos")]
        {
            let path = format!("assets/{}.mp3", track.id());
            match std::process::Command::new("afplay").arg(&path).spawn() {
                Ok(child) => self.children.push(child),
                Err(e) => {
                    // Timer correctness never depends on audio success
                    tracing::warn!(track = track.id(), error = %e, "failed to start cue loop");
                }
            }
        }

        #[cfg(not(target_os = "macos"))]
        {
            let _ = track;
        }
    }

    fn stop_all(&mut self) {
        #[cfg(target_os = "macos")]
        {
            for mut child in self.children.drain(..) {
                if let Err(e) = child.kill() {
                    tracing::debug!(error = %e, "cue loop already exited");
                }
                let _ = child.wait();
            }
        }
    }
}

impl Drop for SystemAudio {
    fn drop(&mut self) {
        self.stop_all();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// What a cue sink was asked to do, in order
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CueEvent {
        Play(CueTrack),
        StopAll,
    }

    /// Records every call for ordering assertions
    #[derive(Debug, Default)]
    pub struct RecordingAudio {
        pub events: Vec<CueEvent>,
    }

    impl RecordingAudio {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn clear(&mut self) {
            self.events.clear();
        }
    }

    impl AudioCue for RecordingAudio {
        fn play(&mut self, track: CueTrack) {
            self.events.push(CueEvent::Play(track));
        }

        fn stop_all(&mut self) {
            self.events.push(CueEvent::StopAll);
        }
    }
}
