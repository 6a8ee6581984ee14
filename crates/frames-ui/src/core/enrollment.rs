//! Face enrollment capture bookkeeping and progress narrative.
//!
//! # Design
//! - Capture stops exactly at [`REQUIRED_FRAMES`]; late frames from the interval are dropped.
//! - Submission is possible only with a full frame set.
//! - Progress phases are cosmetic timers; the last one holds until the backend answers.

/// Frames collected before submission is allowed.
pub const REQUIRED_FRAMES: usize = 15;
/// Delay between captures.
pub const CAPTURE_INTERVAL_MS: u32 = 500;
/// JPEG quality passed to `toDataURL`.
pub const JPEG_QUALITY: f64 = 0.8;
/// Ideal camera resolution.
pub const CAMERA_IDEAL: (u32, u32) = (640, 480);
/// Pause before leaving the page after success.
pub const REDIRECT_DELAY_MS: u32 = 2_000;
/// Shown when `getUserMedia` fails.
pub const CAMERA_ERROR: &str = "Failed to access camera. Please allow camera permissions.";

/// One step of the simulated progress narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Status line.
    pub message: &'static str,
    /// Time before the next phase starts.
    pub duration_ms: u32,
}

/// Progress narrative shown while the enrollment request is in flight.
pub const PHASES: [Phase; 5] = [
    Phase {
        message: "Uploading frames...",
        duration_ms: 1_000,
    },
    Phase {
        message: "Loading AI model...",
        duration_ms: 2_000,
    },
    Phase {
        message: "Detecting faces...",
        duration_ms: 3_000,
    },
    Phase {
        message: "Extracting features...",
        duration_ms: 5_000,
    },
    Phase {
        message: "Saving to database...",
        duration_ms: 2_000,
    },
];

/// Phase shown `elapsed_ms` after submission; the final phase holds indefinitely.
#[must_use]
pub fn phase_at(elapsed_ms: u32) -> Phase {
    let mut boundary = 0_u32;
    for phase in PHASES {
        boundary = boundary.saturating_add(phase.duration_ms);
        if elapsed_ms < boundary {
            return phase;
        }
    }
    PHASES[PHASES.len() - 1]
}

/// Outcome of recording one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureProgress {
    /// Keep the interval running.
    Continue,
    /// Threshold reached; stop the interval.
    Complete,
    /// Not capturing; the frame was discarded.
    Ignored,
}

/// Frames captured so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureState {
    frames: Vec<String>,
    capturing: bool,
}

impl CaptureState {
    /// Drop previous frames and begin a new capture run.
    pub fn start(&mut self) {
        self.frames.clear();
        self.capturing = true;
    }

    /// Discard everything and return to idle.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.capturing = false;
    }

    /// Record a captured data URL.
    pub fn push(&mut self, frame: String) -> CaptureProgress {
        if !self.capturing {
            return CaptureProgress::Ignored;
        }
        self.frames.push(frame);
        if self.frames.len() >= REQUIRED_FRAMES {
            self.capturing = false;
            CaptureProgress::Complete
        } else {
            CaptureProgress::Continue
        }
    }

    /// Whether the interval is running.
    #[must_use]
    pub const fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// Frames held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.frames.len()
    }

    /// Captured frames in order.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Submission is allowed only with a complete set.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.capturing && self.frames.len() >= REQUIRED_FRAMES
    }

    /// Progress bar fill, 0 to 100.
    #[must_use]
    pub fn percent(&self) -> usize {
        self.frames.len().min(REQUIRED_FRAMES) * 100 / REQUIRED_FRAMES
    }

    /// Status line for the capture area.
    #[must_use]
    pub fn status_line(&self) -> String {
        if self.capturing {
            format!("Capturing frames... ({}/{REQUIRED_FRAMES})", self.frames.len())
        } else if self.can_submit() {
            "Capture complete! Click \"Enroll Face\" to save.".to_string()
        } else {
            "Camera ready. Click \"Start Capture\" to begin.".to_string()
        }
    }
}

/// Success banner for a quality score in `0.0..=1.0`.
#[must_use]
pub fn success_message(quality_score: f64) -> String {
    format!("Successfully enrolled! Quality: {:.0}%", quality_score * 100.0)
}

/// Holds the live camera stream between the async open and page teardown.
///
/// Once closed, a stream that arrives late is handed straight back so the
/// caller can stop its tracks.
#[derive(Debug)]
pub struct CameraSlot<S> {
    stream: Option<S>,
    closed: bool,
}

impl<S> Default for CameraSlot<S> {
    fn default() -> Self {
        Self {
            stream: None,
            closed: false,
        }
    }
}

impl<S> CameraSlot<S> {
    /// Keep `stream`; returns the stream the caller must stop, if any.
    pub fn attach(&mut self, stream: S) -> Option<S> {
        if self.closed {
            Some(stream)
        } else {
            self.stream.replace(stream)
        }
    }

    /// Close the slot and take the stream to stop.
    pub fn close(&mut self) -> Option<S> {
        self.closed = true;
        self.stream.take()
    }

    /// Whether a stream is currently held.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.stream.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(state: &mut CaptureState, count: usize) -> CaptureProgress {
        let mut last = CaptureProgress::Ignored;
        for index in 0..count {
            last = state.push(format!("data:image/jpeg;base64,{index}"));
        }
        last
    }

    #[test]
    fn capture_stops_exactly_at_threshold() {
        let mut state = CaptureState::default();
        state.start();
        assert_eq!(capture(&mut state, REQUIRED_FRAMES - 1), CaptureProgress::Continue);
        assert!(!state.can_submit());
        assert_eq!(state.push("last".into()), CaptureProgress::Complete);
        assert_eq!(state.count(), REQUIRED_FRAMES);
        assert!(state.can_submit());
        assert_eq!(state.push("late".into()), CaptureProgress::Ignored);
        assert_eq!(state.count(), REQUIRED_FRAMES);
    }

    #[test]
    fn fourteen_frames_cannot_submit() {
        let mut state = CaptureState::default();
        state.start();
        capture(&mut state, 14);
        assert!(!state.can_submit());
        assert_eq!(state.status_line(), "Capturing frames... (14/15)");
    }

    #[test]
    fn restart_clears_frames() {
        let mut state = CaptureState::default();
        state.start();
        capture(&mut state, REQUIRED_FRAMES);
        state.start();
        assert_eq!(state.count(), 0);
        assert_eq!(state.percent(), 0);
        state.reset();
        assert!(!state.is_capturing());
    }

    #[test]
    fn phases_advance_and_hold_last() {
        assert_eq!(phase_at(0).message, "Uploading frames...");
        assert_eq!(phase_at(1_000).message, "Loading AI model...");
        assert_eq!(phase_at(6_500).message, "Extracting features...");
        assert_eq!(phase_at(60_000).message, "Saving to database...");
    }

    #[test]
    fn success_message_rounds_quality() {
        assert_eq!(success_message(0.914), "Successfully enrolled! Quality: 91%");
    }

    #[test]
    fn late_stream_is_returned_after_close() {
        let mut slot = CameraSlot::default();
        assert_eq!(slot.close(), None);
        assert_eq!(slot.attach("camera"), Some("camera"));
        assert!(!slot.is_open());
    }

    #[test]
    fn open_slot_keeps_stream_until_close() {
        let mut slot = CameraSlot::default();
        assert_eq!(slot.attach("first"), None);
        assert!(slot.is_open());
        assert_eq!(slot.attach("second"), Some("first"));
        assert_eq!(slot.close(), Some("second"));
        assert!(!slot.is_open());
    }
}
