use tracing::debug;

use super::frame::FrameTelemetry;
use crate::recording::{RecordingItem, RecordingLog};

/// Default buffer bound: 10 minutes of history at one frame per second.
pub const MAX_POINTS_DEFAULT: usize = 600;

/// In-memory store for recent telemetry plus recording-session metadata.
///
/// Owned and driven by a single logical thread (the UI event loop in the
/// original deployment); every operation is a plain synchronous state edit.
/// Construct one instance and pass it by reference to whatever binding
/// layer needs it rather than hiding it behind a global.
#[derive(Debug)]
pub struct TelemetryStore {
    frames: Vec<FrameTelemetry>,
    max_points: usize,
    recordings: RecordingLog,
}

impl Default for TelemetryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryStore {
    pub fn new() -> Self {
        Self::with_max_points(MAX_POINTS_DEFAULT)
    }

    pub fn with_max_points(max_points: usize) -> Self {
        Self {
            frames: Vec::with_capacity(max_points),
            max_points,
            recordings: RecordingLog::new(),
        }
    }

    /// Append a frame, evicting the oldest entries in one batch if the
    /// buffer overflows its bound. Malformed input (non-finite confidence,
    /// out-of-order timestamps) is accepted and stored as-is.
    pub fn add_frame(&mut self, frame: FrameTelemetry) {
        self.frames.push(frame);
        if self.frames.len() > self.max_points {
            let excess = self.frames.len() - self.max_points;
            self.frames.drain(..excess);
            debug!(evicted = excess, "telemetry buffer trimmed");
        }
    }

    /// Drop every buffered frame. Recordings are untouched.
    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }

    pub fn frames(&self) -> &[FrameTelemetry] {
        &self.frames
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// Change the buffer bound. The new bound is applied on the next
    /// insert, not retroactively; a bound of 0 will evict everything on
    /// each insert.
    pub fn set_max_points(&mut self, max_points: usize) {
        self.max_points = max_points;
    }

    /// Frames whose timestamp lies in the closed interval `[start, end]`,
    /// in original order. An inverted range yields an empty result.
    pub fn frames_in_range(&self, start: i64, end: i64) -> Vec<FrameTelemetry> {
        self.frames
            .iter()
            .filter(|f| f.timestamp >= start && f.timestamp <= end)
            .copied()
            .collect()
    }

    /// Most recently appended frame, if any.
    pub fn latest(&self) -> Option<&FrameTelemetry> {
        self.frames.last()
    }

    /// Mean confidence over the buffer, counting any non-finite value as 0
    /// in the sum. 0.0 when empty.
    ///
    /// Contrast `stats::summarize`, which applies no finiteness guard; the
    /// two views diverge on NaN input by inherited contract.
    pub fn avg_confidence(&self) -> f64 {
        if self.frames.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .frames
            .iter()
            .map(|f| if f.confidence.is_finite() { f.confidence } else { 0.0 })
            .sum();
        sum / self.frames.len() as f64
    }

    /// Maximum people count over the buffer, folded from a seed of 0.
    pub fn max_people(&self) -> i32 {
        self.frames.iter().fold(0, |m, f| m.max(f.people_count))
    }

    /// Minimum people count over the buffer, seeded at the first frame's
    /// count; 0 when empty.
    pub fn min_people(&self) -> i32 {
        let seed = self.frames.first().map(|f| f.people_count).unwrap_or(0);
        self.frames.iter().fold(seed, |m, f| m.min(f.people_count))
    }

    /// Recording sessions, most recently started first.
    pub fn recordings(&self) -> &[RecordingItem] {
        self.recordings.items()
    }

    /// Start a new recording session; returns its generated id.
    pub fn start_recording(&mut self, title: Option<&str>) -> String {
        self.recordings.start(title)
    }

    /// Stop the recording with the given id, attaching `file_url` if
    /// supplied. Unknown ids are a no-op; returns whether a session
    /// matched.
    pub fn stop_recording(&mut self, id: &str, file_url: Option<&str>) -> bool {
        self.recordings.stop(id, file_url)
    }
}
