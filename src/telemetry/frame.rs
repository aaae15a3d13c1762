use serde::{Deserialize, Serialize};

/// One telemetry sample from the video-analysis pipeline.
///
/// The store performs no validation here: `confidence` is nominally a
/// 0-100 percentage but is neither clamped nor checked for finiteness,
/// and `timestamp` monotonicity is the producer's problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTelemetry {
    /// Producer-assigned time marker, milliseconds.
    pub timestamp: i64,
    /// People detected in the frame.
    pub people_count: i32,
    /// Detection confidence, nominally 0-100.
    pub confidence: f64,
}

impl FrameTelemetry {
    pub fn new(timestamp: i64, people_count: i32, confidence: f64) -> Self {
        Self {
            timestamp,
            people_count,
            confidence,
        }
    }
}
