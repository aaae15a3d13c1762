use serde::{Deserialize, Serialize};

use super::frame::FrameTelemetry;

/// Aggregate view over a frame sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSummary {
    pub count: usize,
    pub avg_confidence: f64,
    pub max_people: i32,
    pub min_people: i32,
}

/// Summarize an arbitrary frame slice, not necessarily the store's own
/// buffer. Pure function of its input.
///
/// Empty input returns the all-zero summary. Otherwise:
/// - `avg_confidence` is the plain arithmetic mean, with NO finiteness
///   guard: a NaN or infinite confidence flows straight into the mean.
///   `TelemetryStore::avg_confidence` neutralizes such values instead;
///   the two are deliberately NOT unified (divergence inherited from the
///   original contract).
/// - `max_people` folds from a seed of 0, so an all-negative sequence
///   reports 0 rather than the true maximum.
/// - `min_people` folds from the first element's count.
pub fn summarize(frames: &[FrameTelemetry]) -> FrameSummary {
    let Some(first) = frames.first() else {
        return FrameSummary::default();
    };

    let count = frames.len();
    let avg_confidence = frames.iter().map(|f| f.confidence).sum::<f64>() / count as f64;
    let max_people = frames.iter().fold(0, |m, f| m.max(f.people_count));
    let min_people = frames
        .iter()
        .fold(first.people_count, |m, f| m.min(f.people_count));

    FrameSummary {
        count,
        avg_confidence,
        max_people,
        min_people,
    }
}
