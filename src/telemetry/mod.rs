//! Telemetry buffering & derived statistics.
//!
//! # ORDERING INVARIANT
//! The frame buffer preserves insertion order and never re-sorts by
//! timestamp. Producers own timestamp semantics; duplicates and
//! out-of-order stamps are stored as-is.
//!
//! # BOUNDING INVARIANT
//! The buffer never holds more than `max_points` frames. Overflow evicts
//! the oldest frames in a single batch, so after any insert the survivors
//! are exactly the most recent `max_points` entries.

pub mod frame;
pub mod stats;
pub mod store;

pub use frame::FrameTelemetry;
pub use stats::{summarize, FrameSummary};
