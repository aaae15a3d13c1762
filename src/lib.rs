pub mod recording;
pub mod telemetry;
pub mod time;

// Re-export specific items if needed for convenient access
pub use telemetry::store::TelemetryStore;
