use std::time::Duration;

use skysense::telemetry::{summarize, FrameTelemetry};
use skysense::time::now_millis;
use skysense::TelemetryStore;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Simulated analysis feed: stands in for the CV pipeline that publishes
/// people-count/confidence frames roughly once a second. Drives the store
/// through a short session and dumps the summary.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("skysense demo feed starting");

    let mut store = TelemetryStore::new();
    let recording_id = store.start_recording(Some("Demo sweep"));

    let mut cadence = tokio::time::interval(Duration::from_millis(100));
    cadence.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    for tick in 0..50u32 {
        cadence.tick().await;

        // Crude crowd model: a slow swell with per-frame jitter.
        let people = 2 + ((tick / 10) % 4) as i32;
        let confidence = 55.0 + 40.0 * ((tick % 10) as f64 / 10.0);
        store.add_frame(FrameTelemetry::new(now_millis(), people, confidence));

        if tick % 10 == 0 {
            tracing::info!(
                frames = store.frames().len(),
                avg_confidence = store.avg_confidence(),
                max_people = store.max_people(),
                "feed progress"
            );
        }
    }

    store.stop_recording(&recording_id, Some("file:///tmp/demo-sweep.mp4"));

    let summary = summarize(store.frames());
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if let Some(rec) = store.recordings().first() {
        println!("{}", serde_json::to_string_pretty(rec)?);
    }

    tracing::info!("skysense demo feed done");
    Ok(())
}
