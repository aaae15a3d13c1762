//! Recording-session metadata.
//!
//! A session is a span of wall-clock time with a start and an optional
//! stop, optionally associated with an exported file. The log only tracks
//! metadata; actual capture and export live elsewhere.

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::time::now_millis;

/// Metadata for one recording session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingItem {
    pub id: String,
    pub title: String,
    /// Wall-clock millis at creation, immutable thereafter.
    pub start_time: i64,
    /// Set when the session is stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// Set at stop time if an export file was produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// Unbounded log of sessions, most recently started first.
///
/// Two-phase lifecycle (running -> stopped), not enforced: stopping a
/// stopped session silently re-applies the stop.
#[derive(Debug, Default)]
pub struct RecordingLog {
    items: Vec<RecordingItem>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[RecordingItem] {
        &self.items
    }

    /// Start a session and return its id.
    ///
    /// Ids are uuid v4 rather than stringified wall-clock millis; two
    /// sessions started within the same millisecond must not collide.
    pub fn start(&mut self, title: Option<&str>) -> String {
        let id = Uuid::new_v4().to_string();
        let title = match title {
            Some(t) => t.to_string(),
            None => format!("Recording {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
        };
        info!(%id, %title, "recording started");
        self.items.insert(
            0,
            RecordingItem {
                id: id.clone(),
                title,
                start_time: now_millis(),
                end_time: None,
                file_url: None,
            },
        );
        id
    }

    /// Stop the session with the given id, attaching `file_url` if
    /// supplied. Returns false (and leaves the log unchanged) when no
    /// session matches.
    pub fn stop(&mut self, id: &str, file_url: Option<&str>) -> bool {
        match self.items.iter_mut().find(|r| r.id == id) {
            Some(item) => {
                item.end_time = Some(now_millis());
                if let Some(url) = file_url {
                    item.file_url = Some(url.to_string());
                }
                info!(%id, "recording stopped");
                true
            }
            None => {
                warn!(%id, "stop requested for unknown recording");
                false
            }
        }
    }
}
