//! Activity classification.
//!
//! Decides which observed host activity warrants waking the archival
//! server and forwards the decision to the engine with a readable reason
//! string. Classification is plain substring matching over item paths;
//! anything smarter belongs to the hosting application.

use std::sync::Arc;

use rouser_types::{MonitorSettings, WakeConfig};

use crate::wol::transmit::{Transport, UdpBroadcast};
use crate::wol::trigger::{TriggerResult, WakeTrigger};

/// What kind of host activity was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// Playback of a library item started.
    PlaybackStart,
    /// A library item was requested (browse/API hit).
    ItemRequest,
}

/// Watches host activity and fires the wake trigger when an observed
/// item lives on the remote machine.
pub struct ActivityMonitor<T: Transport = UdpBroadcast> {
    trigger: Arc<WakeTrigger<T>>,
}

impl<T: Transport> ActivityMonitor<T> {
    #[must_use]
    pub fn new(trigger: Arc<WakeTrigger<T>>) -> Self {
        Self { trigger }
    }

    /// Classify one observed item and trigger a wake when it looks like
    /// remote media. Returns `None` when the activity was ignored —
    /// auto-wake disabled, the activity kind gated off, or the path not
    /// matching any remote marker.
    pub async fn observe(
        &self,
        kind: ActivityKind,
        path: &str,
        settings: &MonitorSettings,
        wake: &WakeConfig,
    ) -> Option<TriggerResult> {
        if !settings.enable_auto_wake {
            return None;
        }
        match kind {
            ActivityKind::PlaybackStart if !settings.wake_on_playback_start => return None,
            ActivityKind::ItemRequest if !settings.wake_on_first_api_hit => return None,
            _ => {}
        }
        if !is_remote_path(path, &settings.remote_path_markers) {
            tracing::debug!(path, "activity ignored: not a remote path");
            return None;
        }

        let reason = match kind {
            ActivityKind::PlaybackStart => format!("playback started: {path}"),
            ActivityKind::ItemRequest => format!("item requested: {path}"),
        };
        tracing::info!(%reason, "remote activity detected, triggering wake");
        Some(self.trigger.try_send(wake, &reason).await)
    }
}

/// Case-insensitive substring match against the configured markers. An
/// empty marker list treats every path as remote.
#[must_use]
pub fn is_remote_path(path: &str, markers: &[String]) -> bool {
    if markers.is_empty() {
        return true;
    }
    let path = path.to_lowercase();
    markers
        .iter()
        .filter(|marker| !marker.is_empty())
        .any(|marker| path.contains(&marker.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rouser_types::ThrottlePolicy;

    fn markers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn settings() -> MonitorSettings {
        MonitorSettings {
            enable_auto_wake: true,
            wake_on_playback_start: true,
            wake_on_first_api_hit: false,
            remote_path_markers: markers(&["/mnt/archive"]),
        }
    }

    fn wake_config() -> WakeConfig {
        WakeConfig {
            mac_address: "AA:BB:CC:DD:EE:FF".to_string(),
            broadcast_address: "127.0.0.1".to_string(),
            broadcast_port: 9,
            throttle: ThrottlePolicy::unlimited(),
        }
    }

    #[test]
    fn empty_marker_list_matches_everything() {
        assert!(is_remote_path("/anything/at/all.mkv", &[]));
    }

    #[test]
    fn marker_match_is_case_insensitive_substring() {
        let m = markers(&["/mnt/Archive"]);
        assert!(is_remote_path("/MNT/ARCHIVE/movies/film.mkv", &m));
        assert!(!is_remote_path("/mnt/local/film.mkv", &m));
    }

    #[test]
    fn blank_markers_are_ignored() {
        let m = markers(&["", "/mnt/archive"]);
        assert!(!is_remote_path("/somewhere/else", &m));
    }

    #[tokio::test]
    async fn disabled_auto_wake_ignores_everything() {
        let monitor = ActivityMonitor::new(Arc::new(WakeTrigger::new()));
        let mut s = settings();
        s.enable_auto_wake = false;

        let result = monitor
            .observe(
                ActivityKind::PlaybackStart,
                "/mnt/archive/film.mkv",
                &s,
                &wake_config(),
            )
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn gated_activity_kind_is_ignored() {
        let monitor = ActivityMonitor::new(Arc::new(WakeTrigger::new()));
        // wake_on_first_api_hit is false in the default test settings.
        let result = monitor
            .observe(
                ActivityKind::ItemRequest,
                "/mnt/archive/film.mkv",
                &settings(),
                &wake_config(),
            )
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn local_path_is_ignored_without_touching_the_engine() {
        let trigger = Arc::new(WakeTrigger::new());
        let monitor = ActivityMonitor::new(Arc::clone(&trigger));

        let result = monitor
            .observe(
                ActivityKind::PlaybackStart,
                "/mnt/local/film.mkv",
                &settings(),
                &wake_config(),
            )
            .await;

        assert!(result.is_none());
        assert_eq!(trigger.attempt_count(), 0);
    }
}
