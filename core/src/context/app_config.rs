//! Application configuration, persisted per-user via confy.

use serde::{Deserialize, Serialize};

use rouser_types::{MonitorSettings, ThrottlePolicy, WakeConfig};

const APP_NAME: &str = "rouser";

/// Everything the hosting side configures. Flat on disk (one TOML table)
/// so hand-editing stays simple; the engine-facing views are projected
/// with [`AppConfig::wake_config`] and [`AppConfig::monitor_settings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Target server MAC address.
    pub mac_address: String,
    /// Broadcast address for the magic packet.
    pub broadcast_address: String,
    /// Broadcast UDP port.
    pub broadcast_port: u16,
    /// Hard minimum seconds between successful sends.
    pub cooldown_seconds: u64,
    /// Secondary minimum seconds between successful sends.
    pub min_wake_interval_seconds: u64,
    /// Successful sends allowed before a reset is required; 0 = unlimited.
    pub max_wake_attempts: u32,
    /// Master switch for automatic wakes.
    pub enable_auto_wake: bool,
    /// Wake when playback starts.
    pub wake_on_playback_start: bool,
    /// Wake on the first API hit for an item.
    pub wake_on_first_api_hit: bool,
    /// Surface "waking up the archive" messages to users.
    pub show_user_messages: bool,
    /// Substrings identifying paths that live on the remote machine.
    pub remote_path_markers: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // Placeholder the operator is expected to replace.
            mac_address: "00:11:22:33:44:55".to_string(),
            broadcast_address: "255.255.255.255".to_string(),
            broadcast_port: 9,
            cooldown_seconds: 300,
            min_wake_interval_seconds: 60,
            max_wake_attempts: 3,
            enable_auto_wake: true,
            wake_on_playback_start: true,
            wake_on_first_api_hit: false,
            show_user_messages: true,
            remote_path_markers: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load from the per-user config file, falling back to defaults when
    /// the file is missing or unreadable.
    #[must_use]
    pub fn load() -> Self {
        confy::load(APP_NAME, None).unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load config, using defaults");
            Self::default()
        })
    }

    /// Persist to the per-user config file. Failures are logged, not
    /// propagated; stale on-disk config is not worth crashing over.
    pub fn save(&self) {
        if let Err(err) = confy::store(APP_NAME, None, self) {
            tracing::error!(%err, "failed to save config");
        }
    }

    /// Engine-facing view of the wake target.
    #[must_use]
    pub fn wake_config(&self) -> WakeConfig {
        WakeConfig {
            mac_address: self.mac_address.clone(),
            broadcast_address: self.broadcast_address.clone(),
            broadcast_port: self.broadcast_port,
            throttle: self.throttle_policy(),
        }
    }

    /// Throttle knobs as the engine consumes them.
    #[must_use]
    pub const fn throttle_policy(&self) -> ThrottlePolicy {
        ThrottlePolicy {
            cooldown_seconds: self.cooldown_seconds,
            min_interval_seconds: self.min_wake_interval_seconds,
            max_attempts: self.max_wake_attempts,
        }
    }

    /// Classifier-facing view.
    #[must_use]
    pub fn monitor_settings(&self) -> MonitorSettings {
        MonitorSettings {
            enable_auto_wake: self.enable_auto_wake,
            wake_on_playback_start: self.wake_on_playback_start,
            wake_on_first_api_hit: self.wake_on_first_api_hit,
            remote_path_markers: self.remote_path_markers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipping_configuration() {
        let config = AppConfig::default();
        assert_eq!(config.broadcast_address, "255.255.255.255");
        assert_eq!(config.broadcast_port, 9);
        assert_eq!(config.cooldown_seconds, 300);
        assert_eq!(config.min_wake_interval_seconds, 60);
        assert_eq!(config.max_wake_attempts, 3);
        assert!(config.enable_auto_wake);
    }

    #[test]
    fn projections_carry_the_same_values() {
        let mut config = AppConfig::default();
        config.mac_address = "AA:BB:CC:DD:EE:FF".to_string();
        config.cooldown_seconds = 120;

        let wake = config.wake_config();
        assert_eq!(wake.mac_address, "AA:BB:CC:DD:EE:FF");
        assert_eq!(wake.throttle.cooldown_seconds, 120);
        assert_eq!(wake.throttle.min_interval_seconds, 60);

        let monitor = config.monitor_settings();
        assert!(monitor.wake_on_playback_start);
        assert!(!monitor.wake_on_first_api_hit);
    }
}
