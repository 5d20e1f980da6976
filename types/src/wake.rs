//! Engine-facing configuration snapshots.
//!
//! These are plain value types passed into the wake engine on every call.
//! The engine never owns them; the hosting side (CLI, config file) decides
//! where they come from and when they change.

use serde::{Deserialize, Serialize};

/// Throttling knobs evaluated on every trigger attempt.
///
/// A value of `0` disables the corresponding limit. Cooldown and
/// min-interval are both gates on time since the last successful send;
/// keeping them separate lets an operator express a hard floor and a
/// soft floor independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottlePolicy {
    /// Hard minimum seconds between any two successful sends.
    pub cooldown_seconds: u64,
    /// Secondary minimum seconds between sends.
    pub min_interval_seconds: u64,
    /// Maximum successful sends before the engine refuses further
    /// attempts until reset.
    pub max_attempts: u32,
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self {
            cooldown_seconds: 300,
            min_interval_seconds: 60,
            max_attempts: 3,
        }
    }
}

impl ThrottlePolicy {
    /// Policy with every limit disabled. Useful for manual "send it now"
    /// paths and tests.
    pub const fn unlimited() -> Self {
        Self {
            cooldown_seconds: 0,
            min_interval_seconds: 0,
            max_attempts: 0,
        }
    }
}

/// Everything the engine needs to address one wake target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WakeConfig {
    /// Target MAC address, any common textual form.
    pub mac_address: String,
    /// Broadcast address the magic packet is sent to.
    pub broadcast_address: String,
    /// UDP port for the broadcast (conventionally 9, sometimes 7).
    pub broadcast_port: u16,
    /// Throttling applied to this target.
    pub throttle: ThrottlePolicy,
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            mac_address: String::new(),
            broadcast_address: "255.255.255.255".to_string(),
            broadcast_port: 9,
            throttle: ThrottlePolicy::default(),
        }
    }
}

/// Which observed activity is allowed to wake the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorSettings {
    /// Master switch for automatic wakes; manual triggers bypass this.
    pub enable_auto_wake: bool,
    /// Wake when playback of a library item starts.
    pub wake_on_playback_start: bool,
    /// Wake on the first API/browse request for an item.
    pub wake_on_first_api_hit: bool,
    /// Case-insensitive substrings identifying remote-library paths.
    /// Empty means every observed path counts as remote.
    pub remote_path_markers: Vec<String>,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            enable_auto_wake: true,
            wake_on_playback_start: true,
            wake_on_first_api_hit: false,
            remote_path_markers: Vec::new(),
        }
    }
}
