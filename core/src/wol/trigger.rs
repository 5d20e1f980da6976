//! The wake-trigger engine.
//!
//! Composes throttle evaluation, packet construction and transmission
//! behind a single-flight guard. The tokio mutex around [`ThrottleState`]
//! is held for the duration of one full attempt, so overlapping trigger
//! requests collapse into at most one additional send instead of
//! serializing into N sends.

use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tokio::time::timeout;

use rouser_types::WakeConfig;

use crate::error::{ConfigError, TransmitError};
use crate::wol::mac::MacAddress;
use crate::wol::packet::MagicPacket;
use crate::wol::throttle::{self, Decision, DenyReason, ThrottleState};
use crate::wol::transmit::{Transport, UdpBroadcast, resolve_broadcast};

/// How long a concurrent caller waits for the single-flight guard before
/// giving up with [`TriggerOutcome::InFlight`].
pub const DEFAULT_GUARD_WAIT: Duration = Duration::from_secs(5);

/// How one trigger attempt finished.
#[derive(Debug)]
pub enum TriggerOutcome {
    /// The packet left the local host and state was committed.
    Sent,
    /// Suppressed by the throttle policy; state untouched.
    Denied(DenyReason),
    /// Another attempt held the guard for the whole bounded wait.
    InFlight,
    /// Missing or invalid configuration; state untouched.
    Config(ConfigError),
    /// The send failed locally; state untouched so a later call retries.
    Transmit(TransmitError),
}

impl TriggerOutcome {
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Snapshot handed back to the caller after every attempt, successful or
/// not. Not persisted anywhere.
#[derive(Debug)]
pub struct TriggerResult {
    pub outcome: TriggerOutcome,
    /// Parsed target MAC, when configuration got that far.
    pub mac: Option<MacAddress>,
    /// Wall-clock time the attempt finished.
    pub timestamp: DateTime<Utc>,
    /// Attempt count after the call.
    pub attempt_count: u32,
    /// Seconds since the last successful send; `None` if never.
    pub secs_since_last_sent: Option<u64>,
}

/// Wake-on-LAN trigger engine.
///
/// One instance per process, shared by handle. `try_send` is the only
/// state-mutating entry point; the snapshot queries never block and can
/// at worst lag an in-flight commit, never observe a torn value.
pub struct WakeTrigger<T: Transport = UdpBroadcast> {
    transport: T,
    /// Authoritative throttle state. Holding this lock across a full
    /// attempt IS the single-flight guard.
    state: Mutex<ThrottleState>,
    guard_wait: Duration,
    /// Construction instant; published send times are relative to it.
    epoch: Instant,
    // Published mirrors of the committed state, for lock-free snapshots.
    attempts: AtomicU32,
    /// Millis since `epoch` of the last successful send, -1 = never.
    last_sent_ms: AtomicI64,
}

impl WakeTrigger<UdpBroadcast> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(UdpBroadcast)
    }
}

impl Default for WakeTrigger<UdpBroadcast> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> WakeTrigger<T> {
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            state: Mutex::new(ThrottleState::default()),
            guard_wait: DEFAULT_GUARD_WAIT,
            epoch: Instant::now(),
            attempts: AtomicU32::new(0),
            last_sent_ms: AtomicI64::new(-1),
        }
    }

    /// Override the bounded guard wait.
    #[must_use]
    pub fn with_guard_wait(mut self, wait: Duration) -> Self {
        self.guard_wait = wait;
        self
    }

    /// Attempt to send a wake packet to the configured target.
    ///
    /// Safe to call concurrently. Every failure mode comes back as a
    /// structured [`TriggerResult`]; nothing here panics, and state is
    /// committed only when the packet actually left the host.
    pub async fn try_send(&self, config: &WakeConfig, reason: &str) -> TriggerResult {
        let Ok(mut state) = timeout(self.guard_wait, self.state.lock()).await else {
            tracing::warn!(reason, "wake already in progress, backing off");
            return self.result(TriggerOutcome::InFlight, None);
        };

        // Fail fast on configuration before touching any state.
        if config.mac_address.trim().is_empty() {
            tracing::warn!("wake not sent: MAC address not configured");
            return self.result(TriggerOutcome::Config(ConfigError::MacMissing), None);
        }
        let mac = match MacAddress::parse(&config.mac_address) {
            Ok(mac) => mac,
            Err(err) => {
                tracing::warn!(%err, mac = %config.mac_address, "wake not sent: invalid MAC address");
                return self.result(TriggerOutcome::Config(err.into()), None);
            }
        };

        let now = Instant::now();
        if let Decision::Deny(deny) = throttle::evaluate(&state, &config.throttle, now) {
            tracing::info!(reason, %deny, "wake suppressed");
            return self.result(TriggerOutcome::Denied(deny), Some(mac));
        }

        let dest = match resolve_broadcast(&config.broadcast_address, config.broadcast_port) {
            Ok(dest) => dest,
            Err(err) => {
                tracing::warn!(%err, "wake not sent: bad broadcast target");
                return self.result(TriggerOutcome::Config(err), Some(mac));
            }
        };

        let packet = MagicPacket::for_mac(mac);
        match self.transport.send_to(packet.as_bytes(), dest).await {
            Ok(_) => {
                // A send counts once it leaves the local host; UDP gives
                // no delivery confirmation and none is waited for.
                state.last_sent_at = Some(now);
                state.attempt_count += 1;
                self.publish(&state);
                tracing::info!(
                    %mac, %dest, attempt = state.attempt_count, reason,
                    "magic packet sent"
                );
                self.result(TriggerOutcome::Sent, Some(mac))
            }
            Err(err) => {
                tracing::error!(%err, %mac, %dest, "failed to send magic packet");
                self.result(TriggerOutcome::Transmit(err), Some(mac))
            }
        }
    }

    /// Zero the attempt counter. Waits for any in-flight attempt to
    /// finish first; the last-send time is left alone.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.attempt_count = 0;
        self.attempts.store(0, Ordering::SeqCst);
        tracing::info!("wake attempt counter reset");
    }

    /// Successful sends since construction or the last reset.
    #[must_use]
    pub fn attempt_count(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Seconds since the last successful send; `None` if nothing has
    /// been sent yet.
    #[must_use]
    pub fn secs_since_last_sent(&self) -> Option<u64> {
        let ms = self.last_sent_ms.load(Ordering::SeqCst);
        if ms < 0 {
            return None;
        }
        let last = self.epoch + Duration::from_millis(ms as u64);
        Some(Instant::now().saturating_duration_since(last).as_secs())
    }

    /// Refresh the published snapshot from committed state. Called with
    /// the guard held, immediately after a commit.
    fn publish(&self, state: &ThrottleState) {
        self.attempts.store(state.attempt_count, Ordering::SeqCst);
        if let Some(last) = state.last_sent_at {
            let ms = last.duration_since(self.epoch).as_millis() as i64;
            self.last_sent_ms.store(ms, Ordering::SeqCst);
        }
    }

    fn result(&self, outcome: TriggerOutcome, mac: Option<MacAddress>) -> TriggerResult {
        TriggerResult {
            outcome,
            mac,
            timestamp: Utc::now(),
            attempt_count: self.attempt_count(),
            secs_since_last_sent: self.secs_since_last_sent(),
        }
    }
}
