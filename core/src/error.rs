//! Error taxonomy for the wake engine.
//!
//! Throttle denials are deliberately not errors; they are expected
//! outcomes and live in [`crate::wol::throttle::DenyReason`]. Everything
//! here is caught at the trigger boundary and folded into a
//! [`crate::wol::TriggerResult`] — the engine never panics the host.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

use crate::wol::mac::MacParseError;

/// Configuration problems. Not retryable; the operator must fix the
/// configuration before another attempt can succeed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MAC address not configured")]
    MacMissing,
    #[error("invalid MAC address: {0}")]
    MacInvalid(#[from] MacParseError),
    #[error("invalid broadcast address {address:?}: {source}")]
    BroadcastInvalid {
        address: String,
        source: AddrParseError,
    },
}

/// A send that never left the local host. Throttle state is left
/// untouched so a later call can retry.
#[derive(Debug, Error)]
pub enum TransmitError {
    #[error("failed to open broadcast socket: {0}")]
    Socket(#[source] std::io::Error),
    #[error("failed to send magic packet to {dest}: {source}")]
    Send {
        dest: SocketAddr,
        source: std::io::Error,
    },
    #[error("short send: wrote {written} of {expected} bytes")]
    ShortSend { written: usize, expected: usize },
}
