//! UDP broadcast transmission.
//!
//! One send = one ephemeral socket: bind, set the broadcast flag, fire a
//! single datagram, drop the socket. Nothing is pooled and nothing is
//! retried here; retry policy belongs to callers and the throttle layer.

use std::net::{IpAddr, SocketAddr};

use tokio::net::UdpSocket;

use crate::error::{ConfigError, TransmitError};

/// Transport seam the engine is generic over, so tests can substitute a
/// recording or failing implementation for the real socket.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Send one datagram; returns the number of bytes written.
    async fn send_to(&self, payload: &[u8], dest: SocketAddr) -> Result<usize, TransmitError>;
}

/// The real transport: an unconnected broadcast-capable UDP socket that
/// lives only for the duration of one send.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpBroadcast;

impl Transport for UdpBroadcast {
    async fn send_to(&self, payload: &[u8], dest: SocketAddr) -> Result<usize, TransmitError> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))
            .await
            .map_err(TransmitError::Socket)?;
        socket.set_broadcast(true).map_err(TransmitError::Socket)?;

        let written = socket
            .send_to(payload, dest)
            .await
            .map_err(|source| TransmitError::Send { dest, source })?;
        if written != payload.len() {
            return Err(TransmitError::ShortSend {
                written,
                expected: payload.len(),
            });
        }
        Ok(written)
        // Socket dropped here, closing the descriptor regardless of outcome.
    }
}

/// Parse the configured broadcast address and port into a socket address.
///
/// Address-parse failures are configuration errors and surface before any
/// socket is opened.
pub fn resolve_broadcast(address: &str, port: u16) -> Result<SocketAddr, ConfigError> {
    let ip: IpAddr = address
        .trim()
        .parse()
        .map_err(|source| ConfigError::BroadcastInvalid {
            address: address.to_string(),
            source,
        })?;
    Ok(SocketAddr::new(ip, port))
}
