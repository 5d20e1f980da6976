//! Magic packet wire format.
//!
//! A wake broadcast is a single UDP datagram: six `0xFF` synchronization
//! bytes followed by the target MAC repeated sixteen times. Nothing else
//! goes over the wire.

use crate::wol::mac::{MAC_LEN, MacAddress};

/// Length of the `0xFF` synchronization header.
pub const SYNC_LEN: usize = 6;
/// How many times the MAC is repeated after the header.
pub const MAC_REPEATS: usize = 16;
/// Total wire size of a magic packet (102 bytes).
pub const PACKET_LEN: usize = SYNC_LEN + MAC_REPEATS * MAC_LEN;

/// An immutable, fully-built magic packet.
///
/// Purely derived from a [`MacAddress`]; building cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicPacket {
    buf: [u8; PACKET_LEN],
}

impl MagicPacket {
    /// Build the packet for one target address.
    #[must_use]
    pub fn for_mac(mac: MacAddress) -> Self {
        let mut buf = [0xFF; PACKET_LEN];
        let octets = mac.octets();
        for repeat in buf[SYNC_LEN..].chunks_exact_mut(MAC_LEN) {
            repeat.copy_from_slice(&octets);
        }
        Self { buf }
    }

    /// The full 102-byte datagram payload.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_mac() -> MacAddress {
        MacAddress::parse("AA:BB:CC:DD:EE:FF").unwrap()
    }

    #[test]
    fn packet_is_exactly_102_bytes() {
        let packet = MagicPacket::for_mac(example_mac());
        assert_eq!(packet.as_bytes().len(), 102);
        assert_eq!(packet.as_bytes().len(), PACKET_LEN);
    }

    #[test]
    fn sync_header_is_six_ff_bytes() {
        let packet = MagicPacket::for_mac(example_mac());
        assert_eq!(&packet.as_bytes()[..SYNC_LEN], &[0xFF; 6]);
    }

    #[test]
    fn mac_is_repeated_sixteen_times() {
        let mac = example_mac();
        let packet = MagicPacket::for_mac(mac);
        let bytes = packet.as_bytes();
        for i in 0..MAC_REPEATS {
            let start = SYNC_LEN + i * MAC_LEN;
            assert_eq!(
                &bytes[start..start + MAC_LEN],
                &mac.octets(),
                "repeat {i} is corrupted"
            );
        }
    }

    #[test]
    fn distinct_macs_produce_distinct_packets() {
        let a = MagicPacket::for_mac(MacAddress::parse("00:11:22:33:44:55").unwrap());
        let b = MagicPacket::for_mac(example_mac());
        assert_ne!(a, b);
    }
}
