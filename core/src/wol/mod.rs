pub mod mac;
pub mod packet;
pub mod throttle;
pub mod transmit;
pub mod trigger;


pub use mac::{MacAddress, MacParseError};
pub use packet::{MAC_REPEATS, MagicPacket, PACKET_LEN, SYNC_LEN};
pub use throttle::{Decision, DenyReason, ThrottleState, evaluate};
pub use transmit::{Transport, UdpBroadcast, resolve_broadcast};
pub use trigger::{DEFAULT_GUARD_WAIT, TriggerOutcome, TriggerResult, WakeTrigger};
