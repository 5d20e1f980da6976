pub mod context;
pub mod error;
pub mod monitor;
pub mod wol;

// Re-exports for convenience
pub use context::AppConfig;
pub use error::{ConfigError, TransmitError};
pub use monitor::{ActivityKind, ActivityMonitor};
pub use wol::{MacAddress, MagicPacket, TriggerOutcome, TriggerResult, WakeTrigger};
