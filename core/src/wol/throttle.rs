//! Layered throttling for wake attempts.
//!
//! Evaluation is a pure function over a state snapshot and a policy;
//! committing state changes is the engine's job and happens only after a
//! successful transmission.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

use rouser_types::ThrottlePolicy;

/// Mutable throttle bookkeeping, owned by the engine for the process
/// lifetime and mutated only inside the single-flight guard.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrottleState {
    /// When the last successful send committed. `None` until the first
    /// send, which makes every time gate pass.
    pub last_sent_at: Option<Instant>,
    /// Successful sends since construction or the last reset.
    pub attempt_count: u32,
}

/// Result of evaluating the policy against the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

/// Why a trigger attempt was suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// Inside the hard cooldown window.
    Cooldown { remaining_secs: u64 },
    /// Inside the secondary minimum-interval window.
    MinInterval { remaining_secs: u64 },
    /// The attempt budget is exhausted until a reset.
    MaxAttempts { limit: u32 },
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cooldown { remaining_secs } => {
                write!(f, "cooldown active ({remaining_secs}s remaining)")
            }
            Self::MinInterval { remaining_secs } => {
                write!(f, "minimum interval not elapsed ({remaining_secs}s remaining)")
            }
            Self::MaxAttempts { limit } => {
                write!(f, "maximum wake attempts ({limit}) reached")
            }
        }
    }
}

/// Evaluate the policy in fixed order: cooldown, then min-interval, then
/// max-attempts. First denial wins; evaluation itself never mutates
/// anything. A limit of `0` disables that gate.
#[must_use]
pub fn evaluate(state: &ThrottleState, policy: &ThrottlePolicy, now: Instant) -> Decision {
    if let Some(last) = state.last_sent_at {
        let elapsed = now.saturating_duration_since(last);
        if policy.cooldown_seconds > 0 {
            let gate = Duration::from_secs(policy.cooldown_seconds);
            if elapsed < gate {
                return Decision::Deny(DenyReason::Cooldown {
                    remaining_secs: remaining_secs(gate, elapsed),
                });
            }
        }
        if policy.min_interval_seconds > 0 {
            let gate = Duration::from_secs(policy.min_interval_seconds);
            if elapsed < gate {
                return Decision::Deny(DenyReason::MinInterval {
                    remaining_secs: remaining_secs(gate, elapsed),
                });
            }
        }
    }

    if policy.max_attempts > 0 && state.attempt_count >= policy.max_attempts {
        return Decision::Deny(DenyReason::MaxAttempts {
            limit: policy.max_attempts,
        });
    }

    Decision::Allow
}

/// Whole seconds left on a time gate, rounded up so a denial never
/// reports `0s remaining`.
fn remaining_secs(gate: Duration, elapsed: Duration) -> u64 {
    gate.saturating_sub(elapsed).as_secs_f64().ceil() as u64
}
