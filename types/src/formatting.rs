//! Centralized display formatting utilities.
//!
//! All human-readable rendering of durations and wake targets goes through
//! this module so the CLI and status output stay consistent.

/// Format a number of elapsed seconds for compact display.
///
/// - Under a minute: `42s`
/// - Under an hour: `5m 12s`
/// - An hour or more: `2h 03m`
///
/// # Examples
/// ```
/// use rouser_types::formatting::format_elapsed_secs;
/// assert_eq!(format_elapsed_secs(42), "42s");
/// assert_eq!(format_elapsed_secs(312), "5m 12s");
/// assert_eq!(format_elapsed_secs(7380), "2h 03m");
/// ```
pub fn format_elapsed_secs(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Format an optional elapsed-seconds value, rendering `None` as `"never"`.
///
/// Used for time-since-last-send, which has no value until the first
/// successful transmission.
///
/// # Examples
/// ```
/// use rouser_types::formatting::format_elapsed_opt;
/// assert_eq!(format_elapsed_opt(None), "never");
/// assert_eq!(format_elapsed_opt(Some(90)), "1m 30s");
/// ```
pub fn format_elapsed_opt(secs: Option<u64>) -> String {
    match secs {
        Some(s) => format_elapsed_secs(s),
        None => "never".to_string(),
    }
}

/// Format a broadcast target as `address:port`.
///
/// # Examples
/// ```
/// use rouser_types::formatting::format_target;
/// assert_eq!(format_target("255.255.255.255", 9), "255.255.255.255:9");
/// ```
pub fn format_target(address: &str, port: u16) -> String {
    format!("{}:{}", address, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_boundaries() {
        assert_eq!(format_elapsed_secs(0), "0s");
        assert_eq!(format_elapsed_secs(59), "59s");
        assert_eq!(format_elapsed_secs(60), "1m 0s");
        assert_eq!(format_elapsed_secs(3599), "59m 59s");
        assert_eq!(format_elapsed_secs(3600), "1h 00m");
    }

    #[test]
    fn never_sent_renders_as_never() {
        assert_eq!(format_elapsed_opt(None), "never");
    }
}
