//! Poll-delay parser for the `--delay` flag.
//!
//! Accepts `500ms`, `1s`, `1.5s`, `2m`, or a bare number of seconds.

use battop_core::{BattopError, Result};
use std::time::Duration;

/// Shortest delay the monitor accepts.
pub const MIN_DELAY: Duration = Duration::from_millis(100);

/// Parse a delay string and reject anything below [`MIN_DELAY`].
pub fn parse_delay(input: &str) -> Result<Duration> {
    let input = input.trim();

    let (number, scale_ms) = if let Some(n) = input.strip_suffix("ms") {
        (n, 1.0)
    } else if let Some(n) = input.strip_suffix('s') {
        (n, 1_000.0)
    } else if let Some(n) = input.strip_suffix('m') {
        (n, 60_000.0)
    } else {
        (input, 1_000.0)
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| BattopError::Config(format!("invalid delay '{input}'")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(BattopError::Config(format!("invalid delay '{input}'")));
    }

    let delay = Duration::from_millis((value * scale_ms).round() as u64);
    validate_delay(delay)?;
    Ok(delay)
}

/// Reject delays below [`MIN_DELAY`].
pub fn validate_delay(delay: Duration) -> Result<()> {
    if delay < MIN_DELAY {
        return Err(BattopError::Config(format!(
            "delay must be at least {}ms (got {}ms)",
            MIN_DELAY.as_millis(),
            delay.as_millis()
        )));
    }
    Ok(())
}
