//! Elapsed progress and remaining time for the active period.

use time::{Duration, PrimitiveDateTime};

use crate::clock::{self, ClockTime, SECONDS_PER_DAY};
use crate::error::EngineError;

/// Percentage of `[start, end)` that has elapsed at `now`, with second precision.
///
/// Midnight-crossing intervals are unwrapped first. Returns 0 when `now` lies
/// outside the interval, and fails with `DegenerateInterval` when `start == end`.
pub fn checked_progress(
    start: ClockTime,
    end: ClockTime,
    now: time::Time,
) -> Result<f64, EngineError> {
    if start == end {
        return Err(EngineError::DegenerateInterval {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let (s, e, p) = clock::unwrap_interval(
        start.to_minutes() * 60,
        end.to_minutes() * 60,
        clock::seconds_of_day(now),
        SECONDS_PER_DAY,
    );
    if p < s || p >= e {
        return Ok(0.0);
    }

    let pct = (p - s) as f64 / (e - s) as f64 * 100.0;
    Ok(pct.clamp(0.0, 100.0))
}

/// Display-safe progress: a degenerate interval reads as 0%.
pub fn progress_percent(start: ClockTime, end: ClockTime, now: time::Time) -> f64 {
    checked_progress(start, end, now).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "progress interval recovered as 0%");
        0.0
    })
}

/// Time left until `end` on the same day as `now`, or on the next day if that
/// moment has already passed.
pub fn remaining(end: ClockTime, now: PrimitiveDateTime) -> Duration {
    let mut target = now.replace_time(end.to_time());
    if target < now {
        target = target.saturating_add(Duration::DAY);
    }
    target - now
}

/// `HH:MM:SS` when at least an hour is left, otherwise `MM:SS`.
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.whole_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
