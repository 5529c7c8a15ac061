//! Activity feed statuses and relative time labels.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Outcome shown next to an activity in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Success,
    Warning,
    Error,
    Info,
}

impl ActivityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityStatus::Success => "success",
            ActivityStatus::Warning => "warning",
            ActivityStatus::Error => "error",
            ActivityStatus::Info => "info",
        }
    }
}

/// Default number of activities returned by the feed.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

/// Hard cap on the feed page size.
pub const MAX_ACTIVITY_LIMIT: usize = 100;

/// Clamp a requested feed size to `1..=MAX_ACTIVITY_LIMIT`.
pub fn clamp_activity_limit(limit: Option<usize>) -> usize {
    limit
        .unwrap_or(DEFAULT_ACTIVITY_LIMIT)
        .clamp(1, MAX_ACTIVITY_LIMIT)
}

/// Human-readable age of an event, e.g. `"5 minutes ago"`.
pub fn relative_time_label(at: Timestamp, now: Timestamp) -> String {
    let elapsed = now.signed_duration_since(at);
    if elapsed < Duration::minutes(1) {
        return "Just now".to_string();
    }
    let (count, unit) = if elapsed < Duration::hours(1) {
        (elapsed.num_minutes(), "minute")
    } else if elapsed < Duration::days(1) {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn at(secs: i64) -> Timestamp {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn labels_by_magnitude() {
        let now = at(0);
        assert_eq!(relative_time_label(at(-30), now), "Just now");
        assert_eq!(relative_time_label(at(-60), now), "1 minute ago");
        assert_eq!(relative_time_label(at(-5 * 60), now), "5 minutes ago");
        assert_eq!(relative_time_label(at(-2 * 3600), now), "2 hours ago");
        assert_eq!(relative_time_label(at(-86_400), now), "1 day ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        assert_eq!(relative_time_label(at(10), at(0)), "Just now");
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(clamp_activity_limit(None), DEFAULT_ACTIVITY_LIMIT);
        assert_eq!(clamp_activity_limit(Some(0)), 1);
        assert_eq!(clamp_activity_limit(Some(10_000)), MAX_ACTIVITY_LIMIT);
    }

    #[test]
    fn status_labels_are_lowercase() {
        assert_eq!(ActivityStatus::Success.as_str(), "success");
        assert_eq!(ActivityStatus::Info.as_str(), "info");
    }
}
