//! Human-readable durations for the server status card.

use chrono::{DateTime, Duration, Utc};

/// Format as "D days, H hours, M minutes", omitting zero-valued units.
/// Durations under a minute (or negative) produce an empty string.
pub fn format_uptime(duration: Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes % (24 * 60)) / 60;
    let minutes = total_minutes % 60;

    [(days, "day"), (hours, "hour"), (minutes, "minute")]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{} {}{}", n, unit, if n != 1 { "s" } else { "" }))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Uptime between two instants.
pub fn time_between(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format_uptime(end - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ninety_minutes() {
        assert_eq!(format_uptime(Duration::minutes(90)), "1 hour, 30 minutes");
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(format_uptime(Duration::zero()), "");
        assert_eq!(format_uptime(Duration::seconds(59)), "");
    }

    #[test]
    fn test_twenty_five_hours() {
        assert_eq!(format_uptime(Duration::hours(25)), "1 day, 1 hour");
    }

    #[test]
    fn test_plurals_and_gaps() {
        assert_eq!(format_uptime(Duration::days(2) + Duration::minutes(1)), "2 days, 1 minute");
        assert_eq!(format_uptime(Duration::days(1)), "1 day");
    }

    #[test]
    fn test_negative_treated_as_zero() {
        assert_eq!(format_uptime(Duration::minutes(-5)), "");
    }

    #[test]
    fn test_time_between() {
        let end = Utc::now();
        let start = end - Duration::minutes(61);
        assert_eq!(time_between(start, end), "1 hour, 1 minute");
    }
}
