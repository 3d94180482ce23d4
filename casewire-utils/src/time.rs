use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Format an instant in the given timezone (e.g. "2026-10-20 16:00 Europe/Berlin").
pub fn format_in_timezone(instant: DateTime<Utc>, timezone: Tz) -> String {
    format!(
        "{} {}",
        instant.with_timezone(&timezone).format("%Y-%m-%d %H:%M"),
        timezone.name()
    )
}

/// Parse an IANA timezone name, ignoring surrounding whitespace.
pub fn parse_timezone(raw: &str) -> Option<Tz> {
    raw.trim().parse::<Tz>().ok()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use chrono_tz::Tz;

    use super::{format_in_timezone, parse_timezone};

    #[test]
    fn formats_in_utc_and_named_zones() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 20, 14, 0, 0).unwrap();

        assert_eq!(format_in_timezone(instant, Tz::UTC), "2026-10-20 14:00 UTC");
        assert_eq!(
            format_in_timezone(instant, Tz::Europe__Berlin),
            "2026-10-20 16:00 Europe/Berlin"
        );
    }

    #[test]
    fn parses_timezone_names() {
        assert_eq!(parse_timezone(" UTC "), Some(Tz::UTC));
        assert_eq!(parse_timezone("America/New_York"), Some(Tz::America__New_York));
        assert_eq!(parse_timezone("Mars/Olympus"), None);
    }
}
