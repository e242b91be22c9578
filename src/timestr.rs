//! Time strings as written in test scripts.
//!
//! Accepted forms are plain seconds (`"5"`, `"1.5"`), unit strings such as
//! `"2 s"`, `"1 min 30 s"`, `"100ms"` or `"1 day 2 hours"`, and timer strings
//! such as `"01:02:03"` or `"1:30"`.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTimeError {
    #[error("empty time string")]
    Empty,
    #[error("negative time string: {0}")]
    Negative(String),
    #[error("invalid number in time string: {0}")]
    InvalidNumber(String),
    #[error("unknown time unit: {0}")]
    UnknownUnit(String),
    #[error("time string out of range: {0}")]
    OutOfRange(String),
}

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

/// Parses a time string into a [`Duration`].
pub fn parse_timestr(input: &str) -> Result<Duration, ParseTimeError> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ParseTimeError::Empty);
    }
    if normalized.starts_with('-') {
        return Err(ParseTimeError::Negative(input.to_string()));
    }

    let seconds = if let Ok(seconds) = normalized.parse::<f64>() {
        seconds
    } else if normalized.contains(':') {
        parse_timer(&normalized)?
    } else {
        parse_units(&normalized)?
    };

    Duration::try_from_secs_f64(seconds).map_err(|_| ParseTimeError::OutOfRange(input.to_string()))
}

/// `hh:mm:ss` or `mm:ss`, seconds may carry a fraction.
fn parse_timer(timer: &str) -> Result<f64, ParseTimeError> {
    let parts = timer.split(':').collect::<Vec<_>>();
    if parts.len() > 3 {
        return Err(ParseTimeError::InvalidNumber(timer.to_string()));
    }
    parts.iter().try_fold(0.0, |total, part| {
        let part = part.trim();
        if part.starts_with('-') {
            return Err(ParseTimeError::Negative(timer.to_string()));
        }
        let value = part
            .parse::<f64>()
            .map_err(|_| ParseTimeError::InvalidNumber(timer.to_string()))?;
        Ok(total * 60.0 + value)
    })
}

fn parse_units(text: &str) -> Result<f64, ParseTimeError> {
    let compact = text.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    let mut chars = compact.chars().peekable();
    let mut total = 0.0;

    while chars.peek().is_some() {
        let mut number = String::new();
        while let Some(c) = chars.next_if(|c| c.is_ascii_digit() || *c == '.') {
            number.push(c);
        }
        let mut unit = String::new();
        while let Some(c) = chars.next_if(|c| c.is_ascii_alphabetic()) {
            unit.push(c);
        }

        let value = number
            .parse::<f64>()
            .map_err(|_| ParseTimeError::InvalidNumber(text.to_string()))?;
        total += value * unit_seconds(&unit)?;
    }

    Ok(total)
}

fn unit_seconds(unit: &str) -> Result<f64, ParseTimeError> {
    match unit {
        "d" | "day" | "days" => Ok(DAY),
        "h" | "hour" | "hours" => Ok(HOUR),
        "m" | "min" | "mins" | "minute" | "minutes" => Ok(MINUTE),
        "s" | "sec" | "secs" | "second" | "seconds" => Ok(1.0),
        "ms" | "millis" | "millisecond" | "milliseconds" => Ok(0.001),
        other => Err(ParseTimeError::UnknownUnit(other.to_string())),
    }
}

/// Renders a duration the way test reports spell it, e.g.
/// `1 minute 30 seconds` or `500 milliseconds`.
pub fn format_duration(duration: &Duration) -> String {
    let millis = duration.as_millis();
    if millis == 0 {
        return "0 seconds".to_string();
    }

    let components = [
        (millis / 86_400_000, "day"),
        (millis / 3_600_000 % 24, "hour"),
        (millis / 60_000 % 60, "minute"),
        (millis / 1_000 % 60, "second"),
        (millis % 1_000, "millisecond"),
    ];

    components
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, name)| {
            if *value == 1 {
                format!("{value} {name}")
            } else {
                format!("{value} {name}s")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_seconds() {
        assert_eq!(parse_timestr("5").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_timestr(" 1.5 ").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_timestr("1e-3").unwrap(), Duration::from_millis(1));
    }

    #[test]
    fn unit_strings() {
        assert_eq!(parse_timestr("2 s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_timestr("100ms").unwrap(), Duration::from_millis(100));
        assert_eq!(parse_timestr("1 min 30 s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_timestr("1 Hour").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_timestr("1d").unwrap(), Duration::from_secs(86_400));
    }

    #[test]
    fn timer_strings() {
        assert_eq!(parse_timestr("01:02:03").unwrap(), Duration::from_secs(3723));
        assert_eq!(parse_timestr("1:30").unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn invalid_strings() {
        assert_eq!(parse_timestr("  "), Err(ParseTimeError::Empty));
        assert!(matches!(parse_timestr("-1"), Err(ParseTimeError::Negative(_))));
        assert!(matches!(parse_timestr("1:-30"), Err(ParseTimeError::Negative(_))));
        assert!(matches!(parse_timestr("0:-30"), Err(ParseTimeError::Negative(_))));
        assert!(matches!(parse_timestr("5 fortnights"), Err(ParseTimeError::UnknownUnit(_))));
        assert!(matches!(parse_timestr("s"), Err(ParseTimeError::InvalidNumber(_))));
        assert!(matches!(parse_timestr("1:2:3:4"), Err(ParseTimeError::InvalidNumber(_))));
    }

    #[test]
    fn formats_like_test_reports() {
        assert_eq!(format_duration(&Duration::ZERO), "0 seconds");
        assert_eq!(format_duration(&Duration::from_secs(5)), "5 seconds");
        assert_eq!(format_duration(&Duration::from_secs(1)), "1 second");
        assert_eq!(format_duration(&Duration::from_secs(90)), "1 minute 30 seconds");
        assert_eq!(format_duration(&Duration::from_millis(500)), "500 milliseconds");
        assert_eq!(
            format_duration(&Duration::from_secs(86_400 + 7_200)),
            "1 day 2 hours"
        );
    }
}
