//! Clock face formatting.

use crate::config::ClockConfig;
use chrono::{DateTime, Local, TimeZone};

/// Strings shown by the lock layer clock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockFace {
    pub time: String,
    pub date: String,
}

impl ClockFace {
    pub fn at<Tz>(now: &DateTime<Tz>, config: &ClockConfig) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let time = now.format(&config.time_format).to_string();
        let mut date = now.format(&config.date_format).to_string();
        if config.uppercase_date {
            date = date.to_uppercase();
        }
        Self { time, date }
    }

    pub fn now(config: &ClockConfig) -> Self {
        Self::at(&Local::now(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_default_format() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let now = tz.with_ymd_and_hms(2024, 3, 7, 9, 5, 42).unwrap();
        let face = ClockFace::at(&now, &ClockConfig::default());
        assert_eq!(face.time, "09:05");
        assert_eq!(face.date, "THURSDAY, MARCH 07");
    }

    #[test]
    fn test_custom_format_keeps_case() {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let now = tz.with_ymd_and_hms(2023, 12, 31, 23, 59, 0).unwrap();
        let config = ClockConfig {
            time_format: "%I:%M %p".into(),
            date_format: "%a %d %b".into(),
            uppercase_date: false,
            ..ClockConfig::default()
        };
        let face = ClockFace::at(&now, &config);
        assert_eq!(face.time, "11:59 PM");
        assert_eq!(face.date, "Sun 31 Dec");
    }
}
