//! Timestamp scalars: strftime-style formats translated into fragments.
//!
//! Only specifiers with a fixed, unambiguous textual shape are supported, so
//! the derived fragment accepts exactly the strings chrono can be asked to
//! parse. Everything that is not a specifier is escaped and matched literally.
//!
//! Formats may leave fields out. A missing year is the current local year (the
//! syslog `%b %d %H:%M:%S` convention), a missing month or day is `1`, and a
//! missing time of day is midnight.

use crate::ConfigError;
use crate::engine::escape;
use chrono::format::{Parsed, StrftimeItems};
use chrono::{Datelike, Local, NaiveDateTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormat {
    format: String,
    fragment: String,
}

impl TimestampFormat {
    pub fn new(format: &str) -> Result<Self, ConfigError> {
        let mut fragment = String::new();

        for token in regex!(r"%\.?[A-Za-z%]?|[^%]+").find_iter(format) {
            let token = token.as_str();
            let piece = match token {
                "%Y" => "[0-9]{4}",
                "%y" | "%m" | "%d" | "%H" | "%M" | "%S" => "[0-9]{2}",
                "%b" => "[A-Za-z]{3}",
                "%.f" => r"\.[0-9]+",
                "%F" => "[0-9]{4}-[0-9]{2}-[0-9]{2}",
                "%T" => "[0-9]{2}:[0-9]{2}:[0-9]{2}",
                "%%" => "%",
                _ if token.starts_with('%') => return Err(ConfigError::UnsupportedFormat(token.to_string())),
                literal => {
                    fragment.push_str(&escape(literal));
                    continue;
                }
            };
            fragment.push_str(piece);
        }

        Ok(TimestampFormat { format: format.to_string(), fragment })
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Parse text that already matched [`fragment`](Self::fragment).
    ///
    /// Fields the format leaves out are filled in as described in the module
    /// docs. Text that has the right shape but names an impossible date
    /// (month 13, Feb 30) gives `None`.
    pub fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, text, StrftimeItems::new(&self.format)).ok()?;

        if parsed.year().is_none() && parsed.year_mod_100().is_none() {
            parsed.set_year(i64::from(Local::now().year())).ok()?;
        }
        if parsed.month().is_none() {
            parsed.set_month(1).ok()?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1).ok()?;
        }
        if parsed.hour_div_12().is_none() {
            parsed.set_hour(0).ok()?;
        }
        if parsed.minute().is_none() {
            parsed.set_minute(0).ok()?;
        }

        let date = parsed.to_naive_date().ok()?;
        let time = parsed.to_naive_time().ok()?;
        Some(date.and_time(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_specifiers_and_escapes_literals() {
        let ts = TimestampFormat::new("[%Y-%m-%d %H:%M:%S]").unwrap();
        assert_eq!(ts.fragment(), r"\[[0-9]{4}\-[0-9]{2}\-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}\]");
    }

    #[test]
    fn rejects_specifiers_without_a_fixed_shape() {
        for format in ["%Y %A", "%s", "%.3f", "trailing %"] {
            assert!(matches!(TimestampFormat::new(format), Err(ConfigError::UnsupportedFormat(_))), "{format}");
        }
    }

    #[test]
    fn parses_datetimes_and_dates() {
        let ts = TimestampFormat::new("%F %T").unwrap();
        let dt = ts.parse("2024-03-09 17:05:00").unwrap();
        assert_eq!(dt.to_string(), "2024-03-09 17:05:00");

        let date = TimestampFormat::new("%d/%b/%Y").unwrap();
        assert_eq!(date.parse("09/Mar/2024").unwrap().to_string(), "2024-03-09 00:00:00");
    }

    #[test]
    fn formats_without_a_year_use_the_current_one() {
        let year = Local::now().year();

        let syslog = TimestampFormat::new("%b %d %H:%M:%S").unwrap();
        let dt = syslog.parse("Mar 09 17:05:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (year, 3, 9));
        assert_eq!(dt.time().to_string(), "17:05:00");

        let clock = TimestampFormat::new("%H:%M:%S").unwrap();
        let dt = clock.parse("17:05:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (year, 1, 1));
        assert_eq!(dt.time().to_string(), "17:05:00");
    }

    #[test]
    fn hour_without_minutes_is_on_the_hour() {
        let ts = TimestampFormat::new("%Y-%m-%d %H").unwrap();
        assert_eq!(ts.parse("2024-03-09 17").unwrap().to_string(), "2024-03-09 17:00:00");
    }

    #[test]
    fn literal_text_uses_the_crate_escaping() {
        let ts = TimestampFormat::new("%H.%M").unwrap();
        assert_eq!(ts.fragment(), format!("[0-9]{{2}}{}[0-9]{{2}}", escape(".")));
    }

    #[test]
    fn impossible_calendar_values_do_not_parse() {
        let ts = TimestampFormat::new("%Y-%m-%d").unwrap();
        assert_eq!(ts.parse("2024-13-01"), None);
    }
}
