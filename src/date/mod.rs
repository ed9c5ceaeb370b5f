// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Date display.
//!
//! Dates arrive from forms and APIs as strings in a handful of shapes and are
//! shown as `DD.MM.YYYY` unless a page asks for something else.
//!
//! # Formatters
//!
//! Two interchangeable formatters are available, chosen once through
//! configuration:
//!
//! * [`DateFormatter::Locale`]: full moment-style patterns with Turkish month
//!   and weekday names, rendered by `chrono`.
//! * [`DateFormatter::Manual`]: only the two named formats, `DD.MM.YYYY` and
//!   `YYYY-MM-DD`.
//!
//! Both agree on the named formats.

mod locale;

use std::{fmt, ops::RangeInclusive, str::FromStr};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Pattern used when none, or an unusable one, is given.
pub const DEFAULT_DATE_FORMAT: &str = "DD.MM.YYYY";

const DATE_TIME_PATTERNS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_PATTERNS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

/// Years that fit the unsigned four digit display field.
const DISPLAY_YEARS: RangeInclusive<i32> = 0..=9999;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Empty date value")]
    Empty,

    #[error("Unrecognised date value: {0}")]
    Unrecognised(String),

    #[error("Unknown date formatter: {0}")]
    UnknownFormatter(String),
}

/// Parses a date value as sent by the portal forms and APIs.
///
/// Accepted shapes, tried in this order:
///
/// * RFC 3339 timestamps. The wall-clock time is kept as written, no time
///   zone conversion takes place.
/// * `YYYY-MM-DDTHH:MM[:SS[.f]]` and the same with a space separator.
/// * `YYYY-MM-DD`.
/// * `DD.MM.YYYY`, the display format itself.
///
/// Date-only values are placed at midnight. Signed years and years past 9999
/// are not accepted, they have no four digit display form.
///
/// # Errors
///
/// Returns [`DateError::Empty`] for blank input and
/// [`DateError::Unrecognised`] when no shape matches or the year is out of
/// range.
pub fn parse_date_value(value: &str) -> Result<NaiveDateTime, DateError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DateError::Empty);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.naive_local())
        .ok()
        .or_else(|| {
            DATE_TIME_PATTERNS
                .iter()
                .find_map(|p| NaiveDateTime::parse_from_str(value, p).ok())
        })
        .or_else(|| {
            DATE_PATTERNS
                .iter()
                .find_map(|p| NaiveDate::parse_from_str(value, p).ok())
                .map(|date| date.and_time(NaiveTime::default()))
        })
        .filter(|parsed| DISPLAY_YEARS.contains(&parsed.year()))
        .ok_or_else(|| DateError::Unrecognised(value.to_string()))
}

/// The two formats every formatter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedFormat {
    /// `DD.MM.YYYY`
    DayMonthYear,
    /// `YYYY-MM-DD`
    YearMonthDay,
}

impl NamedFormat {
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        match pattern {
            "DD.MM.YYYY" => Some(Self::DayMonthYear),
            "YYYY-MM-DD" => Some(Self::YearMonthDay),
            _ => None,
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            Self::DayMonthYear => "DD.MM.YYYY",
            Self::YearMonthDay => "YYYY-MM-DD",
        }
    }

    fn render(self, date: NaiveDate) -> String {
        let (day, month, year) = (date.day(), date.month(), date.year());
        match self {
            Self::DayMonthYear => format!("{day:02}.{month:02}.{year:04}"),
            Self::YearMonthDay => format!("{year:04}-{month:02}-{day:02}"),
        }
    }
}

/// Selects how dates are rendered.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateFormatter {
    /// Moment-style patterns through `chrono`, with Turkish names.
    #[default]
    Locale,
    /// The two named formats only.
    Manual,
}

impl DateFormatter {
    /// Renders an already parsed value.
    ///
    /// An empty pattern means [`DEFAULT_DATE_FORMAT`]. Patterns the formatter
    /// cannot use also fall back to it: for [`DateFormatter::Manual`] anything
    /// but the two named formats, for [`DateFormatter::Locale`] patterns
    /// without a single date token.
    pub fn format(self, value: NaiveDateTime, pattern: &str) -> String {
        let pattern = if pattern.trim().is_empty() {
            DEFAULT_DATE_FORMAT
        } else {
            pattern
        };

        let rendered = match self {
            Self::Locale => locale::format(value, pattern),
            Self::Manual => NamedFormat::from_pattern(pattern).map(|f| f.render(value.date())),
        };

        rendered.unwrap_or_else(|| {
            debug!(formatter = %self, "Unusable date pattern, using default");
            NamedFormat::DayMonthYear.render(value.date())
        })
    }

    /// Parses and renders a date value.
    ///
    /// Blank input gives an empty string. Input that does not parse as a date
    /// is returned unchanged.
    pub fn format_date(self, value: &str, pattern: &str) -> String {
        match parse_date_value(value) {
            Ok(parsed) => self.format(parsed, pattern),
            Err(DateError::Empty) => String::new(),
            Err(e) => {
                debug!(error = %e, "Leaving date value as is");
                value.to_string()
            }
        }
    }
}

impl fmt::Display for DateFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locale => f.write_str("locale"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

impl FromStr for DateFormatter {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "locale" => Ok(Self::Locale),
            "manual" => Ok(Self::Manual),
            other => Err(DateError::UnknownFormatter(other.to_string())),
        }
    }
}

/// Formats a date value with the default formatter.
///
/// # Arguments
///
/// * `value` - The date as a string, see [`parse_date_value`].
/// * `format` - The display pattern, usually [`DEFAULT_DATE_FORMAT`].
///
/// # Examples
///
/// ```
/// use portal_text::format_date;
///
/// assert_eq!(format_date("2024-03-05", "DD.MM.YYYY"), "05.03.2024");
/// assert_eq!(format_date("2024-03-05", "YYYY-MM-DD"), "2024-03-05");
/// assert_eq!(format_date("", "DD.MM.YYYY"), "");
/// ```
pub fn format_date(value: &str, format: &str) -> String {
    DateFormatter::default().format_date(value, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMATTERS: [DateFormatter; 2] = [DateFormatter::Locale, DateFormatter::Manual];

    #[test]
    fn named_formats() {
        for formatter in FORMATTERS {
            assert_eq!(formatter.format_date("2024-03-05", "DD.MM.YYYY"), "05.03.2024");
            assert_eq!(formatter.format_date("2024-03-05", "YYYY-MM-DD"), "2024-03-05");
        }
    }

    #[test]
    fn formatters_agree_on_named_formats() {
        let values = [
            "2024-01-01",
            "1999-12-31",
            "2024-02-29T23:59:59",
            "0987-06-07",
            "0000-01-01",
            "9999-12-31",
            "-0001-03-05",
            "+10000-03-05",
        ];
        for value in values {
            for named in [NamedFormat::DayMonthYear, NamedFormat::YearMonthDay] {
                assert_eq!(
                    DateFormatter::Locale.format_date(value, named.pattern()),
                    DateFormatter::Manual.format_date(value, named.pattern()),
                    "{value} {named:?}"
                );
            }
        }
    }

    #[test]
    fn signed_years_pass_through() {
        for formatter in FORMATTERS {
            for named in [NamedFormat::DayMonthYear, NamedFormat::YearMonthDay] {
                assert_eq!(formatter.format_date("-0001-03-05", named.pattern()), "-0001-03-05");
                assert_eq!(
                    formatter.format_date("+10000-03-05", named.pattern()),
                    "+10000-03-05"
                );
            }
        }
        assert_eq!(
            parse_date_value("-0001-03-05"),
            Err(DateError::Unrecognised("-0001-03-05".to_string()))
        );
        assert_eq!(format_date("9999-12-31", "DD.MM.YYYY"), "31.12.9999");
        assert_eq!(format_date("0000-01-01", "YYYY-MM-DD"), "0000-01-01");
    }

    #[test]
    fn unknown_pattern_falls_back_to_default() {
        for formatter in FORMATTERS {
            assert_eq!(formatter.format_date("2024-03-05", "garbage"), "05.03.2024");
            assert_eq!(formatter.format_date("2024-03-05", ""), "05.03.2024");
        }
        assert_eq!(
            DateFormatter::Manual.format_date("2024-03-05", "D MMMM YYYY"),
            "05.03.2024"
        );
        assert_eq!(
            DateFormatter::Locale.format_date("2024-03-05", "D MMMM YYYY"),
            "5 Mart 2024"
        );
    }

    #[test]
    fn empty_value_gives_empty_string() {
        for formatter in FORMATTERS {
            assert_eq!(formatter.format_date("", "DD.MM.YYYY"), "");
            assert_eq!(formatter.format_date("   ", "YYYY-MM-DD"), "");
        }
    }

    #[test]
    fn unparseable_value_passes_through() {
        assert_eq!(format_date("yarın", "DD.MM.YYYY"), "yarın");
        assert_eq!(format_date("2024-13-01", "DD.MM.YYYY"), "2024-13-01");
    }

    #[test]
    fn parses_supported_shapes() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        for value in [
            "2024-03-05",
            "05.03.2024",
            "2024-03-05T10:15",
            "2024-03-05T10:15:30",
            "2024-03-05T10:15:30.250",
            "2024-03-05 10:15:30",
            "2024-03-05T23:30:00+03:00",
            "2024-03-05T00:30:00Z",
        ] {
            let parsed = parse_date_value(value).unwrap();
            assert_eq!(parsed.date(), expected, "{value}");
        }
    }

    #[test]
    fn rfc3339_keeps_wall_clock_time() {
        let parsed = parse_date_value("2024-03-05T23:30:00+03:00").unwrap();
        assert_eq!(
            DateFormatter::Locale.format(parsed, "DD.MM.YYYY HH:mm"),
            "05.03.2024 23:30"
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_date_value(" "), Err(DateError::Empty));
        assert_eq!(
            parse_date_value("05/03/2024"),
            Err(DateError::Unrecognised("05/03/2024".to_string()))
        );
    }

    #[test]
    fn formatter_names_round_trip() {
        assert_eq!("manual".parse::<DateFormatter>(), Ok(DateFormatter::Manual));
        assert_eq!(" Locale ".parse::<DateFormatter>(), Ok(DateFormatter::Locale));
        assert!("moment".parse::<DateFormatter>().is_err());
        assert_eq!(DateFormatter::Manual.to_string(), "manual");
    }
}
