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

//! Moment-style date patterns rendered through `chrono`.
//!
//! Portal templates describe dates with the token syntax of the date pickers
//! (`DD.MM.YYYY`, `D MMMM YYYY dddd`, ...). Numeric tokens are translated to
//! `strftime` specifiers, name tokens are resolved against the Turkish locale
//! and embedded as literals.

use chrono::{Datelike, NaiveDateTime};

const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

const MONTHS_SHORT: [&str; 12] = [
    "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
];

// Weekday tables start on Sunday.
const WEEKDAYS: [&str; 7] = [
    "Pazar",
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
];

const WEEKDAYS_SHORT: [&str; 7] = ["Paz", "Pts", "Sal", "Çar", "Per", "Cum", "Cts"];

const WEEKDAYS_MIN: [&str; 7] = ["Pz", "Pt", "Sa", "Ça", "Pe", "Cu", "Ct"];

#[derive(Clone, Copy)]
enum Field {
    Date(&'static str),
    Time(&'static str),
    Month(&'static [&'static str; 12]),
    Weekday(&'static [&'static str; 7]),
}

/// Pattern tokens, longest first so that `MMMM` wins over `MM` and `M`.
const TOKENS: [(&str, Field); 15] = [
    ("YYYY", Field::Date("%Y")),
    ("MMMM", Field::Month(&MONTHS)),
    ("dddd", Field::Weekday(&WEEKDAYS)),
    ("MMM", Field::Month(&MONTHS_SHORT)),
    ("ddd", Field::Weekday(&WEEKDAYS_SHORT)),
    ("YY", Field::Date("%y")),
    ("MM", Field::Date("%m")),
    ("DD", Field::Date("%d")),
    ("dd", Field::Weekday(&WEEKDAYS_MIN)),
    ("HH", Field::Time("%H")),
    ("mm", Field::Time("%M")),
    ("ss", Field::Time("%S")),
    ("M", Field::Date("%-m")),
    ("D", Field::Date("%-d")),
    ("H", Field::Time("%-H")),
];

fn push_literal(template: &mut String, text: &str) {
    for ch in text.chars() {
        if ch == '%' {
            template.push_str("%%");
        } else {
            template.push(ch);
        }
    }
}

/// Renders `value` with a moment-style `pattern`.
///
/// Text inside `[...]` is copied verbatim. Returns `None` when the pattern
/// contains no date token at all, leaving the fallback to the caller.
pub(super) fn format(value: NaiveDateTime, pattern: &str) -> Option<String> {
    let mut template = String::with_capacity(pattern.len() * 2);
    let mut has_date = false;
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        if ch == '['
            && let Some(end) = rest.find(']')
        {
            push_literal(&mut template, &rest[1..end]);
            rest = &rest[end + 1..];
            continue;
        }

        if let Some((token, field)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            match field {
                Field::Date(s) => {
                    has_date = true;
                    template.push_str(s);
                }
                Field::Time(s) => template.push_str(s),
                Field::Month(names) => {
                    has_date = true;
                    push_literal(&mut template, names[value.month0() as usize]);
                }
                Field::Weekday(names) => {
                    has_date = true;
                    push_literal(
                        &mut template,
                        names[value.weekday().num_days_from_sunday() as usize],
                    );
                }
            }
            rest = &rest[token.len()..];
            continue;
        }

        let (literal, tail) = rest.split_at(ch.len_utf8());
        push_literal(&mut template, literal);
        rest = tail;
    }

    has_date.then(|| value.format(&template).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    }

    #[test]
    fn numeric_tokens() {
        let value = at(2024, 3, 5, 9, 7);
        assert_eq!(format(value, "DD.MM.YYYY").as_deref(), Some("05.03.2024"));
        assert_eq!(format(value, "YYYY-MM-DD").as_deref(), Some("2024-03-05"));
        assert_eq!(format(value, "D.M.YY").as_deref(), Some("5.3.24"));
        assert_eq!(
            format(value, "DD.MM.YYYY HH:mm:ss").as_deref(),
            Some("05.03.2024 09:07:00")
        );
        assert_eq!(format(value, "D/M H:mm").as_deref(), Some("5/3 9:07"));
    }

    #[test]
    fn turkish_names() {
        // 5 March 2024 was a Tuesday.
        let value = at(2024, 3, 5, 0, 0);
        assert_eq!(
            format(value, "D MMMM YYYY, dddd").as_deref(),
            Some("5 Mart 2024, Salı")
        );
        assert_eq!(format(value, "DD MMM").as_deref(), Some("05 Mar"));
        assert_eq!(format(value, "ddd").as_deref(), Some("Sal"));
        assert_eq!(format(value, "dd").as_deref(), Some("Sa"));

        let value = at(2024, 8, 25, 0, 0);
        assert_eq!(
            format(value, "D MMMM dddd").as_deref(),
            Some("25 Ağustos Pazar")
        );
    }

    #[test]
    fn bracketed_text_is_literal() {
        let value = at(2024, 3, 5, 0, 0);
        assert_eq!(
            format(value, "[Tarih:] DD.MM.YYYY").as_deref(),
            Some("Tarih: 05.03.2024")
        );
        assert_eq!(format(value, "[DD] DD").as_deref(), Some("DD 05"));
    }

    #[test]
    fn unclosed_bracket_is_plain_text() {
        let value = at(2024, 3, 5, 0, 0);
        assert_eq!(format(value, "[DD").as_deref(), Some("[05"));
    }

    #[test]
    fn percent_signs_are_escaped() {
        let value = at(2024, 3, 5, 0, 0);
        assert_eq!(format(value, "%Y DD").as_deref(), Some("%Y 05"));
    }

    #[test]
    fn patterns_without_date_tokens() {
        let value = at(2024, 3, 5, 14, 30);
        assert_eq!(format(value, "HH:mm"), None);
        assert_eq!(format(value, "xyz"), None);
        assert_eq!(format(value, ""), None);
    }
}
