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

//! Turkish phone number display.
//!
//! Numbers are stored in whatever shape the user typed them. For display they
//! are reduced to their canonical digit string and, when that is a national
//! number, rendered as `+90 (555) 123 45 67`.
//!
//! None of the functions here fail. Inputs that are not recognised as a
//! national number are passed through unchanged (formatting) or masked digit
//! by digit (masking).

use tracing::debug;

use crate::util::format::join_groups;

const COUNTRY_PREFIX: &str = "+90";

/// Digits in a national number without the trunk prefix.
const NATIONAL_LEN: usize = 10;

/// Digits left visible by [`mask_phone`].
const VISIBLE_SUFFIX_LEN: usize = 4;

/// Group boundaries applied while the user types.
const TYPED_GROUP_ENDS: [usize; 5] = [3, 6, 8, 10, 12];

/// Strips every character that is not an ASCII digit.
pub fn canonical_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Returns the ten digit national number, dropping a leading trunk `0`.
fn national_number(digits: &str) -> Option<&str> {
    match digits.len() {
        NATIONAL_LEN => Some(digits),
        11 if digits.starts_with('0') => Some(&digits[1..]),
        _ => None,
    }
}

fn grouped(area: &str, exchange: &str, first: &str, last: &str) -> String {
    format!("{COUNTRY_PREFIX} ({area}) {exchange} {first} {last}")
}

/// Formats a phone number for display.
///
/// Ten digit numbers and eleven digit numbers with a leading `0` are rendered
/// as `+90 (ddd) ddd dd dd`. Any other input is returned unchanged.
///
/// # Examples
///
/// ```
/// use portal_text::format_phone;
///
/// assert_eq!(format_phone("5551234567"), "+90 (555) 123 45 67");
/// assert_eq!(format_phone("0555 123 45 67"), "+90 (555) 123 45 67");
/// assert_eq!(format_phone("123"), "123");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits = canonical_digits(raw);

    match national_number(&digits) {
        Some(n) => grouped(&n[0..3], &n[3..6], &n[6..8], &n[8..10]),
        None => {
            debug!(digits = digits.len(), "Phone number not national, leaving as is");
            raw.to_string()
        }
    }
}

/// Formats a phone number progressively as it is typed.
///
/// Non-digits are stripped and spaces are inserted after the 3rd, 6th, 8th
/// and 10th digit as far as the input reaches. Digits past the 12th are
/// dropped.
///
/// ```
/// use portal_text::format_phone_as_typed;
///
/// assert_eq!(format_phone_as_typed("5551"), "555 1");
/// assert_eq!(format_phone_as_typed("5551234567"), "555 123 45 67");
/// ```
pub fn format_phone_as_typed(raw: &str) -> String {
    join_groups(&canonical_digits(raw), &TYPED_GROUP_ENDS)
}

/// Masks a phone number for display, keeping the last four digits.
///
/// * Fewer than ten digits: every digit is replaced by `*`, separators stay.
/// * Exactly ten digits: `+90 (***) *** dd dd`.
/// * More than ten digits: masked digits followed by the last four, without
///   grouping. An eleven digit number with a trunk `0` therefore comes out as
///   `*******4567` rather than in the grouped form.
///
/// ```
/// use portal_text::mask_phone;
///
/// assert_eq!(mask_phone("5551234567"), "+90 (***) *** 45 67");
/// assert_eq!(mask_phone("05551234567"), "*******4567");
/// assert_eq!(mask_phone("555-12"), "***-**");
/// ```
pub fn mask_phone(raw: &str) -> String {
    let digits = canonical_digits(raw);

    if digits.len() < NATIONAL_LEN {
        return raw
            .chars()
            .map(|c| if c.is_ascii_digit() { '*' } else { c })
            .collect();
    }

    let (hidden, visible) = digits.split_at(digits.len() - VISIBLE_SUFFIX_LEN);
    let masked = "*".repeat(hidden.len());

    if digits.len() == NATIONAL_LEN {
        grouped(&masked[0..3], &masked[3..6], &visible[0..2], &visible[2..4])
    } else {
        format!("{masked}{visible}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_digits_strips_separators() {
        assert_eq!(canonical_digits("+90 (555) 123-45-67"), "905551234567");
        assert_eq!(canonical_digits("abc"), "");
        assert_eq!(canonical_digits("٥٥٥"), "");
    }

    #[test]
    fn formats_national_numbers() {
        assert_eq!(format_phone("5551234567"), "+90 (555) 123 45 67");
        assert_eq!(format_phone("05551234567"), "+90 (555) 123 45 67");
        assert_eq!(format_phone("(555) 123-4567"), "+90 (555) 123 45 67");
    }

    #[test]
    fn leaves_other_lengths_unchanged() {
        assert_eq!(format_phone("123"), "123");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("15551234567"), "15551234567");
        assert_eq!(format_phone("+90 555 123 45 67"), "+90 555 123 45 67");
    }

    #[test]
    fn formatted_national_number_shape() {
        for seed in 0..50u64 {
            let digits = format!("{:010}", seed * 198_491_317 % 10_000_000_000);
            let formatted = format_phone(&digits);
            assert_eq!(formatted.chars().count(), 19, "{formatted}");
            assert_eq!(formatted.matches(' ').count(), 4, "{formatted}");
            assert!(formatted.starts_with("+90 ("));
        }
    }

    #[test]
    fn as_typed_handles_every_length() {
        let expected = [
            "",
            "5",
            "55",
            "555",
            "555 1",
            "555 12",
            "555 123",
            "555 123 4",
            "555 123 45",
            "555 123 45 6",
            "555 123 45 67",
            "555 123 45 67 8",
            "555 123 45 67 89",
            "555 123 45 67 89",
        ];
        let full = "5551234567899";
        for (len, want) in expected.iter().enumerate() {
            assert_eq!(format_phone_as_typed(&full[..len]), *want, "length {len}");
        }
    }

    #[test]
    fn as_typed_ignores_non_digits() {
        assert_eq!(format_phone_as_typed("555 123 4"), "555 123 4");
        assert_eq!(format_phone_as_typed("(555) 12a"), "555 12");
    }

    #[test]
    fn masks_national_number_with_grouping() {
        assert_eq!(mask_phone("5551234567"), "+90 (***) *** 45 67");
        assert_eq!(mask_phone("555 123 45 67"), "+90 (***) *** 45 67");
    }

    #[test]
    fn masks_longer_numbers_without_grouping() {
        assert_eq!(mask_phone("05551234567"), "*******4567");
        assert_eq!(mask_phone("+90 555 123 45 67"), "********4567");
    }

    #[test]
    fn masks_short_numbers_in_place() {
        assert_eq!(mask_phone("123"), "***");
        assert_eq!(mask_phone("555-12 ab"), "***-** ab");
        assert_eq!(mask_phone(""), "");
    }
}
