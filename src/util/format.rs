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

/// Splits an ASCII string into space separated groups.
///
/// Each entry in `ends` is the exclusive end offset of a group. Grouping stops
/// as soon as the input is exhausted, so partial input produces only the groups
/// it reaches. Anything beyond the last offset is dropped.
///
/// # Arguments
///
/// * `ascii` - The string to split. Must be ASCII, offsets are byte offsets.
/// * `ends` - Ascending group end offsets.
pub(crate) fn join_groups(ascii: &str, ends: &[usize]) -> String {
    let limit = ends.last().map_or(0, |last| ascii.len().min(*last));
    let mut out = String::with_capacity(limit + ends.len());

    let mut start = 0;
    for &end in ends {
        if start >= limit {
            break;
        }
        if start > 0 {
            out.push(' ');
        }
        out.push_str(&ascii[start..end.min(limit)]);
        start = end;
    }

    out
}

/// Formats a value with two decimal places, then drops trailing zeros.
///
/// ```text
/// 1.50 -> "1.5"
/// 1.00 -> "1"
/// ```
pub(crate) fn format_decimal(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
