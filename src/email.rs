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

//! Email address masking.

use tracing::debug;

/// Masks the local part of an email address.
///
/// Local parts of up to three characters keep their first character, longer
/// ones keep the first two and the last. The domain is never touched. Input
/// without exactly one `@`, or with an empty local part, is returned as is.
///
/// Masking is one-way and meant for display only. Callers mask exactly once,
/// right before showing the address, and keep the original for everything
/// else.
///
/// ```
/// use portal_text::mask_email;
///
/// assert_eq!(mask_email("jo@x.com"), "j*@x.com");
/// assert_eq!(mask_email("johndoe@x.com"), "jo****e@x.com");
/// assert_eq!(mask_email("not-an-email"), "not-an-email");
/// ```
pub fn mask_email(email: &str) -> String {
    let mut parts = email.split('@');
    let (Some(name), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        debug!("Email does not contain exactly one '@', leaving as is");
        return email.to_string();
    };

    let len = name.chars().count();
    if len == 0 {
        return email.to_string();
    }

    let masked: String = if len <= 3 {
        name.chars()
            .take(1)
            .chain(std::iter::repeat_n('*', len - 1))
            .collect()
    } else {
        name.chars()
            .take(2)
            .chain(std::iter::repeat_n('*', len - 3))
            .chain(name.chars().last())
            .collect()
    };

    format!("{masked}@{domain}")
}
