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

/// Empty-as-absent semantics for optional text coming from the portal.
pub(crate) trait OptionTextExt {
    /// Returns the text if it is present and not blank.
    fn non_blank(&self) -> Option<&str>;
}

impl OptionTextExt for Option<String> {
    #[inline]
    fn non_blank(&self) -> Option<&str> {
        self.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(None::<String>.non_blank(), None);
        assert_eq!(Some(String::new()).non_blank(), None);
        assert_eq!(Some("  ".to_string()).non_blank(), None);
        assert_eq!(Some("Kaydedildi".to_string()).non_blank(), Some("Kaydedildi"));
    }
}
