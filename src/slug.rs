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

//! Code token generation.
//!
//! Branch, shift and inventory records in the portals are keyed by short
//! uppercase codes derived from their display names, for example
//! `"İstanbul Şube"` becomes `SB_ISTANBUL_SUBE` under the `SB` prefix.

/// Maximum number of normalized characters kept from the source text.
///
/// The prefix is not counted.
pub const MAX_CODE_LEN: usize = 20;

/// Maps a Turkish letter to its closest ASCII letter.
///
/// Characters outside the table are returned unchanged.
fn transliterate(ch: char) -> char {
    match ch {
        'ç' => 'c',
        'ğ' => 'g',
        'ı' => 'i',
        'ö' => 'o',
        'ş' => 's',
        'ü' => 'u',
        'Ç' => 'C',
        'Ğ' => 'G',
        'İ' => 'I',
        'Ö' => 'O',
        'Ş' => 'S',
        'Ü' => 'U',
        other => other,
    }
}

/// Derives an uppercase code token from free text.
///
/// The text is trimmed and lowercased, Turkish letters are folded to ASCII,
/// each run of whitespace becomes a single underscore and anything outside
/// `[a-z0-9_]` is dropped. The result is cut to [`MAX_CODE_LEN`] characters,
/// prefixed with `prefix_` when a prefix is given, and uppercased.
///
/// Empty text always yields an empty token, even when a prefix is given.
///
/// # Arguments
///
/// * `text` - The display name to derive the code from.
/// * `prefix` - Optional code prefix, pass `""` for none.
///
/// # Examples
///
/// ```
/// use portal_text::slugify;
///
/// assert_eq!(slugify("İstanbul Şube", "SB"), "SB_ISTANBUL_SUBE");
/// assert_eq!(slugify("Acil Servis", ""), "ACIL_SERVIS");
/// assert_eq!(slugify("", "SB"), "");
/// ```
pub fn slugify(text: &str, prefix: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut code = String::with_capacity(text.len());
    let mut in_whitespace = false;

    // Lowercasing `İ` yields `i` plus a combining dot, which the filter below
    // drops.
    for ch in text.trim().to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                code.push('_');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;

        let ch = transliterate(ch);
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            code.push(ch);
        }
    }

    // Only ASCII survives the filter, so byte and char offsets agree.
    code.truncate(MAX_CODE_LEN);

    if prefix.is_empty() {
        code.to_uppercase()
    } else {
        format!("{prefix}_{code}").to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_turkish_letters() {
        assert_eq!(slugify("İstanbul Şube", "SB"), "SB_ISTANBUL_SUBE");
        assert_eq!(slugify("Çağrı Öğün", ""), "CAGRI_OGUN");
        assert_eq!(slugify("IĞDIR ŞÜKRÜ", ""), "IGDIR_SUKRU");
    }

    #[test]
    fn empty_text_yields_empty_code() {
        assert_eq!(slugify("", ""), "");
        assert_eq!(slugify("", "SB"), "");
    }

    #[test]
    fn whitespace_only_text_keeps_prefix() {
        assert_eq!(slugify("   ", "SB"), "SB_");
        assert_eq!(slugify("   ", ""), "");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(slugify("  Ana \t  Depo\n", ""), "ANA_DEPO");
    }

    #[test]
    fn strips_punctuation_after_collapsing() {
        assert_eq!(slugify("Bakım - Onarım", ""), "BAKIM__ONARIM");
        assert_eq!(slugify("Sunucu #1 (yedek)", "SRV"), "SRV_SUNUCU_1_YEDEK");
    }

    #[test]
    fn truncates_before_prefixing() {
        let code = slugify("Merkez Hastanesi Acil Servis", "HS");
        assert_eq!(code, "HS_MERKEZ_HASTANESI_ACI");
        assert_eq!(code.len(), "HS_".len() + MAX_CODE_LEN);
    }

    #[test]
    fn output_is_a_code_token() {
        let code = slugify("Kadıköy Nöbetçi Eczanesi 24/7", "NB");
        assert!(code.len() <= 31);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        );
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(slugify("Ankara Şube", "SB"), slugify("Ankara Şube", "SB"));
    }
}
