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

//! Upload preview text.
//!
//! The drag-and-drop upload areas show the chosen file as a one line summary:
//! an icon picked from the MIME type, the file size and the type itself.

use std::fmt;

use serde::Serialize;

use crate::util::format::format_decimal;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

const UNKNOWN_TYPE_LABEL: &str = "Bilinmeyen tür";

/// Formats a byte count with binary multiples.
///
/// Values are rounded to two decimals with trailing zeros dropped. Sizes past
/// the gigabyte range are still expressed in GB.
///
/// ```
/// use portal_text::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    let mut scaled = bytes as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    format!("{} {}", format_decimal(scaled), SIZE_UNITS[unit])
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Broad file categories used to pick a preview icon.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Spreadsheet,
    Pdf,
    Document,
    Image,
    Text,
    Archive,
    Other,
}

impl FileKind {
    /// Classifies a MIME type by substring, first match wins.
    ///
    /// The order matters: `application/vnd.openxmlformats-officedocument.
    /// spreadsheetml.sheet` mentions both "spreadsheet" and "document" and is
    /// a spreadsheet, `text/csv` is a spreadsheet rather than text.
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.to_ascii_lowercase();

        if contains_any(&mime, &["excel", "spreadsheet", "csv"]) {
            Self::Spreadsheet
        } else if contains_any(&mime, &["pdf"]) {
            Self::Pdf
        } else if contains_any(&mime, &["word", "document"]) {
            Self::Document
        } else if contains_any(&mime, &["image"]) {
            Self::Image
        } else if contains_any(&mime, &["text"]) {
            Self::Text
        } else if contains_any(&mime, &["zip", "compressed"]) {
            Self::Archive
        } else {
            Self::Other
        }
    }

    /// Icon class shown next to the file name.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Spreadsheet => "fa-file-excel",
            Self::Pdf => "fa-file-pdf",
            Self::Document => "fa-file-word",
            Self::Image => "fa-file-image",
            Self::Text => "fa-file-alt",
            Self::Archive => "fa-file-archive",
            Self::Other => "fa-file",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spreadsheet => "spreadsheet",
            Self::Pdf => "pdf",
            Self::Document => "document",
            Self::Image => "image",
            Self::Text => "text",
            Self::Archive => "archive",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// One line summary of a selected file.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub name: String,
    pub kind: FileKind,
    pub icon: &'static str,
    /// `"<size> - <mime type>"`.
    pub detail: String,
}

impl FilePreview {
    pub fn new(name: &str, size: u64, mime: &str) -> Self {
        let kind = FileKind::from_mime(mime);
        let mime = if mime.trim().is_empty() {
            UNKNOWN_TYPE_LABEL
        } else {
            mime
        };

        Self {
            name: name.to_string(),
            kind,
            icon: kind.icon_class(),
            detail: format!("{} - {}", format_file_size(size), mime),
        }
    }
}
