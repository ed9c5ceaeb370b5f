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

//! # Portal text formatting.
//!
//! Display and normalization helpers shared by the administrative portals.
//!
//! Every formatter is a pure function over strings: no shared state, no I/O,
//! and no failure modes. Input that a formatter does not recognise is passed
//! through unchanged (phone numbers, email addresses, dates) or rendered with
//! a default (date patterns) instead of producing an error.
//!
//! ## Modules
//!
//! * [`slug`]: code tokens derived from display names.
//! * [`phone`]: Turkish phone numbers, formatted, formatted as typed, masked.
//! * [`email`]: email masking.
//! * [`date`]: date parsing and display with a configurable formatter.
//! * [`upload`]: file size and file type text for upload previews.
//! * [`notice`]: notices built from form reply envelopes.
//! * [`config`]: persisted display defaults.

pub mod config;
pub mod date;
pub mod email;
pub mod notice;
pub mod phone;
pub mod slug;
pub mod upload;

mod util;

pub use date::{DateFormatter, format_date};
pub use email::mask_email;
pub use phone::{format_phone, format_phone_as_typed, mask_phone};
pub use slug::slugify;
pub use upload::format_file_size;
