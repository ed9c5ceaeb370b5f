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

//! Form reply notices.
//!
//! Portal endpoints answer AJAX form posts with a small JSON envelope:
//!
//! ```json
//! { "success": true, "message": "Kaydedildi", "redirect": "/nobet/" }
//! ```
//!
//! This module turns that envelope into the notice the page shows, filling
//! in the portal's default texts where the server sent none.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::util::text::OptionTextExt;

const SUCCESS_TITLE: &str = "Başarılı!";
const DELETED_TITLE: &str = "Silindi!";
const ERROR_TITLE: &str = "Hata!";

const NETWORK_ERROR_TEXT: &str = "Bir ağ hatası oluştu. Lütfen daha sonra tekrar deneyin.";

#[derive(Debug, Error)]
pub enum NoticeError {
    #[error("Malformed form reply: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// What the submitted form was doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormAction {
    #[default]
    Save,
    Delete,
}

impl FormAction {
    fn success_text(self) -> &'static str {
        match self {
            Self::Save => "İşlem başarıyla tamamlandı.",
            Self::Delete => "Öğe başarıyla silindi.",
        }
    }

    fn failure_text(self) -> &'static str {
        match self {
            Self::Save => "İşlem sırasında bir hata oluştu.",
            Self::Delete => "Silme işlemi sırasında bir hata oluştu.",
        }
    }
}

/// The JSON envelope returned by portal form endpoints.
///
/// Every field is optional. A reply without `success` counts as a failure.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReply {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    pub redirect: Option<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A notice ready to be shown by the page.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
    pub redirect: Option<String>,
}

impl FormReply {
    /// Parses a reply body.
    ///
    /// # Errors
    ///
    /// Returns [`NoticeError::Malformed`] if the body is not a JSON object
    /// of the expected shape.
    pub fn from_json(body: &str) -> Result<Self, NoticeError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Builds the notice for this reply.
    ///
    /// Blank texts from the server count as missing. On failure `error` is
    /// preferred over `message`. A redirect is only followed after success.
    pub fn notice(&self, action: FormAction) -> Notice {
        if self.success {
            let title = match action {
                FormAction::Save => SUCCESS_TITLE,
                FormAction::Delete => DELETED_TITLE,
            };

            Notice {
                level: NoticeLevel::Success,
                title: title.to_string(),
                text: self
                    .message
                    .non_blank()
                    .unwrap_or(action.success_text())
                    .to_string(),
                redirect: self.redirect.non_blank().map(str::to_string),
            }
        } else {
            debug!(?action, "Form reply reports failure");

            Notice {
                level: NoticeLevel::Error,
                title: ERROR_TITLE.to_string(),
                text: self
                    .error
                    .non_blank()
                    .or(self.message.non_blank())
                    .unwrap_or(action.failure_text())
                    .to_string(),
                redirect: None,
            }
        }
    }
}

impl Notice {
    /// The notice shown when the request never got a reply.
    pub fn network_failure() -> Self {
        Self {
            level: NoticeLevel::Error,
            title: ERROR_TITLE.to_string(),
            text: NETWORK_ERROR_TEXT.to_string(),
            redirect: None,
        }
    }
}
