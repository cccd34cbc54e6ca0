// SPDX-License-Identifier: MPL-2.0
//! Video identifier parsing and validation.
//!
//! Identifiers are always exactly 11 characters of `[A-Za-z0-9_-]`. The
//! constructor enforces this, so the rest of the crate never revalidates.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a canonical video identifier.
const VIDEO_ID_LEN: usize = 11;

/// Validated video identifier.
///
/// # Example
///
/// ```
/// use tubeframe::video_id::VideoId;
///
/// let id = VideoId::new("dQw4w9WgXcQ").unwrap();
/// assert_eq!(id.as_str(), "dQw4w9WgXcQ");
///
/// // Extraction recognizes the common share URL forms
/// let from_url = VideoId::extract("https://youtu.be/dQw4w9WgXcQ").unwrap();
/// assert_eq!(from_url, id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Creates a validated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the input is not exactly
    /// 11 characters of `[A-Za-z0-9_-]`.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.len() != VIDEO_ID_LEN || !id.bytes().all(is_id_byte) {
            return Err(Error::InvalidArgument(format!(
                "video id must be {VIDEO_ID_LEN} characters of [A-Za-z0-9_-], got {id:?}"
            )));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts an identifier from a bare id or a share URL,
    /// trimming surrounding whitespace first.
    ///
    /// Recognized URL forms:
    /// - `https://www.youtube.com/watch?v=<id>` (also `m.`, or no subdomain)
    /// - `https://www.youtube.com/embed/<id>` (also `youtube-nocookie.com`)
    /// - `https://youtu.be/<id>`
    ///
    /// Trailing query parameters and fragments after the identifier are
    /// ignored. Plain `http://` URLs are not accepted.
    #[must_use]
    pub fn extract(input: &str) -> Option<Self> {
        Self::extract_with(input, true)
    }

    /// Like [`extract`](Self::extract), with whitespace trimming configurable.
    #[must_use]
    pub fn extract_with(input: &str, trim_whitespace: bool) -> Option<Self> {
        let url = if trim_whitespace { input.trim() } else { input };

        // Bare identifier, no URL around it.
        if !url.contains("http") && url.len() == VIDEO_ID_LEN {
            return Self::new(url).ok();
        }

        let rest = url.strip_prefix("https://")?;
        let tail = if let Some(tail) = rest.strip_prefix("youtu.be/") {
            tail
        } else {
            let host = rest
                .strip_prefix("www.")
                .or_else(|| rest.strip_prefix("m."))
                .unwrap_or(rest);
            if let Some(tail) = host.strip_prefix("youtube.com/watch?v=") {
                tail
            } else if let Some(tail) = host.strip_prefix("youtube.com/embed/") {
                tail
            } else if let Some(tail) = host.strip_prefix("youtube-nocookie.com/embed/") {
                tail
            } else {
                return None;
            }
        };

        let id = tail.get(..VIDEO_ID_LEN)?;
        Self::new(id).ok()
    }
}

fn is_id_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VideoId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}
