// SPDX-License-Identifier: MPL-2.0
//! Thumbnail URL construction.
//!
//! Thumbnails are served from a fixed CDN layout; nothing here performs
//! network access, hosts fetch the URLs with whatever stack they carry.

use crate::video_id::VideoId;

const JPG_BASE: &str = "https://i3.ytimg.com/vi";
const WEBP_BASE: &str = "https://i3.ytimg.com/vi_webp";

/// Thumbnail resolution selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailQuality {
    /// 120x90 default thumbnail.
    Default,
    /// 320x180 medium quality.
    Medium,
    /// 480x360 high quality.
    High,
    /// 640x480 standard quality.
    #[default]
    Standard,
    /// Maximum resolution the video was uploaded with.
    Max,
}

impl ThumbnailQuality {
    /// File stem used by the CDN for this quality.
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "mqdefault",
            Self::High => "hqdefault",
            Self::Standard => "sddefault",
            Self::Max => "maxresdefault",
        }
    }
}

/// JPEG thumbnail URL for a video.
#[must_use]
pub fn thumbnail_url(id: &VideoId, quality: ThumbnailQuality) -> String {
    format!("{}/{}/{}.jpg", JPG_BASE, id.as_str(), quality.file_stem())
}

/// WebP thumbnail URL for a video. Smaller files, same layout.
#[must_use]
pub fn thumbnail_webp_url(id: &VideoId, quality: ThumbnailQuality) -> String {
    format!("{}/{}/{}.webp", WEBP_BASE, id.as_str(), quality.file_stem())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_id() -> VideoId {
        VideoId::new("dQw4w9WgXcQ").unwrap()
    }

    #[test]
    fn jpg_urls_follow_cdn_layout() {
        let id = test_id();
        assert_eq!(
            thumbnail_url(&id, ThumbnailQuality::Default),
            "https://i3.ytimg.com/vi/dQw4w9WgXcQ/default.jpg"
        );
        assert_eq!(
            thumbnail_url(&id, ThumbnailQuality::Medium),
            "https://i3.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg"
        );
        assert_eq!(
            thumbnail_url(&id, ThumbnailQuality::High),
            "https://i3.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
        assert_eq!(
            thumbnail_url(&id, ThumbnailQuality::Standard),
            "https://i3.ytimg.com/vi/dQw4w9WgXcQ/sddefault.jpg"
        );
        assert_eq!(
            thumbnail_url(&id, ThumbnailQuality::Max),
            "https://i3.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
    }

    #[test]
    fn webp_urls_use_the_webp_prefix() {
        let id = test_id();
        assert_eq!(
            thumbnail_webp_url(&id, ThumbnailQuality::Standard),
            "https://i3.ytimg.com/vi_webp/dQw4w9WgXcQ/sddefault.webp"
        );
    }

    #[test]
    fn default_quality_is_standard() {
        assert_eq!(ThumbnailQuality::default(), ThumbnailQuality::Standard);
    }
}
